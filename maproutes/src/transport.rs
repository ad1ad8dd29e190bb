//! Blocking HTTP transport.
//!
//! A [`Transport`] is created for a single request and dropped afterwards, which
//! releases its connections on every exit path.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::MapsConfig;
use crate::error::{Result, RoutesError};

pub(crate) struct Transport {
    client: Client,
}

impl Transport {
    /// Create a transport with the configured timeout.
    pub(crate) fn new(config: &MapsConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client })
    }

    /// GET `url` and return the HTTP status with the full body as text.
    pub(crate) fn get_text(&self, url: &str) -> Result<(u16, String)> {
        let response = self.client.get(url).send()?;
        let status = response.status();

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Maps request failed");
            return Err(RoutesError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        Ok((status.as_u16(), body))
    }
}
