//! Client configuration.
//!
//! [`MapsConfig`] carries everything a request needs besides its parameters:
//! the API key, the endpoint base URL and the request timeout.

use std::fmt;

use crate::error::{Result, RoutesError};

/// Environment variable holding the Maps API key.
pub const API_KEY_ENV: &str = "OUTREACH_MAPS_KEY";

/// Base URL of the Google Maps web services.
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/";

/// Default timeout for HTTP requests in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for talking to the Maps endpoints.
#[derive(Clone)]
pub struct MapsConfig {
    /// API key appended as `key=` to every request.
    pub api_key: String,
    /// Prefix the endpoint path (`geocode/json?...`) is appended to.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl MapsConfig {
    /// Create a configuration for the public Google endpoints.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Create a configuration from the environment.
    ///
    /// # Environment Variables
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `OUTREACH_MAPS_KEY` | Google Maps API key | Required |
    ///
    /// The variable is read when this function is called, not cached.
    ///
    /// # Errors
    ///
    /// Returns [`RoutesError::MissingApiKey`] if `OUTREACH_MAPS_KEY` is unset
    /// or empty.
    pub fn from_env() -> Result<Self> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(RoutesError::MissingApiKey),
        }
    }

    /// Point requests at a different base URL.
    ///
    /// A trailing `/` is added when missing.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Replace the API key in `text` so it can be logged.
    pub(crate) fn redact(&self, text: &str) -> String {
        if self.api_key.is_empty() {
            text.to_string()
        } else {
            text.replace(&self.api_key, "<redacted>")
        }
    }
}

impl fmt::Debug for MapsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapsConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
