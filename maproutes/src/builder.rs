//! Fluent request builder.
//!
//! [`RoutesBuilder`] collects request parameters, renders them into a geocode
//! or directions URL, sends one blocking GET and returns the parsed
//! [`RouteResult`].
//!
//! ```ignore
//! use maproutes::{MapsConfig, Operation, Region, RoutesBuilder};
//!
//! let steps = RoutesBuilder::new(MapsConfig::from_env()?)
//!     .origin("Sudbury")
//!     .destination("Ottawa")
//!     .region(Region::En)
//!     .operation(Operation::Directions)
//!     .build()?
//!     .directions()?;
//! ```

use std::time::Instant;

use crate::config::MapsConfig;
use crate::error::{Result, RoutesError};
use crate::request::{Address, DirectionsQuery, RouteRequest};
use crate::response::RouteResult;
use crate::transport::Transport;
use crate::types::{Mode, Operation, Region};

/// Builder for a single geocode or directions request.
///
/// Setters store values verbatim. Presence is checked when the request is
/// rendered by [`request_url`](Self::request_url) or [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct RoutesBuilder {
    config: MapsConfig,
    operation: Option<Operation>,
    street_number: Option<u32>,
    street_name: Option<String>,
    city: Option<String>,
    state_or_province: Option<String>,
    origin: Option<String>,
    destination: Option<String>,
    region: Option<Region>,
    mode: Option<Mode>,
}

impl RoutesBuilder {
    /// Create a builder using the given configuration.
    pub fn new(config: MapsConfig) -> Self {
        Self {
            config,
            operation: None,
            street_number: None,
            street_name: None,
            city: None,
            state_or_province: None,
            origin: None,
            destination: None,
            region: None,
            mode: None,
        }
    }

    /// Create a builder configured from `OUTREACH_MAPS_KEY`.
    ///
    /// See [`MapsConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(MapsConfig::from_env()?))
    }

    /// Select the endpoint. Must be set before [`build`](Self::build).
    pub fn operation(mut self, operation: Operation) -> Self {
        self.operation = Some(operation);
        self
    }

    pub fn street_number(mut self, street_number: u32) -> Self {
        self.street_number = Some(street_number);
        self
    }

    pub fn street_name(mut self, street_name: impl Into<String>) -> Self {
        self.street_name = Some(street_name.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn state_or_province(mut self, state_or_province: impl Into<String>) -> Self {
        self.state_or_province = Some(state_or_province.into());
        self
    }

    /// Set the starting point of a directions request.
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Set the end point of a directions request.
    pub fn destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    /// Set the locale hint of a directions request.
    pub fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Set the travel mode of a directions request.
    ///
    /// When unset, no `mode` parameter is sent and the API picks driving.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Borrow the configuration this builder sends requests with.
    pub fn config(&self) -> &MapsConfig {
        &self.config
    }

    /// Validate the collected parameters into a [`RouteRequest`].
    ///
    /// # Errors
    ///
    /// Returns [`RoutesError::MissingField`] if the operation or a field the
    /// operation requires was never set.
    pub fn to_request(&self) -> Result<RouteRequest> {
        let operation = required(self.operation, "Operation")?;

        Ok(match operation {
            Operation::Geocode => RouteRequest::Geocode(Address {
                street_number: required(self.street_number, "Street number")?,
                street_name: required(self.street_name.clone(), "Street name")?,
                city: required(self.city.clone(), "City")?,
                state_or_province: required(self.state_or_province.clone(), "State or province")?,
            }),
            Operation::Directions => RouteRequest::Directions(DirectionsQuery {
                origin: required(self.origin.clone(), "Origin")?,
                destination: required(self.destination.clone(), "Destination")?,
                region: required(self.region, "Region")?,
                mode: self.mode,
            }),
        })
    }

    /// Render the request URL without sending anything.
    pub fn request_url(&self) -> Result<String> {
        Ok(self.to_request()?.to_url(&self.config))
    }

    /// Send the request and parse the response.
    ///
    /// Performs exactly one blocking GET. The HTTP client lives only for the
    /// duration of this call.
    ///
    /// # Errors
    ///
    /// - [`RoutesError::MissingField`] if a required parameter is unset
    /// - [`RoutesError::Http`] / [`RoutesError::HttpStatus`] on transport failure
    /// - [`RoutesError::Json`] if the body is not a valid response document
    pub fn build(self) -> Result<RouteResult> {
        let request = self.to_request()?;
        let operation = request.operation();
        let url = request.to_url(&self.config);

        tracing::debug!(
            operation = %operation,
            url = %self.config.redact(&url),
            "Sending Maps request"
        );

        let start = Instant::now();
        let transport = Transport::new(&self.config)?;
        let (http_status, body) = transport.get_text(&url)?;
        let result = RouteResult::parse(operation, &body)?;

        tracing::debug!(
            operation = %operation,
            http_status,
            status = result.status(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Maps response parsed"
        );

        Ok(result)
    }
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or(RoutesError::MissingField { field })
}
