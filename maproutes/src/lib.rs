//! # maproutes - Google Maps geocoding and directions client
//!
//! A small blocking client for two Google Maps web services:
//!
//! - **Geocoding**: street address to latitude/longitude
//! - **Directions**: ordered, human-readable steps between two places
//!
//! A [`RoutesBuilder`] collects the request parameters, sends a single GET and
//! returns a [`RouteResult`] that can be read as directions or as a geocode,
//! depending on the operation it was built for.
//!
//! ## Quick Start
//!
//! ```ignore
//! use maproutes::{MapsConfig, Operation, RoutesBuilder};
//!
//! // Reads OUTREACH_MAPS_KEY
//! let config = MapsConfig::from_env()?;
//!
//! let location = RoutesBuilder::new(config)
//!     .street_number(1600)
//!     .street_name("Amphitheatre Parkway")
//!     .city("Mountain View")
//!     .state_or_province("CA")
//!     .operation(Operation::Geocode)
//!     .build()?
//!     .geocode()?;
//! println!("{}, {}", location.lat, location.lng);
//! ```
//!
//! ## Logging
//!
//! Requests are traced with [`tracing`] at `debug` level. The API key is
//! redacted from logged URLs.

pub mod builder;
pub mod config;
pub mod error;
pub mod request;
pub mod response;
mod transport;
pub mod types;

// Re-export main types at crate root for convenience
pub use builder::RoutesBuilder;
pub use config::{MapsConfig, API_KEY_ENV, DEFAULT_BASE_URL};
pub use error::{Result, RoutesError};
pub use request::{Address, DirectionsQuery, RouteRequest};
pub use response::{LatLng, RouteResult};
pub use types::{Mode, Operation, Region};
