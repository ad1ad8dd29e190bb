//! Error types for the maproutes library.

use thiserror::Error;

use crate::types::Operation;

/// Errors that can occur when building or reading a Maps request.
#[derive(Error, Debug)]
pub enum RoutesError {
    /// A required request parameter was never set.
    #[error("{field} cannot be empty")]
    MissingField { field: &'static str },

    /// An argument was not acceptable for the requested call.
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// The accessor does not apply to the operation that was built.
    #[error("Does not support {operation}")]
    UnsupportedOperation { operation: Operation },

    /// No API key was configured.
    #[error("OUTREACH_MAPS_KEY environment variable not set")]
    MissingApiKey,

    /// The upstream service answered with `ZERO_RESULTS`.
    #[error("No results for {operation} request")]
    ZeroResults { operation: Operation },

    /// The upstream service answered with a status other than `OK`.
    #[error("Upstream status {status}: {message}")]
    Upstream { status: String, message: String },

    /// The response parsed but lacks the fields the accessor reads.
    #[error("Malformed response: {reason}")]
    MalformedResponse { reason: String },

    /// Non-success HTTP status.
    #[error("HTTP {status}")]
    HttpStatus { status: u16 },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Body was not valid JSON or did not match the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RoutesError {
    /// Returns `true` for errors caused by the caller's arguments rather than
    /// by the network or the upstream service.
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            RoutesError::MissingField { .. } | RoutesError::InvalidArgument { .. }
        )
    }
}

/// Result type alias using [`RoutesError`].
pub type Result<T> = std::result::Result<T, RoutesError>;
