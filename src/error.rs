//! Error Types
//!
//! Everything here ends up as a status message at the controller boundary.

use thiserror::Error;

/// Generic message shown when the server gives no usable `error` field
pub const GENERIC_FAILURE: &str = "Request failed.";

/// The request never produced an HTTP response (offline, CORS, aborted).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Failure of a round trip to the server
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Network(#[from] TransportError),
    #[error("{message}")]
    Server { status: u16, message: String },
    /// Success status, but the body is not a state payload
    #[error("Request failed.")]
    Malformed,
}

/// Anything that turns a user action into a failure status
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("Enter a -disablepacks argument first.")]
    EmptyArgument,
}

/// Clipboard failures are recovered locally and only logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
    #[error("output field `{0}` not found")]
    MissingField(&'static str),
    #[error("legacy copy failed: {0}")]
    LegacyCopy(String),
}
