//! Data service error types.

use thiserror::Error;

/// Errors surfaced by the hosted data service client.
#[derive(Debug, Error)]
pub enum DataServiceError {
    /// A single-row read or delete matched nothing.
    #[error("row not found")]
    RowNotFound,

    /// The service rejected an insert for violating a unique constraint.
    #[error("unique constraint violation: {0}")]
    UniqueViolation(String),

    /// Any other error response from the service, message passed through.
    #[error("data service returned {status}: {message}")]
    Service { status: u16, message: String },

    /// Transport-level failure (connection refused, timeout, ...).
    #[error("data service request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body did not match the expected shape.
    #[error("failed to decode data service response: {0}")]
    Decode(#[from] serde_json::Error),
}
