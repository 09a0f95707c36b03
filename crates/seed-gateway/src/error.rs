//! Error types for gateway operations.

use thiserror::Error;

/// Errors surfaced by a document gateway.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The backend could not be reached at all.
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// The addressed document does not exist.
    #[error("document '{id}' not found in collection '{collection}'")]
    NotFound { collection: String, id: String },

    /// Any other backend-reported failure.
    #[error("backend error: {0}")]
    Backend(String),
}
