//! Protocol error types.

use thiserror::Error;

/// Wire-level errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Deserialization failed.
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// Payload was syntactically valid JSON but not a legal payload shape.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}
