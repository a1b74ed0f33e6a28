//! Domain error taxonomy shared by the storage and API layers.

use crate::types::DbId;

/// Domain-level errors.
///
/// The scoring engine and the access decision never produce these — they
/// return plain values. `CoreError` exists for the layers that classify
/// outcomes into HTTP-facing responses.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Malformed or out-of-range input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A uniqueness or state conflict.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// No valid actor context (maps to 401 at the HTTP boundary).
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Valid actor, insufficient privilege or ownership (maps to 403).
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}
