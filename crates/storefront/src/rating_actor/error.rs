//! Error types for the Rating actor.

use thiserror::Error;

/// Errors that can occur during rating operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RatingError {
    /// The requested rating was not found.
    #[error("Rating not found: {0}")]
    NotFound(String),

    /// The rating data provided is invalid.
    #[error("Rating validation error: {0}")]
    Validation(String),

    /// The caller lacks the capability this operation requires.
    #[error("Rating operation forbidden: {0}")]
    Forbidden(String),

    /// The actor system could not service the request.
    #[error("Rating service unavailable: {0}")]
    Transient(String),
}
