//! Error types for the Order actor.

use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found, or the caller may not see it.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The order exists but its current status forbids the operation.
    #[error("Order state conflict: {0}")]
    InvalidState(String),

    /// The order data provided is invalid.
    #[error("Order validation error: {0}")]
    Validation(String),

    /// The actor system could not service the request.
    #[error("Order service unavailable: {0}")]
    Transient(String),
}
