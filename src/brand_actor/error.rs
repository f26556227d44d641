//! Error types for the Brand actor.

use crate::validation::FieldError;
use thiserror::Error;

/// Errors that can occur during brand operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BrandError {
    /// The requested brand was not found.
    #[error("Brand not found: {0}")]
    NotFound(String),

    /// The brand data provided is invalid.
    #[error("Brand validation error: {0}")]
    ValidationError(#[from] FieldError),

    /// Products still reference the brand, so it cannot be deleted.
    #[error("Brand {0} has dependent products")]
    HasProducts(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for BrandError {
    fn from(msg: String) -> Self {
        BrandError::ActorCommunicationError(msg)
    }
}
