//! Error types for the Category actor.

use crate::validation::FieldError;
use thiserror::Error;

/// Errors that can occur during category operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CategoryError {
    /// The requested category was not found.
    #[error("Category not found: {0}")]
    NotFound(String),

    /// The category data provided is invalid.
    #[error("Category validation error: {0}")]
    ValidationError(#[from] FieldError),

    /// Products still reference the category, so it cannot be deleted.
    #[error("Category {0} has dependent products")]
    HasProducts(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CategoryError {
    fn from(msg: String) -> Self {
        CategoryError::ActorCommunicationError(msg)
    }
}
