//! Error types for the Movie actor.

use crate::validation::FieldError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum MovieError {
    #[error("Movie not found: {0}")]
    NotFound(String),

    #[error("Movie validation error: {0}")]
    ValidationError(#[from] FieldError),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for MovieError {
    fn from(msg: String) -> Self {
        MovieError::ActorCommunicationError(msg)
    }
}
