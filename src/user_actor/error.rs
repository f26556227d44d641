//! Error types for the User actor.

use crate::validation::FieldError;
use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The requested user was not found.
    #[error("User not found: {0}")]
    NotFound(String),

    /// The user data provided is invalid.
    #[error("User validation error: {0}")]
    ValidationError(#[from] FieldError),

    /// Another user already registered this email.
    #[error("Email already in use: {0}")]
    EmailInUse(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for UserError {
    fn from(msg: String) -> Self {
        UserError::ActorCommunicationError(msg)
    }
}
