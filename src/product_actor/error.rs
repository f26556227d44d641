//! Error types for the Product actor.

use crate::validation::FieldError;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The product data provided is invalid.
    #[error("Product validation error: {0}")]
    ValidationError(#[from] FieldError),

    /// `categoryId` does not name an existing category.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// `brandId` does not name an existing brand.
    #[error("Brand not found: {0}")]
    BrandNotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ProductError {
    fn from(msg: String) -> Self {
        ProductError::ActorCommunicationError(msg)
    }
}
