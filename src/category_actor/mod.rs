//! Category-specific resource logic and entity implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::{CategoryClient, ProductClient};
use crate::framework::{Backend, ResourceActor};
use crate::model::Category;

/// Creates a new Category actor over `backend`, and its client.
pub fn new(
    buffer_size: usize,
    backend: Box<dyn Backend<Category>>,
    products: ProductClient,
) -> (ResourceActor<Category>, CategoryClient) {
    let (actor, generic_client) = ResourceActor::with_backend(buffer_size, backend);
    let client = CategoryClient::new(generic_client, products);
    (actor, client)
}
