//! Brand-specific resource logic and entity implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::{BrandClient, ProductClient};
use crate::framework::{Backend, ResourceActor};
use crate::model::Brand;

/// Creates a new Brand actor over `backend`, and its client.
///
/// The client needs the product client for the dependents check on delete.
pub fn new(
    buffer_size: usize,
    backend: Box<dyn Backend<Brand>>,
    products: ProductClient,
) -> (ResourceActor<Brand>, BrandClient) {
    let (actor, generic_client) = ResourceActor::with_backend(buffer_size, backend);
    let client = BrandClient::new(generic_client, products);
    (actor, client)
}
