//! # Product Actor
//!
//! Owns the product collection and enforces its references: a product's `categoryId` and
//! `brandId` must name existing records when the product is created and whenever an update
//! supplies them. The checks need the brand and category actors, which are injected as a
//! [`ProductContext`] when the actor starts:
//!
//! ```rust,ignore
//! let (actor, products) = product_actor::new(32, backend);
//! tokio::spawn(actor.run(ProductContext {
//!     brands: brand_resource_client,
//!     categories: category_resource_client,
//! }));
//! ```
//!
//! The context holds raw `ResourceClient`s rather than the wrappers, because the brand and
//! category wrappers hold a `ProductClient` themselves and the wiring must stay acyclic for
//! shutdown by channel closure.

pub mod entity;
pub mod error;

pub use entity::ProductContext;
pub use error::*;

use crate::clients::ProductClient;
use crate::framework::{Backend, ResourceActor};
use crate::model::Product;

/// Creates a new Product actor over `backend`, and its client.
pub fn new(
    buffer_size: usize,
    backend: Box<dyn Backend<Product>>,
) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::with_backend(buffer_size, backend);
    (actor, ProductClient::new(generic_client))
}
