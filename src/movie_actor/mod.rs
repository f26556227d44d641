//! Movie resource logic.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::MovieClient;
use crate::framework::{Backend, ResourceActor};
use crate::model::Movie;

/// Creates a new Movie actor over `backend`, and its client.
pub fn new(
    buffer_size: usize,
    backend: Box<dyn Backend<Movie>>,
) -> (ResourceActor<Movie>, MovieClient) {
    let (actor, generic_client) = ResourceActor::with_backend(buffer_size, backend);
    (actor, MovieClient::new(generic_client))
}
