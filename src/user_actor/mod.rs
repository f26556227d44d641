//! User-specific resource logic and entity implementation.
//!
//! Users are independent of the other collections; the only cross-record rule is email
//! uniqueness, checked by the actor against its own collection.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::framework::{Backend, ResourceActor};
use crate::model::User;

/// Creates a new User actor over `backend`, and its client.
pub fn new(buffer_size: usize, backend: Box<dyn Backend<User>>) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::with_backend(buffer_size, backend);
    (actor, UserClient::new(generic_client))
}
