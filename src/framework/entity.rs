//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract every catalog resource (Brand, Category,
//! Product, User, Movie) implements to be managed by the generic `ResourceActor`. It names
//! the id, the create and update DTOs, the injected context and the error type, and provides
//! the lifecycle hooks the actor calls around every mutation.
//!
//! # Hook Order
//!
//! For a create the actor calls, in order:
//! 1. [`ActorEntity::from_create_params`] (required fields, defaults)
//! 2. [`ActorEntity::on_create`] (async checks against other actors)
//! 3. [`ActorEntity::check_collection`] (checks against the entity's own collection)
//!
//! For an update it clones the stored record and runs [`ActorEntity::on_update`] followed by
//! [`ActorEntity::check_collection`] on the clone. Only when every hook succeeded is the
//! result written to the backend, so a failed operation never leaves a partial mutation.

use crate::framework::backend::Backend;
use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// How an update request merges into the stored record.
///
/// Both modes merge: fields present in the update win, absent fields are kept.
/// They differ only in what counts as a complete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// PUT: every required field must be supplied and non-empty.
    Full,
    /// PATCH: required fields are optional, but must be non-empty when supplied.
    Partial,
}

impl UpdateMode {
    /// Returns true when required fields may be left out of the update.
    pub fn is_partial(self) -> bool {
        matches!(self, UpdateMode::Partial)
    }
}

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks (e.g., asking
/// another actor whether a referenced record exists). The `Context` type is injected into
/// every hook when the actor starts running, so dependencies are bound late (passed to
/// `run()` instead of `new()`).
#[async_trait]
pub trait ActorEntity: Clone + Debug + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for sequential ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance (every field optional).
    type Update: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// The framework boxes it into [`FrameworkError::EntityError`](crate::framework::FrameworkError::EntityError);
    /// resource clients downcast it back so callers always see the typed error.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the id the record is stored under.
    fn id(&self) -> &Self::Id;

    /// Construct the full entity from the id and payload, applying defaults.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is built and before it is stored.
    /// Use this hook for validation that needs other actors.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Merge an update into a working copy of the stored record.
    async fn on_update(
        &mut self,
        update: Self::Update,
        mode: UpdateMode,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the collection.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Validate the candidate record against the rest of its own collection
    /// (uniqueness constraints). `existing` still holds the pre-write state.
    fn check_collection(&self, _existing: &dyn Backend<Self>) -> Result<(), Self::Error> {
        Ok(())
    }
}
