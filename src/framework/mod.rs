//! Generic actor framework for collection management.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns one collection
//! - [`ResourceClient`] - Type-safe, cloneable handle to an actor
//! - [`ActorClient`] - Base trait for the resource-specific client wrappers
//! - [`Backend`] - Storage behind an actor (in-memory or JSON snapshot)
//! - [`FrameworkError`] - Common error type
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod backend;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use backend::{open_backend, Backend, BackendError, JsonFileBackend, MemoryBackend, StorageKind};
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::{ActorEntity, UpdateMode};
pub use error::FrameworkError;
pub use message::{Predicate, ResourceRequest, Response};
