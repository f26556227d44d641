//! Runtime orchestration and lifecycle management.
//!
//! - **Actor lifecycle**: opening storage, starting and wiring the collection actors,
//!   shutting them down
//! - **Startup data**: the movie list and generated catalog fixtures
//! - **Observability setup**: the global tracing subscriber
//!
//! # Main Components
//!
//! - [`CatalogSystem`] - owns every collection actor and hands out their clients
//! - [`seed_all`] - loads startup data through those clients
//! - [`setup_tracing`] - initializes logging

pub mod catalog_system;
pub mod fixtures;
pub mod tracing;

pub use catalog_system::*;
pub use fixtures::*;
pub use self::tracing::setup_tracing;
