//! # Catalog Store
//!
//! > **A referential CRUD store for a small product catalog, served over HTTP.**
//!
//! Brands, categories, products, users and movies each live in their own collection, owned
//! by a single Tokio task. Products point at a brand and a category; the store keeps those
//! references valid and refuses to delete a brand or category that is still in use.
//!
//! ## 🏗️ Rules
//!
//! - **References**: a product's `categoryId` and `brandId` must name existing records when
//!   the product is created and whenever an update changes them.
//! - **Dependents**: deleting a brand or category fails while any product references it.
//! - **Unique email**: no two users share an email.
//! - **PUT vs PATCH**: both merge into the stored record. PUT requires every required field;
//!   PATCH applies only what is present. A required field sent as `""` is always rejected.
//! - **Failures are clean**: a rejected operation leaves the collection as it was and does
//!   not consume an id.
//!
//! ## 🚀 Core Concepts
//!
//! ### One actor per collection
//! `ResourceActor<T: ActorEntity>` is written once and runs every collection. Each record
//! type supplies its validation and merge rules through the
//! [`ActorEntity`](framework::ActorEntity) hooks; the actor supplies ids, storage and
//! the message loop. Operations on one collection are serialized by its mailbox, so no locks
//! are needed.
//!
//! ### Swappable storage
//! Collections sit on a [`Backend`](framework::Backend): in memory, or mirrored to a JSON
//! snapshot per collection so data survives a restart.
//!
//! ### Mocking
//! [`MockClient`](framework::mock::MockClient) answers actor requests from a queue of
//! expectations, so cross-collection logic can be tested without the real actors.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic actor, its client, the message types and the storage backends.
//!
//! ### 2. The Orchestrator ([`lifecycle`])
//! [`CatalogSystem`](lifecycle::CatalogSystem) opens storage, starts and wires the actors and
//! shuts them down. Fixtures and tracing setup live here too.
//!
//! ### 3. The Interface ([`clients`])
//! Type-safe clients per collection. The brand and category clients run the dependent
//! products check before a delete.
//!
//! ### 4. The Implementation ([`brand_actor`], [`category_actor`], [`product_actor`],
//! [`user_actor`], [`movie_actor`])
//! `ActorEntity` implementations and error types per collection.
//!
//! ### 5. The Surface ([`api`], [`config`])
//! The axum router with its OpenAPI document, and layered configuration.
//!
//! ## Running
//!
//! ```bash
//! # In-memory, seeded with fixtures
//! RUST_LOG=info cargo run
//!
//! # Persist to ./data, reproducible fixtures
//! cargo run -- --storage json --data-dir ./data --seed 42
//! ```

pub mod api;
pub mod brand_actor;
pub mod category_actor;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod movie_actor;
pub mod product_actor;
pub mod user_actor;
pub mod validation;
