//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber: compact output, no module
//! target (the actors log an `entity_type` field instead), filtered by `RUST_LOG` when it
//! is set and by the configured level otherwise.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: startup with the loaded collection size, shutdown with the final size
//! - **Collection operations**: Create, Get, List, Exists, Update, Delete with the record id
//! - **Client calls**: one span per client method (`#[instrument]`), so the product actor's
//!   brand and category lookups nest under the request that caused them
//! - **HTTP requests**: `tower-http`'s `TraceLayer` opens a span per request
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Full payloads of every operation
//! RUST_LOG=debug cargo run
//!
//! # Only the framework, verbosely
//! RUST_LOG=catalog_store::framework=trace cargo run
//! ```
//!
//! With `RUST_LOG=info`, creating a product against seeded data reads:
//!
//! ```text
//! INFO Created entity_type="Product" id=101 size=101
//! ```
//!
//! and with `RUST_LOG=debug` the brand/category lookups appear before it:
//!
//! ```text
//! DEBUG create: Sending request
//! DEBUG Create entity_type="Product" params=ProductCreate { name: Some("Hammer"), .. }
//! DEBUG Get entity_type="Category" id=1 found=true
//! DEBUG Get entity_type="Brand" id=3 found=true
//! INFO Created entity_type="Product" id=101 size=101
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `default_level` applies when `RUST_LOG` is unset.
pub fn setup_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type identifies the actor
        .compact()
        .init();
}
