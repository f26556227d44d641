//! HTTP layer.
//!
//! Thin translation between axum and the collection clients: path ids and JSON bodies in,
//! `ApiError` status mapping out. No catalog rule lives here.

pub mod docs;
pub mod error;
pub mod handlers;
pub mod server;

pub use error::{ApiError, ErrorBody};
pub use server::{create_app, shutdown_signal, start_server};
