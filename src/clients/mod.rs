//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! Each wrapper implements [`ActorClient`](crate::framework::ActorClient) for the CRUD
//! surface and maps framework errors back into the resource's own error type.

pub mod brand_client;
pub mod category_client;
pub mod movie_client;
pub mod product_client;
pub mod user_client;

pub use brand_client::*;
pub use category_client::*;
pub use movie_client::*;
pub use product_client::*;
pub use user_client::*;
