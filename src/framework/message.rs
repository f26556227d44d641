//! # Generic Messages
//!
//! Requests a `ResourceClient` sends to its `ResourceActor`, one variant per collection
//! operation. Every variant carries a oneshot sender for the reply.

use crate::framework::entity::{ActorEntity, UpdateMode};
use crate::framework::error::FrameworkError;
use std::fmt;
use std::sync::Arc;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// A filter evaluated inside the actor against every stored record.
///
/// Queries like "products of brand 3" or "does any product reference category 5" are shipped
/// to the owning actor as a `Predicate` so the collection never leaves its task.
#[derive(Clone)]
pub struct Predicate<T>(Arc<dyn Fn(&T) -> bool + Send + Sync>);

impl<T> Predicate<T> {
    pub fn new(f: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn matches(&self, item: &T) -> bool {
        (self.0)(item)
    }
}

impl<T> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate")
    }
}

/// Internal message type sent to the actor to request operations.
///
/// Variants map onto the collection operations: `Create`, `Get`, `List`, `Exists`, `Update`
/// and `Delete`. The message is generic over `T: ActorEntity`, so a user payload can never
/// be sent to the product actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        filter: Option<Predicate<T>>,
        respond_to: Response<Vec<T>>,
    },
    Exists {
        predicate: Predicate<T>,
        respond_to: Response<bool>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        mode: UpdateMode,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<T>,
    },
}
