//! # Generic Client
//!
//! The cloneable handle used to talk to a `ResourceActor`.

use crate::framework::entity::{ActorEntity, UpdateMode};
use crate::framework::error::FrameworkError;
use crate::framework::message::{Predicate, ResourceRequest};
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `ResourceActor`.
///
/// Holds only the mailbox sender, so cloning is cheap. Every method sends one request and
/// awaits the actor's reply; a closed mailbox yields `ActorClosed`, a dropped reply channel
/// `ActorDropped`.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, FrameworkError>>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Creates a record and returns it as stored, id and defaults included.
    pub async fn create(&self, params: T::Create) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    /// Lists records in insertion order, optionally filtered inside the actor.
    pub async fn list(&self, filter: Option<Predicate<T>>) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { filter, respond_to })
            .await
    }

    pub async fn exists(&self, predicate: Predicate<T>) -> Result<bool, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Exists {
            predicate,
            respond_to,
        })
        .await
    }

    pub async fn update(
        &self,
        id: T::Id,
        update: T::Update,
        mode: UpdateMode,
    ) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update {
            id,
            update,
            mode,
            respond_to,
        })
        .await
    }

    /// Deletes a record and returns what was removed.
    pub async fn delete(&self, id: T::Id) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }
}
