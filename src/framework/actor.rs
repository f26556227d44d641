//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns one collection and
//! serializes every operation on it. It is the "server" half of the actor model; the
//! matching `ResourceClient` is the cloneable handle callers hold.

use crate::framework::backend::{Backend, MemoryBackend};
use crate::framework::client::ResourceClient;
use crate::framework::entity::{ActorEntity, UpdateMode};
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages one collection of entities.
///
/// # Concurrency Model
/// Each actor runs in its own Tokio task and processes its mailbox one message at a time.
/// The backend is owned by the task, so the collection needs no `Mutex` or `RwLock`.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new()` (in-memory) or `ResourceActor::with_backend()`
///    returns the actor and its client.
/// 2. **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3. **Run**: spawn the run loop on a background task.
///
/// # Operations
///
/// * **Create**: peeks the next id from the backend, builds the entity, runs `on_create` and
///   `check_collection`, then inserts. Ids are only consumed by successful inserts.
/// * **Get / List / Exists**: read-only queries against the backend.
/// * **Update**: runs the hooks on a clone of the stored record and writes the clone back
///   only when every hook succeeded.
/// * **Delete**: runs `on_delete`, removes the record and returns it.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    backend: Box<dyn Backend<T>>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates an actor over an empty in-memory collection, plus its client.
    ///
    /// `buffer_size` is the mailbox capacity; senders wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        Self::with_backend(buffer_size, Box::new(MemoryBackend::<T>::new()))
    }

    /// Creates an actor over the given backend, plus its client.
    pub fn with_backend(
        buffer_size: usize,
        backend: Box<dyn Backend<T>>,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, backend };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows entities
    /// to reach other actors whose clients were created *after* this actor was built.
    pub async fn run(mut self, context: T::Context) {
        // "Brand" instead of "catalog_store::model::brand::Brand"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.backend.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context).await;
                    match &result {
                        Ok(item) => {
                            info!(entity_type, id = %item.id(), size = self.backend.len(), "Created")
                        }
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.backend.find_by_id(&id);
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { filter, respond_to } => {
                    let mut items = self.backend.list_all();
                    if let Some(filter) = filter {
                        items.retain(|item| filter.matches(item));
                    }
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Exists {
                    predicate,
                    respond_to,
                } => {
                    let exists = self.backend.exists_where(&|item| predicate.matches(item));
                    debug!(entity_type, exists, "Exists");
                    let _ = respond_to.send(Ok(exists));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    mode,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, ?mode, "Update");
                    let result = self.update(&id, update, mode, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(&id, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, size = self.backend.len(), "Deleted"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.backend.len(), "Shutdown");
    }

    async fn create(&mut self, params: T::Create, context: &T::Context) -> Result<T, FrameworkError> {
        let id = T::Id::from(self.backend.next_id());
        let mut item = T::from_create_params(id, params).map_err(entity_error)?;
        item.on_create(context).await.map_err(entity_error)?;
        item.check_collection(self.backend.as_ref())
            .map_err(entity_error)?;
        self.backend.insert(item.clone())?;
        Ok(item)
    }

    async fn update(
        &mut self,
        id: &T::Id,
        update: T::Update,
        mode: UpdateMode,
        context: &T::Context,
    ) -> Result<T, FrameworkError> {
        let mut working = self
            .backend
            .find_by_id(id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        working
            .on_update(update, mode, context)
            .await
            .map_err(entity_error)?;
        working
            .check_collection(self.backend.as_ref())
            .map_err(entity_error)?;
        self.backend.update(working.clone())?;
        Ok(working)
    }

    async fn delete(&mut self, id: &T::Id, context: &T::Context) -> Result<T, FrameworkError> {
        let item = self
            .backend
            .find_by_id(id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        item.on_delete(context).await.map_err(entity_error)?;
        self.backend
            .remove(id)?
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))
    }
}

fn entity_error<E: std::error::Error + Send + Sync + 'static>(e: E) -> FrameworkError {
    FrameworkError::EntityError(Box::new(e))
}
