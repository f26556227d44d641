//! # ActorClient Trait
//!
//! Common interface for the resource-specific clients, with default CRUD methods built on
//! the inner `ResourceClient`.

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, UpdateMode};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard CRUD operations.
///
/// Implementors only supply access to the inner client and an error mapping. Wrappers
/// whose operations need orchestration across actors (brand and category deletes) override
/// the default.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID. `Ok(None)` when it does not exist.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Create a record, returning it with its id and defaults.
    #[tracing::instrument(skip(self))]
    async fn create(&self, params: T::Create) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().create(params).await.map_err(Self::map_error)
    }

    /// Full update (PUT): required fields must be present, absent optional fields are kept.
    #[tracing::instrument(skip(self))]
    async fn update(&self, id: T::Id, update: T::Update) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner()
            .update(id, update, UpdateMode::Full)
            .await
            .map_err(Self::map_error)
    }

    /// Partial update (PATCH): only the fields present are applied.
    #[tracing::instrument(skip(self))]
    async fn patch(&self, id: T::Id, update: T::Update) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner()
            .update(id, update, UpdateMode::Partial)
            .await
            .map_err(Self::map_error)
    }

    /// Every record, in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(None).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID, returning the removed record.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
