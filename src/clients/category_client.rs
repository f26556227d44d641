//! # Category Client
use crate::category_actor::CategoryError;
use crate::clients::ProductClient;
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Category, CategoryId};
use async_trait::async_trait;
use tracing::{debug, instrument, warn};

/// Client for interacting with the Category actor.
///
/// Like [`BrandClient`](crate::clients::BrandClient), it consults the product actor before
/// deleting.
#[derive(Clone)]
pub struct CategoryClient {
    inner: ResourceClient<Category>,
    products: ProductClient,
}

impl CategoryClient {
    pub fn new(inner: ResourceClient<Category>, products: ProductClient) -> Self {
        Self { inner, products }
    }
}

#[async_trait]
impl ActorClient<Category> for CategoryClient {
    type Error = CategoryError;

    fn inner(&self) -> &ResourceClient<Category> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast::<CategoryError>() {
            Ok(e) => e,
            Err(FrameworkError::NotFound(id)) => CategoryError::NotFound(id),
            Err(other) => CategoryError::ActorCommunicationError(other.to_string()),
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: CategoryId) -> Result<Category, CategoryError> {
        debug!("Checking dependent products");
        let referenced = self
            .products
            .references_category(id)
            .await
            .map_err(|e| CategoryError::ActorCommunicationError(e.to_string()))?;
        if referenced {
            if self.inner.get(id).await.map_err(Self::map_error)?.is_none() {
                return Err(CategoryError::NotFound(id.to_string()));
            }
            warn!("Category still referenced by products");
            return Err(CategoryError::HasProducts(id.to_string()));
        }
        self.inner.delete(id).await.map_err(Self::map_error)
    }
}
