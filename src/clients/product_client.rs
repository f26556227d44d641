//! # Product Client
//!
//! Besides the CRUD surface, the product client answers the questions other collections ask
//! about products: which products sit in a category or carry a brand, and whether any do.
use crate::framework::{ActorClient, FrameworkError, Predicate, ResourceClient};
use crate::model::{BrandId, CategoryId, Product};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast::<ProductError>() {
            Ok(e) => e,
            Err(FrameworkError::NotFound(id)) => ProductError::NotFound(id),
            Err(other) => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ProductClient {
    /// Products whose `categoryId` is `category_id`, in insertion order.
    #[instrument(skip(self))]
    pub async fn list_by_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        self.inner
            .list(Some(Predicate::new(move |p: &Product| {
                p.category_id == category_id
            })))
            .await
            .map_err(Self::map_error)
    }

    /// Products whose `brandId` is `brand_id`, in insertion order.
    #[instrument(skip(self))]
    pub async fn list_by_brand(&self, brand_id: BrandId) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        self.inner
            .list(Some(Predicate::new(move |p: &Product| p.brand_id == brand_id)))
            .await
            .map_err(Self::map_error)
    }

    /// Whether any product still references the category.
    #[instrument(skip(self))]
    pub async fn references_category(&self, category_id: CategoryId) -> Result<bool, ProductError> {
        debug!("Sending request");
        self.inner
            .exists(Predicate::new(move |p: &Product| {
                p.category_id == category_id
            }))
            .await
            .map_err(Self::map_error)
    }

    /// Whether any product still references the brand.
    #[instrument(skip(self))]
    pub async fn references_brand(&self, brand_id: BrandId) -> Result<bool, ProductError> {
        debug!("Sending request");
        self.inner
            .exists(Predicate::new(move |p: &Product| p.brand_id == brand_id))
            .await
            .map_err(Self::map_error)
    }
}
