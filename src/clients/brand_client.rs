//! # Brand Client
//!
//! Deleting a brand is the one brand operation that spans two actors: the product actor is
//! asked whether any product still carries the brand, and only then is the delete sent to
//! the brand actor. The brand actor itself never waits on the product actor.
use crate::brand_actor::BrandError;
use crate::clients::ProductClient;
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Brand, BrandId};
use async_trait::async_trait;
use tracing::{debug, instrument, warn};

/// Client for interacting with the Brand actor.
#[derive(Clone)]
pub struct BrandClient {
    inner: ResourceClient<Brand>,
    products: ProductClient,
}

impl BrandClient {
    pub fn new(inner: ResourceClient<Brand>, products: ProductClient) -> Self {
        Self { inner, products }
    }
}

#[async_trait]
impl ActorClient<Brand> for BrandClient {
    type Error = BrandError;

    fn inner(&self) -> &ResourceClient<Brand> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast::<BrandError>() {
            Ok(e) => e,
            Err(FrameworkError::NotFound(id)) => BrandError::NotFound(id),
            Err(other) => BrandError::ActorCommunicationError(other.to_string()),
        }
    }

    /// Deletes the brand unless a product references it.
    #[instrument(skip(self))]
    async fn delete(&self, id: BrandId) -> Result<Brand, BrandError> {
        debug!("Checking dependent products");
        let referenced = self
            .products
            .references_brand(id)
            .await
            .map_err(|e| BrandError::ActorCommunicationError(e.to_string()))?;
        if referenced {
            // absent brands report NotFound, not a conflict
            if self.inner.get(id).await.map_err(Self::map_error)?.is_none() {
                return Err(BrandError::NotFound(id.to_string()));
            }
            warn!("Brand still referenced by products");
            return Err(BrandError::HasProducts(id.to_string()));
        }
        self.inner.delete(id).await.map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::model::Product;

    fn acme() -> Brand {
        Brand {
            id: BrandId(1),
            brand_name: "Acme".into(),
            description: String::new(),
            active: true,
        }
    }

    #[tokio::test]
    async fn delete_is_blocked_by_dependent_products() {
        let mut brands = MockClient::<Brand>::new();
        let mut products = MockClient::<Product>::new();
        products.expect_exists().return_ok(true);
        brands.expect_get(BrandId(1)).return_ok(Some(acme()));

        let client = BrandClient::new(brands.client(), ProductClient::new(products.client()));
        assert_eq!(
            client.delete(BrandId(1)).await,
            Err(BrandError::HasProducts("1".into()))
        );

        brands.verify();
        products.verify();
    }

    #[tokio::test]
    async fn delete_goes_through_when_unreferenced() {
        let mut brands = MockClient::<Brand>::new();
        let mut products = MockClient::<Product>::new();
        products.expect_exists().return_ok(false);
        brands.expect_delete(BrandId(1)).return_ok(acme());

        let client = BrandClient::new(brands.client(), ProductClient::new(products.client()));
        assert_eq!(client.delete(BrandId(1)).await.unwrap(), acme());

        brands.verify();
        products.verify();
    }

    #[tokio::test]
    async fn delete_fails_when_products_are_unreachable() {
        let brands = MockClient::<Brand>::new();
        let mut products = MockClient::<Product>::new();
        products
            .expect_exists()
            .return_err(FrameworkError::ActorClosed);

        let client = BrandClient::new(brands.client(), ProductClient::new(products.client()));
        assert!(matches!(
            client.delete(BrandId(1)).await,
            Err(BrandError::ActorCommunicationError(_))
        ));
    }
}
