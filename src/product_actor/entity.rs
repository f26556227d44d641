//! [`ActorEntity`] implementation for [`Product`].
//!
//! Products are the only entity with foreign keys. The checks run inside the product actor:
//! `on_create` and `on_update` ask the brand and category actors (through the clients in
//! [`ProductContext`]) whether the referenced records exist. Those actors never call back
//! into the product actor, so the wait cannot deadlock.

use super::ProductError;
use crate::framework::{ActorEntity, ResourceClient, UpdateMode};
use crate::model::{
    Brand, BrandId, Category, CategoryId, Product, ProductCreate, ProductId, ProductUpdate,
};
use crate::validation::{check_amount, merge_required, merge_text, require, require_text};
use async_trait::async_trait;

/// Dependencies injected into the product actor.
#[derive(Clone)]
pub struct ProductContext {
    pub brands: ResourceClient<Brand>,
    pub categories: ResourceClient<Category>,
}

impl ProductContext {
    async fn ensure_category(&self, id: CategoryId) -> Result<(), ProductError> {
        match self.categories.get(id).await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(ProductError::CategoryNotFound(id.to_string())),
            Err(e) => Err(ProductError::ActorCommunicationError(e.to_string())),
        }
    }

    async fn ensure_brand(&self, id: BrandId) -> Result<(), ProductError> {
        match self.brands.get(id).await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(ProductError::BrandNotFound(id.to_string())),
            Err(e) => Err(ProductError::ActorCommunicationError(e.to_string())),
        }
    }
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Context = ProductContext;
    type Error = ProductError;

    fn id(&self) -> &ProductId {
        &self.id
    }

    /// Checks the required fields and applies defaults (`image`/`description` empty,
    /// `stock` 0). References are resolved later, in `on_create`.
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        let price = require("price", params.price)?;
        Ok(Self {
            id,
            name: require_text("name", params.name)?,
            price: check_amount("price", price)?,
            image: params.image.unwrap_or_default(),
            description: params.description.unwrap_or_default(),
            stock: params.stock.unwrap_or(0),
            category_id: require("categoryId", params.category_id)?,
            brand_id: require("brandId", params.brand_id)?,
        })
    }

    async fn on_create(&mut self, ctx: &ProductContext) -> Result<(), ProductError> {
        ctx.ensure_category(self.category_id).await?;
        ctx.ensure_brand(self.brand_id).await
    }

    /// Merges the update. A `categoryId` or `brandId` present in the update is resolved
    /// again before it is applied.
    async fn on_update(
        &mut self,
        update: ProductUpdate,
        mode: UpdateMode,
        ctx: &ProductContext,
    ) -> Result<(), ProductError> {
        let name = merge_text("name", update.name, mode)?;
        let price = merge_required("price", update.price, mode)?
            .map(|price| check_amount("price", price))
            .transpose()?;
        let category_id = merge_required("categoryId", update.category_id, mode)?;
        let brand_id = merge_required("brandId", update.brand_id, mode)?;

        if let Some(category_id) = category_id {
            ctx.ensure_category(category_id).await?;
            self.category_id = category_id;
        }
        if let Some(brand_id) = brand_id {
            ctx.ensure_brand(brand_id).await?;
            self.brand_id = brand_id;
        }
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(image) = update.image {
            self.image = image;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        Ok(())
    }
}
