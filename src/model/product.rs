//! Product records and payloads.
//!
//! A product references one [`Brand`](super::Brand) and one [`Category`](super::Category)
//! by id. The references are checked by the product actor on create and whenever an update
//! changes them; see [`crate::product_actor`].

use super::{BrandId, CategoryId, ProductId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Represents a product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "id": "1", "name": "Hammer", "price": 9.99, "image": "", "description": "",
    "stock": 0, "categoryId": "1", "brandId": "1"
}))]
pub struct Product {
    #[schema(value_type = String)]
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub description: String,
    pub stock: u32,
    #[schema(value_type = String)]
    pub category_id: CategoryId,
    #[schema(value_type = String)]
    pub brand_id: BrandId,
}

/// Payload for `POST /products`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub stock: Option<u32>,
    #[schema(value_type = Option<String>)]
    pub category_id: Option<CategoryId>,
    #[schema(value_type = Option<String>)]
    pub brand_id: Option<BrandId>,
}

impl ProductCreate {
    /// The required fields only; everything else takes its default.
    pub fn new(
        name: impl Into<String>,
        price: f64,
        category_id: CategoryId,
        brand_id: BrandId,
    ) -> Self {
        Self {
            name: Some(name.into()),
            price: Some(price),
            category_id: Some(category_id),
            brand_id: Some(brand_id),
            ..Default::default()
        }
    }
}

/// Payload for `PUT`/`PATCH /products/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    #[serde(default, deserialize_with = "crate::validation::present")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::validation::present")]
    pub price: Option<f64>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub stock: Option<u32>,
    #[serde(default, deserialize_with = "crate::validation::present")]
    #[schema(value_type = Option<String>)]
    pub category_id: Option<CategoryId>,
    #[serde(default, deserialize_with = "crate::validation::present")]
    #[schema(value_type = Option<String>)]
    pub brand_id: Option<BrandId>,
}
