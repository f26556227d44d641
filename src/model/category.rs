use super::CategoryId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({"id": "1", "categoryName": "Tools", "description": "Hand tools", "active": true}))]
pub struct Category {
    #[schema(value_type = String)]
    pub id: CategoryId,
    pub category_name: String,
    pub description: String,
    pub active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCreate {
    pub category_name: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
}

impl CategoryCreate {
    pub fn named(category_name: impl Into<String>) -> Self {
        Self {
            category_name: Some(category_name.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    #[serde(default, deserialize_with = "crate::validation::present")]
    pub category_name: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
}
