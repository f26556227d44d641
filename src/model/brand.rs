//! Brand records and payloads.
//!
//! See [`impl ActorEntity for Brand`](crate::brand_actor::entity) for how payloads are
//! validated and merged.

use super::BrandId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A brand products can belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({"id": "1", "brandName": "Nike", "description": "Sportswear", "active": true}))]
pub struct Brand {
    #[schema(value_type = String)]
    pub id: BrandId,
    pub brand_name: String,
    pub description: String,
    pub active: bool,
}

/// Payload for `POST /brands`. Every field is optional at the type level so a missing
/// `brandName` is reported as a validation error rather than a decoding failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BrandCreate {
    pub brand_name: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
}

impl BrandCreate {
    pub fn named(brand_name: impl Into<String>) -> Self {
        Self {
            brand_name: Some(brand_name.into()),
            ..Default::default()
        }
    }
}

/// Payload for `PUT`/`PATCH /brands/{id}`. Absent fields keep their stored value; an explicit
/// `"brandName": null` does not decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BrandUpdate {
    #[serde(default, deserialize_with = "crate::validation::present")]
    pub brand_name: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
}
