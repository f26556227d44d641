//! Movies: a small standalone collection with numeric ids and no relations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Movie identifier. Serialized as a plain JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub u32);

impl From<u32> for MovieId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MovieId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"id": 1, "title": "Tron", "year": 2010, "category": "Sci-fi"}))]
pub struct Movie {
    #[schema(value_type = u32)]
    pub id: MovieId,
    pub title: String,
    pub year: u32,
    pub category: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct MovieCreate {
    pub title: Option<String>,
    pub year: Option<u32>,
    pub category: Option<String>,
}

impl MovieCreate {
    pub fn new(title: impl Into<String>, year: u32, category: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            year: Some(year),
            category: Some(category.into()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct MovieUpdate {
    #[serde(default, deserialize_with = "crate::validation::present")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "crate::validation::present")]
    pub year: Option<u32>,
    #[serde(default, deserialize_with = "crate::validation::present")]
    pub category: Option<String>,
}
