//! Pure data structures (records and DTOs) implementing the
//! [`ActorEntity`](crate::framework::ActorEntity) trait.
//!
//! Catalog ids (`BrandId`, `CategoryId`, `ProductId`, `UserId`) travel as JSON strings
//! (`"1"`) and accept either a string or a number on input, so `"categoryId": 3` and
//! `"categoryId": "3"` name the same category. Movie ids stay plain numbers.

pub mod brand;
pub mod category;
pub mod movie;
pub mod product;
pub mod user;

pub use brand::*;
pub use category::*;
pub use movie::*;
pub use product::*;
pub use user::*;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u32),
    Text(String),
}

/// Declares a type-safe catalog identifier backed by a sequential `u32`.
macro_rules! catalog_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                match RawId::deserialize(deserializer)? {
                    RawId::Number(n) => Ok(Self(n)),
                    RawId::Text(s) => s.parse().map_err(|_| {
                        serde::de::Error::custom(format!(
                            "invalid {}: '{}'",
                            stringify!($name),
                            s
                        ))
                    }),
                }
            }
        }
    };
}

catalog_id!(
    /// Type-safe identifier for Brands.
    BrandId
);
catalog_id!(
    /// Type-safe identifier for Categories.
    CategoryId
);
catalog_id!(
    /// Type-safe identifier for Products.
    ProductId
);
catalog_id!(
    /// Type-safe identifier for Users.
    UserId
);
