//! [`ActorEntity`] implementation for [`Brand`].

use super::BrandError;
use crate::framework::{ActorEntity, UpdateMode};
use crate::model::{Brand, BrandCreate, BrandId, BrandUpdate};
use crate::validation::{merge_text, require_text};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Brand {
    type Id = BrandId;
    type Create = BrandCreate;
    type Update = BrandUpdate;
    type Context = ();
    type Error = BrandError;

    fn id(&self) -> &BrandId {
        &self.id
    }

    /// `brandName` is required; `description` defaults to empty and `active` to true.
    fn from_create_params(id: BrandId, params: BrandCreate) -> Result<Self, BrandError> {
        Ok(Self {
            id,
            brand_name: require_text("brandName", params.brand_name)?,
            description: params.description.unwrap_or_default(),
            active: params.active.unwrap_or(true),
        })
    }

    async fn on_update(
        &mut self,
        update: BrandUpdate,
        mode: UpdateMode,
        _ctx: &(),
    ) -> Result<(), BrandError> {
        if let Some(brand_name) = merge_text("brandName", update.brand_name, mode)? {
            self.brand_name = brand_name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(active) = update.active {
            self.active = active;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldError;

    fn stored() -> Brand {
        Brand::from_create_params(BrandId(1), BrandCreate::named("Acme")).unwrap()
    }

    #[test]
    fn create_applies_defaults() {
        let brand = stored();
        assert_eq!(brand.description, "");
        assert!(brand.active);
    }

    #[test]
    fn create_requires_brand_name() {
        assert_eq!(
            Brand::from_create_params(BrandId(1), BrandCreate::default()),
            Err(BrandError::ValidationError(FieldError::Missing("brandName")))
        );
        assert_eq!(
            Brand::from_create_params(BrandId(1), BrandCreate::named("")),
            Err(BrandError::ValidationError(FieldError::Empty("brandName")))
        );
    }

    #[tokio::test]
    async fn patch_keeps_absent_fields() {
        let mut brand = stored();
        let update = BrandUpdate {
            description: Some("new".into()),
            ..Default::default()
        };
        brand.on_update(update, UpdateMode::Partial, &()).await.unwrap();
        assert_eq!(brand.brand_name, "Acme");
        assert_eq!(brand.description, "new");
        assert_eq!(brand.id, BrandId(1));
    }

    #[tokio::test]
    async fn put_requires_brand_name() {
        let mut brand = stored();
        let update = BrandUpdate {
            description: Some("new".into()),
            ..Default::default()
        };
        assert!(matches!(
            brand.on_update(update, UpdateMode::Full, &()).await,
            Err(BrandError::ValidationError(FieldError::Missing("brandName")))
        ));
    }
}
