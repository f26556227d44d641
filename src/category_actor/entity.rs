use super::CategoryError;
use crate::framework::{ActorEntity, UpdateMode};
use crate::model::{Category, CategoryCreate, CategoryId, CategoryUpdate};
use crate::validation::{merge_text, require_text};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Category {
    type Id = CategoryId;
    type Create = CategoryCreate;
    type Update = CategoryUpdate;
    type Context = ();
    type Error = CategoryError;

    fn id(&self) -> &CategoryId {
        &self.id
    }

    fn from_create_params(id: CategoryId, params: CategoryCreate) -> Result<Self, CategoryError> {
        Ok(Self {
            id,
            category_name: require_text("categoryName", params.category_name)?,
            description: params.description.unwrap_or_default(),
            active: params.active.unwrap_or(true),
        })
    }

    async fn on_update(
        &mut self,
        update: CategoryUpdate,
        mode: UpdateMode,
        _ctx: &(),
    ) -> Result<(), CategoryError> {
        if let Some(category_name) = merge_text("categoryName", update.category_name, mode)? {
            self.category_name = category_name;
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
