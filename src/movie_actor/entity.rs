//! [`ActorEntity`] implementation for [`Movie`].

use super::MovieError;
use crate::framework::{ActorEntity, UpdateMode};
use crate::model::{Movie, MovieCreate, MovieId, MovieUpdate};
use crate::validation::{check_count, merge_required, merge_text, require, require_text};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Movie {
    type Id = MovieId;
    type Create = MovieCreate;
    type Update = MovieUpdate;
    type Context = ();
    type Error = MovieError;

    fn id(&self) -> &MovieId {
        &self.id
    }

    /// All three fields are required.
    fn from_create_params(id: MovieId, params: MovieCreate) -> Result<Self, MovieError> {
        Ok(Self {
            id,
            title: require_text("title", params.title)?,
            year: check_count("year", require("year", params.year)?)?,
            category: require_text("category", params.category)?,
        })
    }

    async fn on_update(
        &mut self,
        update: MovieUpdate,
        mode: UpdateMode,
        _ctx: &(),
    ) -> Result<(), MovieError> {
        let title = merge_text("title", update.title, mode)?;
        let year = merge_required("year", update.year, mode)?
            .map(|year| check_count("year", year))
            .transpose()?;
        let category = merge_text("category", update.category, mode)?;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(year) = year {
            self.year = year;
        }
        if let Some(category) = category {
            self.category = category;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldError;

    #[test]
    fn year_zero_is_rejected() {
        assert_eq!(
            Movie::from_create_params(MovieId(1), MovieCreate::new("Heat", 0, "Crime")),
            Err(MovieError::ValidationError(FieldError::InvalidNumber("year")))
        );
    }

    #[tokio::test]
    async fn patch_checks_year_and_keeps_the_rest() {
        let mut heat =
            Movie::from_create_params(MovieId(1), MovieCreate::new("Heat", 1995, "Crime")).unwrap();

        let zero = MovieUpdate {
            year: Some(0),
            ..Default::default()
        };
        assert!(heat.on_update(zero, UpdateMode::Partial, &()).await.is_err());
        assert_eq!(heat.year, 1995);

        let later = MovieUpdate {
            year: Some(1996),
            ..Default::default()
        };
        heat.on_update(later, UpdateMode::Partial, &()).await.unwrap();
        assert_eq!((heat.title.as_str(), heat.year), ("Heat", 1996));
    }
}
