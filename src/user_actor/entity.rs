//! [`ActorEntity`] implementation for [`User`].

use super::UserError;
use crate::framework::{ActorEntity, Backend, UpdateMode};
use crate::model::{User, UserCreate, UserId, UserUpdate};
use crate::validation::{merge_text, require_text};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Context = ();
    type Error = UserError;

    fn id(&self) -> &UserId {
        &self.id
    }

    /// Only `email` is required. Text fields default to empty, `active` to true.
    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, UserError> {
        Ok(Self {
            id,
            name: params.name.unwrap_or_default(),
            email: require_text("email", params.email)?,
            username: params.username.unwrap_or_default(),
            password: params.password.unwrap_or_default(),
            active: params.active.unwrap_or(true),
        })
    }

    async fn on_update(
        &mut self,
        update: UserUpdate,
        mode: UpdateMode,
        _ctx: &(),
    ) -> Result<(), UserError> {
        if let Some(email) = merge_text("email", update.email, mode)? {
            self.email = email;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(username) = update.username {
            self.username = username;
        }
        if let Some(password) = update.password {
            self.password = password;
        }
        if let Some(active) = update.active {
            self.active = active;
        }
        Ok(())
    }

    /// Emails are unique. The record itself is skipped so an update that keeps its own
    /// email passes.
    fn check_collection(&self, existing: &dyn Backend<Self>) -> Result<(), UserError> {
        let taken =
            existing.exists_where(&|other: &User| other.id != self.id && other.email == self.email);
        if taken {
            return Err(UserError::EmailInUse(self.email.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::MemoryBackend;

    fn user(id: u32, email: &str) -> User {
        User::from_create_params(UserId(id), UserCreate::new("Ann", email)).unwrap()
    }

    #[test]
    fn duplicate_email_is_rejected() {
        let mut backend = MemoryBackend::new();
        backend.insert(user(1, "a@x.com")).unwrap();

        assert_eq!(
            user(2, "a@x.com").check_collection(&backend),
            Err(UserError::EmailInUse("a@x.com".into()))
        );
        assert!(user(2, "b@x.com").check_collection(&backend).is_ok());
        // the stored record does not conflict with itself
        assert!(user(1, "a@x.com").check_collection(&backend).is_ok());
    }

    #[tokio::test]
    async fn put_requires_email() {
        let mut stored = user(1, "a@x.com");
        let update = UserUpdate {
            name: Some("Bea".into()),
            ..Default::default()
        };
        assert!(matches!(
            stored.on_update(update, UpdateMode::Full, &()).await,
            Err(UserError::ValidationError(_))
        ));
        assert_eq!(stored.name, "Ann");
    }
}
