use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::User;
use crate::user_actor::UserError;
use async_trait::async_trait;

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast::<UserError>() {
            Ok(e) => e,
            Err(FrameworkError::NotFound(id)) => UserError::NotFound(id),
            Err(other) => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}
