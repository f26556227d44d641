use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::Movie;
use crate::movie_actor::MovieError;
use async_trait::async_trait;

/// Client for interacting with the Movie actor.
#[derive(Clone)]
pub struct MovieClient {
    inner: ResourceClient<Movie>,
}

impl MovieClient {
    pub fn new(inner: ResourceClient<Movie>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Movie> for MovieClient {
    type Error = MovieError;

    fn inner(&self) -> &ResourceClient<Movie> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast::<MovieError>() {
            Ok(e) => e,
            Err(FrameworkError::NotFound(id)) => MovieError::NotFound(id),
            Err(other) => MovieError::ActorCommunicationError(other.to_string()),
        }
    }
}
