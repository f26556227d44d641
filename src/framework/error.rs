//! # Framework Errors
//!
//! Common error type shared by every actor and client. Entity errors travel through the
//! framework boxed; [`FrameworkError::downcast`] recovers them on the client side.

use crate::framework::backend::BackendError;

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
    #[error("Storage error: {0}")]
    Storage(#[from] BackendError),
}

impl FrameworkError {
    /// Recovers the typed entity error carried by `EntityError`.
    ///
    /// Returns `Err(self)` unchanged when the error is a framework error or an entity error
    /// of another type.
    pub fn downcast<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(typed) => Ok(*typed),
                Err(inner) => Err(FrameworkError::EntityError(inner)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("bad input: {0}")]
    struct InputError(String);

    #[test]
    fn downcast_recovers_entity_error() {
        let err = FrameworkError::EntityError(Box::new(InputError("name".into())));
        assert_eq!(err.downcast::<InputError>().unwrap(), InputError("name".into()));
    }

    #[test]
    fn downcast_leaves_other_errors_alone() {
        let err = FrameworkError::NotFound("7".into());
        assert!(matches!(
            err.downcast::<InputError>(),
            Err(FrameworkError::NotFound(id)) if id == "7"
        ));

        let err = FrameworkError::EntityError(Box::new(std::io::Error::other("disk")));
        assert!(matches!(
            err.downcast::<InputError>(),
            Err(FrameworkError::EntityError(_))
        ));
    }
}
