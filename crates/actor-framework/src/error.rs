//! # Framework Errors
//!
//! This module defines the common error types used throughout the actor framework.
//! Entity-specific failures travel boxed inside [`FrameworkError::EntityError`] and are
//! recovered by the domain clients with [`FrameworkError::downcast_entity`].

/// Errors raised by a [`DocumentStore`](crate::store::DocumentStore) backend.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("Document store unavailable: {0}")]
    Unavailable(String),
    #[error("Unsupported store URI: {0}")]
    UnsupportedUri(String),
    #[error("Document store I/O error: {0}")]
    Io(String),
    #[error("Malformed document in {collection}: {reason}")]
    Malformed { collection: String, reason: String },
}

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
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl FrameworkError {
    /// Recovers a typed entity error, handing the original error back when it is
    /// not an `EntityError` of type `E`.
    pub fn downcast_entity<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(typed) => Ok(*typed),
                Err(other) => Err(FrameworkError::EntityError(other)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("out of widgets")]
    struct OutOfWidgets;

    #[test]
    fn downcast_recovers_typed_entity_error() {
        let err = FrameworkError::EntityError(Box::new(OutOfWidgets));
        assert_eq!(err.downcast_entity::<OutOfWidgets>().unwrap(), OutOfWidgets);
    }

    #[test]
    fn downcast_keeps_other_errors() {
        let err = FrameworkError::EntityError(Box::new(std::io::Error::other("disk")));
        let back = err.downcast_entity::<OutOfWidgets>().unwrap_err();
        assert!(back.to_string().contains("disk"));

        let closed = FrameworkError::ActorClosed.downcast_entity::<OutOfWidgets>();
        assert!(matches!(closed, Err(FrameworkError::ActorClosed)));
    }
}
