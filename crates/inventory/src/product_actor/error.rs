//! Error types for the Product actor.

use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The requested quantity exceeds the available stock.
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: i64, available: i64 },

    /// The provided quantity is invalid (zero or negative).
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// The creation payload was rejected.
    #[error("Invalid product: {0}")]
    Validation(String),

    /// The document store failed or is unreachable.
    #[error("Product storage error: {0}")]
    Storage(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ProductError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<ProductError>() {
            Ok(domain) => domain,
            Err(FrameworkError::NotFound(id)) => ProductError::NotFound(id),
            Err(FrameworkError::Storage(e)) => ProductError::Storage(e.to_string()),
            Err(other) => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}
