//! Error types for sale operations.

use crate::product_actor::ProductError;
use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur while recording, listing or deleting sales.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SaleError {
    /// The product being sold does not exist.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The sale asks for more than is in stock.
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: i64, available: i64 },

    /// The quantity is zero or negative.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// The document store failed or is unreachable.
    #[error("Sale storage error: {0}")]
    Storage(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for SaleError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<SaleError>() {
            Ok(domain) => domain,
            Err(FrameworkError::Storage(e)) => SaleError::Storage(e.to_string()),
            Err(other) => SaleError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<ProductError> for SaleError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::NotFound(id) => SaleError::ProductNotFound(id),
            ProductError::InsufficientStock {
                requested,
                available,
            } => SaleError::InsufficientStock {
                requested,
                available,
            },
            ProductError::InvalidQuantity(q) => SaleError::InvalidQuantity(q),
            ProductError::Storage(reason) => SaleError::Storage(reason),
            other => SaleError::ActorCommunicationError(other.to_string()),
        }
    }
}
