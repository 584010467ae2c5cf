//! Pure data structures (DTOs) implementing the [`ActorEntity`](actor_framework::ActorEntity) trait,
//! plus the small wire types shared by the HTTP API and its client.

pub mod id;
pub mod product;
pub mod sale;

pub use id::InvalidId;
pub use product::*;
pub use sale::*;

use serde::{Deserialize, Serialize};

/// `{ "message": ... }`, the body of confirmations and errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of a successful `POST /sales`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleReceipt {
    pub message: String,
    pub sale: Sale,
}
