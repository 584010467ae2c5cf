//! # Sale Actor
//!
//! Owns the sales history. The actor itself only stores and lists sale records; taking stock for
//! a sale is orchestrated by [`SaleClient`](crate::clients::SaleClient), which talks to the
//! product actor first and creates the record here afterwards.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Sale`]
//! - [`error`] - [`SaleError`]
//! - [`new()`] - Factory function that creates the actor and its generic client

pub mod entity;
pub mod error;

pub use entity::SaleAction;
pub use error::*;

use crate::model::{Sale, SaleId};
use actor_framework::{DocumentStore, ResourceActor, ResourceClient};
use std::sync::Arc;

/// Creates a new Sale actor and its generic client.
///
/// The client is wrapped by the caller together with a product client, see
/// [`SaleClient::new`](crate::clients::SaleClient::new).
pub fn new(
    buffer_size: usize,
    store: Arc<dyn DocumentStore>,
) -> (ResourceActor<Sale>, ResourceClient<Sale>) {
    ResourceActor::new(buffer_size, store, SaleId::generate)
}
