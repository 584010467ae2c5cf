//! # Product Actor
//!
//! This module implements the Product resource actor: the product catalog and its stock levels.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`actions`] - [`ProductAction`] and [`ProductActionResult`] for stock management
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Custom Actions
//!
//! ```rust,ignore
//! // Check and decrement atomically (fails on insufficient stock)
//! product_client.reserve_stock(product_id, quantity).await?;
//!
//! // Unconditional relative change
//! product_client.adjust_stock(product_id, -quantity).await?;
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use actor_framework::store::MemoryStore;
//! use inventory::clients::ProductClient;
//! use inventory::model::ProductCreate;
//! use inventory::product_actor;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = product_actor::new(32, Arc::new(MemoryStore::default()));
//!     tokio::spawn(actor.run(()));
//!
//!     let widget = client
//!         .create_product(ProductCreate { name: "Widget".to_string(), price: 9.99, stock: 10 })
//!         .await?;
//!     let widget = client.reserve_stock(widget.id, 3).await?;
//!     assert_eq!(widget.stock, 7);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ProductClient;
use crate::model::{Product, ProductId};
use actor_framework::{DocumentStore, ResourceActor};
use std::sync::Arc;

/// Creates a new Product actor and its client.
pub fn new(
    buffer_size: usize,
    store: Arc<dyn DocumentStore>,
) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, store, ProductId::generate);
    (actor, ProductClient::new(generic_client))
}
