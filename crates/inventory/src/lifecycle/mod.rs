//! # System Lifecycle & Orchestration
//!
//! This module manages the runtime lifecycle of the inventory service: connecting the document
//! store, starting and wiring the actors, and shutting everything down in order.
//!
//! ## The InventorySystem Pattern
//!
//! ```rust,ignore
//! let store = InventorySystem::connect_store(&config.store_uri).await;
//! let system = InventorySystem::start(store, config.sale_mode, config.actor_buffer);
//!
//! let widget = system.product_client.create_product(params).await?;
//! system.sale_client.record_sale(widget.id, 3).await?;
//!
//! system.shutdown().await?;
//! ```
//!
//! ## Dependency Injection
//!
//! The store is created once and handed to both actors at construction. The sale client is
//! built around a clone of the product client, which is what lets it take stock before it
//! writes a sale. Neither actor depends on the other, so both run with a `()` context.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - wait for both actor tasks
//! 4. **Close the store** - flushes and releases the backend
//!
//! Clones held elsewhere (e.g. by the HTTP router) keep the actors alive, so they must be
//! dropped before `shutdown` can finish.
//!
//! ## Store failures at start-up
//!
//! [`InventorySystem::connect_store`] never fails. When the store cannot be opened the error is
//! logged and an [`UnavailableStore`](actor_framework::store::UnavailableStore) takes its place:
//! the service keeps running and every store-backed request fails.

pub mod inventory_system;

pub use inventory_system::*;
