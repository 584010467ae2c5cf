//! # Actor Framework
//!
//! This crate provides the building blocks for type-safe, concurrent resource services. It
//! implements a **Resource-Oriented Architecture (ROA)** on top of the **Actor Model**: every
//! resource collection (products, sales, …) is owned by one actor, and the actor writes each
//! change through to a pluggable document store.
//!
//! ## Why ROA + Actor Model?
//!
//! ### Resource-Oriented Architecture (ROA)
//!
//! - Uniform lifecycle operations (Create, Get, List, Delete) on well-defined resources
//! - Resource-specific behavior expressed as typed **Actions**
//! - Clean, uniform API surface across all resource types
//!
//! ### Actor Model
//!
//! - Isolated state (no shared memory, no locks)
//! - Message-passing concurrency
//! - Sequential processing within each actor, so a check-and-modify action cannot interleave
//!   with another request for the same collection
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - domain model, validation and actions
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing and write-through persistence
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe communication
//! 4. **Storage Layer** ([`store`]) - [`DocumentStore`] backends selected by URI
//!
//! ## Quick Start
//!
//! ```rust
//! use actor_framework::store::MemoryStore;
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//! use serde::{Deserialize, Serialize};
//! use std::sync::Arc;
//!
//! #[derive(Clone, Debug, Serialize, Deserialize)]
//! struct Counter { id: u32, value: i64 }
//!
//! #[derive(Debug)] enum CounterAction { Add(i64) }
//! #[derive(Debug, thiserror::Error)] #[error("counter would go negative")] struct Negative;
//!
//! #[async_trait]
//! impl ActorEntity for Counter {
//!     type Id = u32;
//!     type Create = i64;
//!     type Action = CounterAction;
//!     type ActionResult = i64;
//!     type Context = ();
//!     type Error = Negative;
//!     const COLLECTION: &'static str = "counters";
//!
//!     fn id(&self) -> &u32 { &self.id }
//!
//!     fn from_create_params(id: u32, value: i64) -> Result<Self, Negative> {
//!         if value < 0 { return Err(Negative); }
//!         Ok(Self { id, value })
//!     }
//!
//!     async fn handle_action(&mut self, action: CounterAction, _: &()) -> Result<i64, Negative> {
//!         match action {
//!             CounterAction::Add(n) if self.value + n < 0 => Err(Negative),
//!             CounterAction::Add(n) => { self.value += n; Ok(self.value) }
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Counter>::new(10, Arc::new(MemoryStore::default()), || 1);
//!     tokio::spawn(actor.run(()));
//!
//!     let counter = client.create(5).await.unwrap();
//!     assert_eq!(client.perform_action(counter.id, CounterAction::Add(-2)).await.unwrap(), 3);
//!
//!     // A rejected action leaves the entity untouched
//!     let err = client.perform_action(counter.id, CounterAction::Add(-9)).await.unwrap_err();
//!     assert!(err.downcast_entity::<Negative>().is_ok());
//!     assert_eq!(client.get(counter.id).await.unwrap().unwrap().value, 3);
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via `run(context)`, not at construction time, so
//! actors can be created in any order and wired afterwards.
//!
//! ## Errors
//!
//! Every client call returns [`FrameworkError`]. Entity errors travel boxed inside
//! [`FrameworkError::EntityError`] and are recovered with
//! [`FrameworkError::downcast_entity`]; storage failures arrive as [`FrameworkError::Storage`].
//!
//! ## Testing
//!
//! The [`mock`] module answers client requests from queued expectations, which keeps tests of
//! orchestration code (e.g. a client that talks to two actors) fast and deterministic.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::{FrameworkError, StoreError};
pub use message::{ResourceRequest, Response};
pub use store::DocumentStore;
