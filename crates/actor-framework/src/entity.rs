//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every persisted resource (Product, Sale, …)
//! must implement to be managed by the generic `ResourceActor`. It specifies associated types for
//! IDs, creation payloads, actions, context and errors, names the document-store collection the
//! resource lives in, and provides lifecycle hooks (`on_create`, `on_delete`, `handle_action`).
//!
//! # Architecture Note
//! By defining a contract that all resource types must satisfy, the `ResourceActor` logic is
//! written *once*. Associated types keep the payloads apart: a `Product` actor only accepts a
//! `ProductCreate`, and the compiler rejects a `SaleCreate` sent to it.
//!
//! # Persistence
//! Entities are `Serialize + DeserializeOwned` because the actor writes every mutation through to
//! a [`DocumentStore`](crate::store::DocumentStore) and rebuilds its working set from it on start.
//!
//! # Provided Methods (Hooks)
//! [`ActorEntity::on_create`] and [`ActorEntity::on_delete`] default to `Ok(())`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks. It also defines a
/// `Context` type, which is injected into every hook when the actor is started ("late binding" of
/// dependencies through `run()` instead of `new()`).
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// The unique identifier for this entity. Its `Display` form is the document key.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `ReserveStock`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// # Design Note: Error Granularity
    ///
    /// The framework uses one error enum per actor rather than one per message. `ProductError`
    /// is the union of everything a product operation can report; clients match on it.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Name of the document-store collection holding this resource.
    const COLLECTION: &'static str;

    /// The identifier of this instance.
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and Payload.
    /// Input validation belongs here; it runs synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is persisted.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called immediately before the entity is removed from the system.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    ///
    /// The actor runs this on a copy of the entity and only commits the copy once it has been
    /// persisted, so an `Err` (or a failed write) leaves the stored entity untouched.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
