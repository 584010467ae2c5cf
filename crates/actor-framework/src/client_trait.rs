//! # ActorClient Trait
//!
//! Provides a common interface for resource‑specific clients, adding default `get`, `list` and
//! `delete` methods built on top of a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard read and delete operations.
///
/// Implementors supply the inner [`ResourceClient`] and a mapping from [`FrameworkError`] into
/// their own error type; `get`, `list` and `delete` come for free.
///
/// ```rust
/// use actor_framework::store::MemoryStore;
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceActor, ResourceClient};
/// use async_trait::async_trait;
/// use serde::{Deserialize, Serialize};
/// use std::sync::Arc;
///
/// #[derive(Clone, Debug, Serialize, Deserialize)]
/// struct Tag { id: u32, label: String }
/// #[derive(Debug)] enum TagAction {}
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct TagError(String);
///
/// #[async_trait]
/// impl ActorEntity for Tag {
///     type Id = u32; type Create = String; type Action = TagAction;
///     type ActionResult = (); type Context = (); type Error = TagError;
///     const COLLECTION: &'static str = "tags";
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create_params(id: u32, label: String) -> Result<Self, TagError> { Ok(Self { id, label }) }
///     async fn handle_action(&mut self, action: TagAction, _: &()) -> Result<(), TagError> { match action {} }
/// }
///
/// struct TagClient { inner: ResourceClient<Tag> }
///
/// #[async_trait]
/// impl ActorClient<Tag> for TagClient {
///     type Error = TagError;
///     fn inner(&self) -> &ResourceClient<Tag> { &self.inner }
///     fn map_error(e: FrameworkError) -> TagError { TagError(e.to_string()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, inner) = ResourceActor::<Tag>::new(8, Arc::new(MemoryStore::default()), || 7);
///     tokio::spawn(actor.run(()));
///     let tags = TagClient { inner };
///     tags.inner().create("urgent".to_string()).await.unwrap();
///
///     // get(), list() and delete() are provided by the trait
///     assert_eq!(tags.list().await.unwrap().len(), 1);
///     assert!(tags.delete(7).await.unwrap());
///     assert!(tags.get(7).await.unwrap().is_none());
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an entity by ID. Unknown IDs are not an error; the result says whether anything
    /// was removed.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<bool, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
