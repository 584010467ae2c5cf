//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns the working set of one
//! resource collection. It implements the "Server" side of the Actor Model: requests are
//! processed sequentially, and every mutation is written through to the document store before
//! it becomes visible.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::{FrameworkError, StoreError};
use crate::message::{ResourceRequest, Response};
use crate::store::{Collection, DocumentStore};
use indexmap::IndexMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the working set (`items`), the
/// receiver end of the channel and the [`Collection`] it persists to.
///
/// **Concurrency Model**:
/// The actor processes its own messages *sequentially* in a loop, so `items` needs no `Mutex`.
/// Two requests against the same entity can never interleave inside one actor; that is what
/// makes a check-and-modify [`ActorEntity::Action`] atomic.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` with a store and an ID generator to get the
///     `actor` (server) and `client` (interface).
/// 2.  **Wire & Run**: Spawn `actor.run(context)` in a background task.
/// 3.  **Use**: Clone the client wherever requests originate.
///
/// ```rust
/// use actor_framework::store::MemoryStore;
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
/// use serde::{Deserialize, Serialize};
/// use std::sync::Arc;
///
/// #[derive(Clone, Debug, Serialize, Deserialize)]
/// struct Note { id: u32, text: String }
/// #[derive(Debug)] enum NoteAction {}
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// #[async_trait]
/// impl ActorEntity for Note {
///     type Id = u32;
///     type Create = String;
///     type Action = NoteAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = NoteError;
///     const COLLECTION: &'static str = "notes";
///
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create_params(id: u32, text: String) -> Result<Self, NoteError> {
///         Ok(Self { id, text })
///     }
///     async fn handle_action(&mut self, action: NoteAction, _: &()) -> Result<(), NoteError> {
///         match action {}
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let mut next = 0;
///     let ids = move || { next += 1; next };
///     let (actor, client) = ResourceActor::<Note>::new(10, Arc::new(MemoryStore::default()), ids);
///     tokio::spawn(actor.run(()));
///
///     let note = client.create("hello".to_string()).await.unwrap();
///     assert_eq!(client.list().await.unwrap()[0].text, "hello");
///     assert!(client.delete(note.id).await.unwrap());
/// }
/// ```
///
/// # Operations
///
/// * **Create**: generate an ID, `from_create_params`, `on_create`, persist, insert, reply with
///   the new entity.
/// * **Get / List**: answered from the working set; `List` keeps insertion order.
/// * **Delete**: unknown IDs reply `Ok(false)`. Known IDs run `on_delete`, are removed from the
///   store, then from the working set.
/// * **Action**: `handle_action` runs on a copy; the copy is persisted and then committed.
///
/// If hydrating from the store fails the actor keeps running but answers every request with
/// [`FrameworkError::Storage`].
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    items: IndexMap<T::Id, T>,
    collection: Collection<T>,
    next_id: Box<dyn FnMut() -> T::Id + Send>,
    unavailable: Option<StoreError>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `store` - The document store this actor persists to.
    /// * `next_id` - Generates the ID of every created entity.
    pub fn new(
        buffer_size: usize,
        store: Arc<dyn DocumentStore>,
        next_id: impl FnMut() -> T::Id + Send + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            items: IndexMap::new(),
            collection: Collection::new(store),
            next_id: Box::new(next_id),
            unavailable: None,
        };
        (actor, ResourceClient::new(sender))
    }

    async fn hydrate(&mut self, entity_type: &str) {
        match self.collection.load().await {
            Ok(items) => {
                self.items = items
                    .into_iter()
                    .map(|item| (item.id().clone(), item))
                    .collect();
                info!(
                    entity_type,
                    collection = self.collection.name(),
                    size = self.items.len(),
                    "Hydrated"
                );
            }
            Err(e) => {
                error!(entity_type, collection = self.collection.name(), error = %e, "Hydration failed");
                self.unavailable = Some(e);
            }
        }
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Product" instead of "inventory::model::product::Product")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");
        self.hydrate(entity_type).await;

        while let Some(msg) = self.receiver.recv().await {
            if let Some(e) = &self.unavailable {
                reject(msg, e.clone());
                continue;
            }
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = (self.next_id)();
                    let result = self.create(id, params, &context).await;
                    match &result {
                        Ok(item) => {
                            info!(entity_type, id = %item.id(), size = self.items.len(), "Created")
                        }
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.items.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.items.len(), "List");
                    let _ = respond_to.send(Ok(self.items.values().cloned().collect()));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(&id, &context).await;
                    match &result {
                        Ok(true) => info!(entity_type, %id, size = self.items.len(), "Deleted"),
                        Ok(false) => debug!(entity_type, %id, "Delete of unknown id ignored"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let result = self.act(&id, action, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.items.len(), "Shutdown");
    }

    async fn create(
        &mut self,
        id: T::Id,
        params: T::Create,
        context: &T::Context,
    ) -> Result<T, FrameworkError> {
        let mut item = T::from_create_params(id, params).map_err(entity_error)?;
        item.on_create(context).await.map_err(entity_error)?;
        self.collection.save(&item).await?;
        self.items.insert(item.id().clone(), item.clone());
        Ok(item)
    }

    async fn delete(&mut self, id: &T::Id, context: &T::Context) -> Result<bool, FrameworkError> {
        let Some(item) = self.items.get(id) else {
            return Ok(false);
        };
        item.on_delete(context).await.map_err(entity_error)?;
        self.collection.remove(id).await?;
        self.items.shift_remove(id);
        Ok(true)
    }

    async fn act(
        &mut self,
        id: &T::Id,
        action: T::Action,
        context: &T::Context,
    ) -> Result<T::ActionResult, FrameworkError> {
        let Some(current) = self.items.get(id) else {
            return Err(FrameworkError::NotFound(id.to_string()));
        };
        let mut draft = current.clone();
        let result = draft
            .handle_action(action, context)
            .await
            .map_err(entity_error)?;
        self.collection.save(&draft).await?;
        self.items.insert(id.clone(), draft);
        Ok(result)
    }
}

fn entity_error<E: std::error::Error + Send + Sync + 'static>(e: E) -> FrameworkError {
    FrameworkError::EntityError(Box::new(e))
}

fn reject<T: ActorEntity>(msg: ResourceRequest<T>, e: StoreError) {
    fn fail<R>(respond_to: Response<R>, e: StoreError) {
        let _ = respond_to.send(Err(FrameworkError::Storage(e)));
    }
    match msg {
        ResourceRequest::Create { respond_to, .. } => fail(respond_to, e),
        ResourceRequest::Get { respond_to, .. } => fail(respond_to, e),
        ResourceRequest::List { respond_to } => fail(respond_to, e),
        ResourceRequest::Delete { respond_to, .. } => fail(respond_to, e),
        ResourceRequest::Action { respond_to, .. } => fail(respond_to, e),
    }
}
