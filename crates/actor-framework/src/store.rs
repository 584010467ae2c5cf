//! # Document Stores
//!
//! Persistence backends for resource actors. A store holds named collections of JSON documents,
//! each keyed by the `Display` form of an entity ID, and keeps them in insertion order so that
//! listing a collection is stable across restarts.
//!
//! | URI | Backend |
//! |-----|---------|
//! | `memory://` | [`MemoryStore`], process-local, lost on exit |
//! | `file://<dir>` | [`JsonFileStore`], one `<collection>.json` file per collection |
//!
//! [`connect`] resolves a URI into a shared store handle. Callers that cannot connect are expected
//! to keep running on an [`UnavailableStore`], which fails every operation with the original
//! reason.

use crate::entity::ActorEntity;
use crate::error::StoreError;
use async_trait::async_trait;
use indexmap::IndexMap;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

type Documents = IndexMap<String, Value>;

/// A persistence backend holding JSON documents grouped into collections.
#[async_trait]
pub trait DocumentStore: Send + Sync + 'static {
    /// Short name of the backend, reported by health checks.
    fn backend_tag(&self) -> &'static str;

    /// Whether the backend can serve requests at all.
    fn is_available(&self) -> bool {
        true
    }

    /// Every document of `collection`, in insertion order.
    async fn load(&self, collection: &str) -> Result<Vec<Value>, StoreError>;

    /// Inserts or replaces the document stored under `key`.
    async fn upsert(&self, collection: &str, key: &str, document: Value) -> Result<(), StoreError>;

    /// Removes the document stored under `key`; unknown keys are ignored.
    async fn remove(&self, collection: &str, key: &str) -> Result<(), StoreError>;

    /// Releases the backend at shutdown.
    async fn close(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Opens the store named by `uri`.
pub async fn connect(uri: &str) -> Result<Arc<dyn DocumentStore>, StoreError> {
    if uri == "memory://" {
        return Ok(Arc::new(MemoryStore::default()));
    }
    if let Some(path) = uri.strip_prefix("file://") {
        if path.is_empty() {
            return Err(StoreError::UnsupportedUri(uri.to_string()));
        }
        let store = JsonFileStore::open(path).await?;
        return Ok(Arc::new(store));
    }
    Err(StoreError::UnsupportedUri(uri.to_string()))
}

// =============================================================================
// COLLECTION HANDLE
// =============================================================================

/// A store bound to the collection of one entity type.
///
/// This is the handle a `ResourceActor` writes through; it owns the (de)serialization of `T`.
pub struct Collection<T: ActorEntity> {
    store: Arc<dyn DocumentStore>,
    _marker: std::marker::PhantomData<fn() -> T>,
}

impl<T: ActorEntity> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T: ActorEntity> Collection<T> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _marker: std::marker::PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        T::COLLECTION
    }

    pub async fn load(&self) -> Result<Vec<T>, StoreError> {
        self.store
            .load(T::COLLECTION)
            .await?
            .into_iter()
            .map(|document| {
                serde_json::from_value(document).map_err(|e| StoreError::Malformed {
                    collection: T::COLLECTION.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect()
    }

    pub async fn save(&self, item: &T) -> Result<(), StoreError> {
        let document = serde_json::to_value(item).map_err(|e| StoreError::Malformed {
            collection: T::COLLECTION.to_string(),
            reason: e.to_string(),
        })?;
        self.store
            .upsert(T::COLLECTION, &item.id().to_string(), document)
            .await
    }

    pub async fn remove(&self, id: &T::Id) -> Result<(), StoreError> {
        self.store.remove(T::COLLECTION, &id.to_string()).await
    }
}

// =============================================================================
// MEMORY
// =============================================================================

/// Process-local store. Used by tests and by `memory://`.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Documents>>,
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn backend_tag(&self) -> &'static str {
        "memory"
    }

    async fn load(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        let collections = self.collections.lock().await;
        Ok(collections
            .get(collection)
            .map(|docs| docs.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn upsert(&self, collection: &str, key: &str, document: Value) -> Result<(), StoreError> {
        let mut collections = self.collections.lock().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(key.to_string(), document);
        Ok(())
    }

    async fn remove(&self, collection: &str, key: &str) -> Result<(), StoreError> {
        let mut collections = self.collections.lock().await;
        if let Some(docs) = collections.get_mut(collection) {
            docs.shift_remove(key);
        }
        Ok(())
    }
}

// =============================================================================
// JSON FILES
// =============================================================================

/// Directory-backed store: `<root>/<collection>.json` holds a JSON object mapping keys to
/// documents, in insertion order.
///
/// Collections are cached after their first load and the whole file is rewritten on every
/// mutation (write to a temporary sibling, then rename).
pub struct JsonFileStore {
    root: PathBuf,
    collections: Mutex<HashMap<String, Documents>>,
}

impl JsonFileStore {
    pub async fn open(root: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = root.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&root)
            .await
            .map_err(|e| StoreError::Unavailable(format!("{}: {e}", root.display())))?;
        info!(root = %root.display(), "Opened JSON file store");
        Ok(Self {
            root,
            collections: Mutex::new(HashMap::new()),
        })
    }

    fn path_for(&self, collection: &str) -> PathBuf {
        self.root.join(format!("{collection}.json"))
    }

    async fn read_collection(&self, collection: &str) -> Result<Documents, StoreError> {
        let path = self.path_for(collection);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Documents::new()),
            Err(e) => return Err(StoreError::Io(format!("{}: {e}", path.display()))),
        };
        let keyed: Documents =
            serde_json::from_slice(&bytes).map_err(|e| StoreError::Malformed {
                collection: collection.to_string(),
                reason: e.to_string(),
            })?;
        debug!(collection, count = keyed.len(), "Read collection file");
        Ok(keyed)
    }

    async fn write_collection(&self, collection: &str, docs: &Documents) -> Result<(), StoreError> {
        let path = self.path_for(collection);
        let tmp = self.root.join(format!(".{collection}.json.tmp"));
        let body = serde_json::to_vec_pretty(docs).map_err(|e| StoreError::Io(e.to_string()))?;
        tokio::fs::write(&tmp, body)
            .await
            .map_err(|e| StoreError::Io(format!("{}: {e}", tmp.display())))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| StoreError::Io(format!("{}: {e}", path.display())))
    }

    /// Runs `mutate` against the cached collection and persists the result.
    /// The cache only changes once the file write succeeded.
    async fn mutate(
        &self,
        collection: &str,
        mutate: impl FnOnce(&mut Documents),
    ) -> Result<(), StoreError> {
        let mut collections = self.collections.lock().await;
        let mut docs = match collections.get(collection) {
            Some(docs) => docs.clone(),
            None => self.read_collection(collection).await?,
        };
        mutate(&mut docs);
        self.write_collection(collection, &docs).await?;
        collections.insert(collection.to_string(), docs);
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    fn backend_tag(&self) -> &'static str {
        "json-file"
    }

    async fn load(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        let mut collections = self.collections.lock().await;
        if let Some(docs) = collections.get(collection) {
            return Ok(docs.values().cloned().collect());
        }
        let docs = self.read_collection(collection).await?;
        let values = docs.values().cloned().collect();
        collections.insert(collection.to_string(), docs);
        Ok(values)
    }

    async fn upsert(&self, collection: &str, key: &str, document: Value) -> Result<(), StoreError> {
        self.mutate(collection, |docs| {
            docs.insert(key.to_string(), document);
        })
        .await
    }

    async fn remove(&self, collection: &str, key: &str) -> Result<(), StoreError> {
        self.mutate(collection, |docs| {
            docs.shift_remove(key);
        })
        .await
    }

    async fn close(&self) -> Result<(), StoreError> {
        info!(root = %self.root.display(), "Closed JSON file store");
        Ok(())
    }
}

// =============================================================================
// UNAVAILABLE
// =============================================================================

/// Stand-in for a store that could not be reached at start-up.
pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn error(&self) -> StoreError {
        StoreError::Unavailable(self.reason.clone())
    }
}

#[async_trait]
impl DocumentStore for UnavailableStore {
    fn backend_tag(&self) -> &'static str {
        "unavailable"
    }

    fn is_available(&self) -> bool {
        false
    }

    async fn load(&self, _collection: &str) -> Result<Vec<Value>, StoreError> {
        Err(self.error())
    }

    async fn upsert(&self, _collection: &str, _key: &str, _doc: Value) -> Result<(), StoreError> {
        Err(self.error())
    }

    async fn remove(&self, _collection: &str, _key: &str) -> Result<(), StoreError> {
        Err(self.error())
    }
}
