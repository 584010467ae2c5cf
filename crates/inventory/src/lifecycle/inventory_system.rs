use crate::clients::{ProductClient, SaleClient};
use crate::config::SaleMode;
use crate::{product_actor, sale_actor};
use actor_framework::store::{self, UnavailableStore};
use actor_framework::{DocumentStore, StoreError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

/// Errors raised while shutting the system down.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Actor task failed: {0}")]
    ActorTask(String),
    #[error("Closing the document store failed: {0}")]
    Store(#[from] StoreError),
}

/// The runtime orchestrator of the inventory service.
///
/// `InventorySystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the product and sale actors
/// - **Dependency Wiring**: Handing the product client to the sale client
/// - **Resource Coordination**: Owning the document store shared by both actors
pub struct InventorySystem {
    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    /// Client for interacting with the Sale actor
    pub sale_client: SaleClient,

    store: Arc<dyn DocumentStore>,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl InventorySystem {
    /// Opens the store named by `uri`, falling back to an unavailable store on failure.
    pub async fn connect_store(uri: &str) -> Arc<dyn DocumentStore> {
        match store::connect(uri).await {
            Ok(store) => {
                info!(uri, backend = store.backend_tag(), "Document store connected");
                store
            }
            Err(e) => {
                error!(uri, error = %e, "Error connecting document store");
                Arc::new(UnavailableStore::new(e.to_string()))
            }
        }
    }

    /// Spawns both actors on `store`. Must be called inside a Tokio runtime.
    pub fn start(store: Arc<dyn DocumentStore>, sale_mode: SaleMode, actor_buffer: usize) -> Self {
        // Buffer size bounds each actor's queue of pending requests
        let (product_actor, product_client) = product_actor::new(actor_buffer, store.clone());
        let product_handle = tokio::spawn(product_actor.run(()));

        let (sale_actor, sale_resource_client) = sale_actor::new(actor_buffer, store.clone());
        let sale_client = SaleClient::new(sale_resource_client, product_client.clone(), sale_mode);
        let sale_handle = tokio::spawn(sale_actor.run(()));

        info!(
            backend = store.backend_tag(),
            available = store.is_available(),
            %sale_mode,
            "Inventory system started"
        );

        Self {
            product_client,
            sale_client,
            store,
            handles: vec![product_handle, sale_handle],
        }
    }

    /// Short name of the store backend (`memory`, `json-file`, `unavailable`).
    pub fn store_backend(&self) -> &'static str {
        self.store.backend_tag()
    }

    pub fn store_available(&self) -> bool {
        self.store.is_available()
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Returns an error if an actor task panicked or the store failed to close.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        // Dropping the senders ends each actor's receive loop
        drop(self.sale_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::ActorTask(e.to_string()));
            }
        }

        self.store.close().await?;
        info!("System shutdown complete.");
        Ok(())
    }
}
