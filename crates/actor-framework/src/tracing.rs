//! # Observability & Tracing
//!
//! Structured logging for every process built on the framework.
//!
//! ## Configuration
//!
//! Log lines use the compact format without the crate/module prefix (`with_target(false)`);
//! actors identify themselves through the `entity_type` field instead. Verbosity comes from
//! `RUST_LOG` and falls back to `info` when it is unset or unparseable.
//!
//! ```bash
//! # Default
//! inventory-server
//!
//! # Full payloads of every request reaching an actor
//! RUST_LOG=debug inventory-server
//!
//! # Only the HTTP layer
//! RUST_LOG=inventory::http=debug inventory-server
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup, hydration from the store, shutdown with final size
//! - **Entity Operations**: Create, Get, List, Delete and custom Actions
//! - **Errors**: failed writes and rejected actions with the entity ID and reason
//!
//! A sale recorded with `RUST_LOG=debug` looks like:
//!
//! ```text
//! DEBUG record_sale: Sending request quantity=3
//! DEBUG Action entity_type="Product" id=4f0c... action=ReserveStock(3)
//!  INFO Action ok entity_type="Product" id=4f0c...
//!  INFO Created entity_type="Sale" id=9a1b... size=1
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// Calling it again (e.g. from several tests in one binary) is a no-op.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type identifies the actor
        .compact()
        .try_init();
}
