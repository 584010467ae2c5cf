//! # Inventory
//!
//! Products, their stock, and the sales that consume it, served over HTTP/JSON.
//!
//! - **[model]**: [`Product`](model::Product) and [`Sale`](model::Sale), the two persisted
//!   resources, plus wire types.
//! - **[product_actor]** / **[sale_actor]**: the [`ActorEntity`](actor_framework::ActorEntity)
//!   implementations and their errors.
//! - **[clients]**: type-safe wrappers; [`SaleClient`](clients::SaleClient) orchestrates
//!   recording a sale.
//! - **[lifecycle]**: [`InventorySystem`](lifecycle::InventorySystem) starts and stops the actors
//!   and owns the document store.
//! - **[http]**: the axum router.
//! - **[api]**: the HTTP client and terminal rendering used by `inventory-cli`.
//! - **[config]**: command-line and environment configuration of the server.

pub mod api;
pub mod clients;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod sale_actor;
