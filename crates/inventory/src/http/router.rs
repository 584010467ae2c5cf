use super::handlers;
use super::middleware::{cors_middleware, log_requests};
use crate::clients::{ProductClient, SaleClient};
use crate::lifecycle::InventorySystem;
use axum::middleware::from_fn;
use axum::routing::{delete, get};
use axum::Router;

/// Everything a handler needs. Cheap to clone: each field is a channel sender or a static str.
#[derive(Clone)]
pub struct AppState {
    pub products: ProductClient,
    pub sales: SaleClient,
    pub store_backend: &'static str,
}

impl AppState {
    pub fn new(system: &InventorySystem) -> Self {
        Self {
            products: system.product_client.clone(),
            sales: system.sale_client.clone(),
            store_backend: system.store_backend(),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route("/products/{id}", delete(handlers::delete_product))
        .route(
            "/sales",
            get(handlers::list_sales).post(handlers::record_sale),
        )
        .route("/sales/{id}", delete(handlers::delete_sale))
        .route("/healthz", get(handlers::healthz))
        .layer(from_fn(cors_middleware))
        .layer(from_fn(log_requests))
        .with_state(state)
}
