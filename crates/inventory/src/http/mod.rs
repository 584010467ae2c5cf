//! # HTTP API
//!
//! JSON endpoints over the product and sale clients:
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | `/products` | [`handlers::list_products`] |
//! | POST | `/products` | [`handlers::create_product`] |
//! | DELETE | `/products/{id}` | [`handlers::delete_product`] |
//! | GET | `/sales` | [`handlers::list_sales`] |
//! | POST | `/sales` | [`handlers::record_sale`] |
//! | DELETE | `/sales/{id}` | [`handlers::delete_sale`] |
//! | GET | `/healthz` | [`handlers::healthz`] |
//!
//! Successful writes answer 200. Failures carry `{ "message": ... }` with the status chosen by
//! [`ApiError`].

pub mod error;
pub mod handlers;
pub mod middleware;
mod router;

pub use error::ApiError;
pub use router::{build_router, AppState};

use std::future::Future;
use tokio::net::TcpListener;
use tracing::info;

/// Serves the API on `listener` until `shutdown` resolves, then drains open connections.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "Listening");
    }
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
