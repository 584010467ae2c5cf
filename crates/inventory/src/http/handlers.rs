use super::error::ApiError;
use super::router::AppState;
use crate::clients::ActorClient;
use crate::model::{Message, Product, ProductCreate, ProductId, SaleId, SaleReceipt, SaleRecord};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

/// Body of `POST /sales`.
#[derive(Debug, Deserialize)]
pub struct RecordSaleBody {
    #[serde(rename = "productId")]
    pub product_id: String,
    pub quantity: i64,
}

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(state.products.list().await?))
}

pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductCreate>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let Json(params) = payload?;
    Ok(Json(state.products.create_product(params).await?))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Message>, ApiError> {
    let id: ProductId = id.parse()?;
    state.products.delete(id).await?;
    Ok(Json(Message::new("Product deleted")))
}

pub async fn list_sales(State(state): State<AppState>) -> Result<Json<Vec<SaleRecord>>, ApiError> {
    Ok(Json(state.sales.list_sales().await?))
}

pub async fn record_sale(
    State(state): State<AppState>,
    payload: Result<Json<RecordSaleBody>, JsonRejection>,
) -> Result<Json<SaleReceipt>, ApiError> {
    let Json(body) = payload?;
    let product_id: ProductId = body.product_id.parse()?;
    let sale = state.sales.record_sale(product_id, body.quantity).await?;
    Ok(Json(SaleReceipt {
        message: "Sale recorded".to_string(),
        sale,
    }))
}

pub async fn delete_sale(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Message>, ApiError> {
    let id: SaleId = id.parse()?;
    state.sales.delete(id).await?;
    Ok(Json(Message::new("Sale deleted")))
}

/// Probes the store through the product actor.
pub async fn healthz(State(state): State<AppState>) -> Response {
    let (status, label) = match state.products.list().await {
        Ok(_) => (StatusCode::OK, "ok"),
        Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "unavailable"),
    };
    (
        status,
        Json(json!({ "status": label, "store": state.store_backend })),
    )
        .into_response()
}
