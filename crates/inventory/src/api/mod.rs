//! # API Client
//!
//! [`InventoryApi`] is the client side of the HTTP API, used by `inventory-cli`. Like the web
//! page it replaces, it never caches: every view is rebuilt from a fresh [`Snapshot`].

pub mod render;

use crate::model::{Message, Product, ProductCreate, SaleReceipt, SaleRecord};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ApiClientError {
    /// The server answered with an error status; `message` is its `{message}` body.
    #[error("{message} ({status})")]
    Server { status: StatusCode, message: String },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiClientError {
    /// The server's own message for 4xx answers, e.g. "Not enough stock".
    pub fn client_message(&self) -> Option<&str> {
        match self {
            ApiClientError::Server { status, message } if status.is_client_error() => {
                Some(message.as_str())
            }
            _ => None,
        }
    }
}

/// Both lists, fetched together.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub products: Vec<Product>,
    pub sales: Vec<SaleRecord>,
}

#[derive(Debug, Clone)]
pub struct InventoryApi {
    base_url: String,
    client: reqwest::Client,
}

impl InventoryApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiClientError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read<T: DeserializeOwned>(resp: Response) -> Result<T, ApiClientError> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<Message>(&body)
                .map(|m| m.message)
                .unwrap_or(body);
            return Err(ApiClientError::Server { status, message });
        }
        Ok(resp.json().await?)
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, ApiClientError> {
        debug!("GET /products");
        let resp = self.client.get(self.url("/products")).send().await?;
        Self::read(resp).await
    }

    pub async fn list_sales(&self) -> Result<Vec<SaleRecord>, ApiClientError> {
        debug!("GET /sales");
        let resp = self.client.get(self.url("/sales")).send().await?;
        Self::read(resp).await
    }

    pub async fn snapshot(&self) -> Result<Snapshot, ApiClientError> {
        let (products, sales) = tokio::try_join!(self.list_products(), self.list_sales())?;
        Ok(Snapshot { products, sales })
    }

    pub async fn create_product(&self, params: &ProductCreate) -> Result<Product, ApiClientError> {
        debug!(?params, "POST /products");
        let resp = self
            .client
            .post(self.url("/products"))
            .json(params)
            .send()
            .await?;
        Self::read(resp).await
    }

    pub async fn record_sale(
        &self,
        product_id: &str,
        quantity: i64,
    ) -> Result<SaleReceipt, ApiClientError> {
        debug!(product_id, quantity, "POST /sales");
        let body = json!({ "productId": product_id, "quantity": quantity });
        let resp = self
            .client
            .post(self.url("/sales"))
            .json(&body)
            .send()
            .await?;
        Self::read(resp).await
    }

    pub async fn delete_product(&self, id: &str) -> Result<Message, ApiClientError> {
        debug!(id, "DELETE /products");
        let resp = self
            .client
            .delete(self.url(&format!("/products/{id}")))
            .send()
            .await?;
        Self::read(resp).await
    }

    pub async fn delete_sale(&self, id: &str) -> Result<Message, ApiClientError> {
        debug!(id, "DELETE /sales");
        let resp = self
            .client
            .delete(self.url(&format!("/sales/{id}")))
            .send()
            .await?;
        Self::read(resp).await
    }
}
