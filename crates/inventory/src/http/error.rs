//! Mapping of domain errors onto HTTP responses.
//!
//! Every error body is `{ "message": ... }`.

use crate::model::{InvalidId, Message};
use crate::product_actor::ProductError;
use crate::sale_actor::SaleError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Unavailable(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(Message::new(self.to_string()))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<InvalidId> for ApiError {
    fn from(e: InvalidId) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<ProductError> for ApiError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::NotFound(_) => ApiError::NotFound("Product not found".to_string()),
            ProductError::InsufficientStock { .. } => {
                ApiError::BadRequest("Not enough stock".to_string())
            }
            ProductError::InvalidQuantity(_) | ProductError::Validation(_) => {
                ApiError::BadRequest(e.to_string())
            }
            ProductError::Storage(_) => ApiError::Unavailable(e.to_string()),
            ProductError::ActorCommunicationError(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<SaleError> for ApiError {
    fn from(e: SaleError) -> Self {
        match e {
            SaleError::ProductNotFound(_) => ApiError::NotFound("Product not found".to_string()),
            SaleError::InsufficientStock { .. } => {
                ApiError::BadRequest("Not enough stock".to_string())
            }
            SaleError::InvalidQuantity(_) => ApiError::BadRequest(e.to_string()),
            SaleError::Storage(_) => ApiError::Unavailable(e.to_string()),
            SaleError::ActorCommunicationError(_) => ApiError::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_fixed_messages() {
        assert_eq!(
            ApiError::from(SaleError::ProductNotFound("x".to_string())),
            ApiError::NotFound("Product not found".to_string())
        );
        let err = ApiError::from(SaleError::InsufficientStock {
            requested: 100,
            available: 7,
        });
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Not enough stock");
    }

    #[test]
    fn storage_errors_are_unavailable() {
        let err = ApiError::from(ProductError::Storage("down".to_string()));
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        let err = ApiError::from(SaleError::Storage("down".to_string()));
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn validation_errors_keep_their_reason() {
        let err = ApiError::from(ProductError::Validation("name must not be empty".to_string()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("name must not be empty"));
    }
}
