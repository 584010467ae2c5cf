/// Represents a product in the inventory.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Product`](#impl-ActorEntity-for-Product) for details on:
/// - Creation parameters ([`ProductCreate`](crate::model::ProductCreate))
/// - Custom actions ([`ProductAction`](crate::product_actor::ProductAction))
use serde::{Deserialize, Serialize};

use super::id::document_id;

document_id!(
    /// Type-safe identifier for Products.
    ProductId
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    /// Signed: concurrent unserialized sales can drive it below zero.
    pub stock: i64,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (typically set by the actor system)
    /// * `name` - Product name
    /// * `price` - Unit price
    /// * `stock` - Quantity on hand
    pub fn new(id: ProductId, name: impl Into<String>, price: f64, stock: i64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
        }
    }
}

/// Payload for creating a product. Also the body of `POST /products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub stock: i64,
}

impl ProductCreate {
    /// Checks the payload, returning the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".to_string());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err("price must be a non-negative number".to_string());
        }
        if self.stock < 0 {
            return Err("stock must not be negative".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(name: &str, price: f64, stock: i64) -> ProductCreate {
        ProductCreate {
            name: name.to_string(),
            price,
            stock,
        }
    }

    #[test]
    fn validate_accepts_zero_price_and_stock() {
        assert!(create("Free sample", 0.0, 0).validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_fields() {
        assert!(create("   ", 1.0, 1).validate().unwrap_err().contains("name"));
        assert!(create("Widget", -0.5, 1).validate().unwrap_err().contains("price"));
        assert!(create("Widget", f64::NAN, 1).validate().unwrap_err().contains("price"));
        assert!(create("Widget", 1.0, -1).validate().unwrap_err().contains("stock"));
    }

    #[test]
    fn wire_format_uses_underscore_id() {
        let product = Product::new(ProductId::generate(), "Widget", 9.99, 10);
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["_id"], product.id.to_string());
        assert_eq!(json["price"], 9.99);
        assert_eq!(json["stock"], 10);
        assert!(json.get("id").is_none());
    }

    #[test]
    fn create_payload_ignores_unknown_fields_and_rejects_fractional_stock() {
        let parsed: ProductCreate =
            serde_json::from_str(r#"{"name":"Widget","price":9.99,"stock":10,"color":"red"}"#)
                .unwrap();
        assert_eq!(parsed, create("Widget", 9.99, 10));
        assert!(serde_json::from_str::<ProductCreate>(r#"{"name":"W","price":1,"stock":2.5}"#).is_err());
    }
}
