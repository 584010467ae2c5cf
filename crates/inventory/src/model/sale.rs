/// Represents a recorded sale.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// A sale only refers to its product by id; nothing keeps the reference valid once the product
/// is deleted.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::id::document_id;
use super::product::{Product, ProductId};

document_id!(
    /// Type-safe identifier for Sales.
    SaleId
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    #[serde(rename = "_id")]
    pub id: SaleId,
    #[serde(rename = "productId")]
    pub product_id: ProductId,
    pub quantity: i64,
    pub date: DateTime<Utc>,
}

/// Payload for creating a sale record.
#[derive(Debug, Clone)]
pub struct SaleCreate {
    pub product_id: ProductId,
    pub quantity: i64,
    /// Defaults to the creation time.
    pub date: Option<DateTime<Utc>>,
}

/// A sale as listed by `GET /sales`: the product reference is resolved to the product itself,
/// or `null` when it no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    #[serde(rename = "_id")]
    pub id: SaleId,
    #[serde(rename = "productId")]
    pub product: Option<Product>,
    pub quantity: i64,
    pub date: DateTime<Utc>,
}

impl SaleRecord {
    pub fn resolve(sale: Sale, products: &HashMap<ProductId, Product>) -> Self {
        Self {
            id: sale.id,
            product: products.get(&sale.product_id).cloned(),
            quantity: sale.quantity,
            date: sale.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_embeds_product_or_null() {
        let widget = Product::new(ProductId::generate(), "Widget", 9.99, 7);
        let products = HashMap::from([(widget.id, widget.clone())]);
        let sale = Sale {
            id: SaleId::generate(),
            product_id: widget.id,
            quantity: 3,
            date: Utc::now(),
        };
        let dangling = Sale {
            product_id: ProductId::generate(),
            ..sale.clone()
        };

        let record = SaleRecord::resolve(sale, &products);
        assert_eq!(record.product, Some(widget));

        let record = SaleRecord::resolve(dangling, &products);
        let json = serde_json::to_value(&record).unwrap();
        assert!(json["productId"].is_null());
        assert_eq!(json["quantity"], 3);
    }

    #[test]
    fn sale_wire_format() {
        let sale = Sale {
            id: SaleId::generate(),
            product_id: ProductId::generate(),
            quantity: 2,
            date: "2024-05-01T12:30:00Z".parse().unwrap(),
        };
        let json = serde_json::to_value(&sale).unwrap();
        assert_eq!(json["productId"], sale.product_id.to_string());
        assert_eq!(json["date"], "2024-05-01T12:30:00Z");
        assert_eq!(serde_json::from_value::<Sale>(json).unwrap(), sale);
    }
}
