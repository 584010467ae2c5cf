//! ActorEntity trait implementation for the Product domain type.
//!
//! See the trait implementation on [`Product`] for method documentation.

use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;
use crate::model::{Product, ProductCreate, ProductId};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = ProductError;
    const COLLECTION: &'static str = "products";

    fn id(&self) -> &ProductId {
        &self.id
    }

    /// Creates a new Product from creation parameters, rejecting invalid payloads.
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        params.validate().map_err(ProductError::Validation)?;
        Ok(Self::new(id, params.name, params.price, params.stock))
    }

    /// Handles custom actions for the Product entity.
    ///
    /// # Actions
    /// - `ReserveStock`: decrements stock if enough is on hand, otherwise fails
    /// - `AdjustStock`: applies the delta unconditionally
    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &Self::Context,
    ) -> Result<ProductActionResult, Self::Error> {
        match action {
            ProductAction::ReserveStock(quantity) => {
                if quantity < 1 {
                    return Err(ProductError::InvalidQuantity(quantity));
                }
                if quantity > self.stock {
                    return Err(ProductError::InsufficientStock {
                        requested: quantity,
                        available: self.stock,
                    });
                }
                self.stock -= quantity;
                Ok(ProductActionResult::ReserveStock(self.clone()))
            }
            ProductAction::AdjustStock(delta) => {
                self.stock += delta;
                Ok(ProductActionResult::AdjustStock(self.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(stock: i64) -> Product {
        Product::new(ProductId::generate(), "Widget", 9.99, stock)
    }

    #[tokio::test]
    async fn reserve_stock_decrements() {
        let mut product = widget(10);
        let result = product
            .handle_action(ProductAction::ReserveStock(3), &())
            .await
            .unwrap();
        assert!(matches!(result, ProductActionResult::ReserveStock(p) if p.stock == 7));
        assert_eq!(product.stock, 7);
    }

    #[tokio::test]
    async fn reserve_stock_allows_selling_everything() {
        let mut product = widget(4);
        product
            .handle_action(ProductAction::ReserveStock(4), &())
            .await
            .unwrap();
        assert_eq!(product.stock, 0);
    }

    #[tokio::test]
    async fn reserve_stock_rejects_oversell_and_bad_quantities() {
        let mut product = widget(7);
        let err = product
            .handle_action(ProductAction::ReserveStock(100), &())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ProductError::InsufficientStock {
                requested: 100,
                available: 7
            }
        );

        let err = product
            .handle_action(ProductAction::ReserveStock(0), &())
            .await
            .unwrap_err();
        assert_eq!(err, ProductError::InvalidQuantity(0));
        assert_eq!(product.stock, 7);
    }

    #[tokio::test]
    async fn adjust_stock_can_go_negative() {
        let mut product = widget(4);
        product
            .handle_action(ProductAction::AdjustStock(-6), &())
            .await
            .unwrap();
        assert_eq!(product.stock, -2);
    }

    #[test]
    fn from_create_params_validates() {
        let bad = ProductCreate {
            name: String::new(),
            price: 1.0,
            stock: 1,
        };
        let err = Product::from_create_params(ProductId::generate(), bad).unwrap_err();
        assert!(matches!(err, ProductError::Validation(_)));
    }
}
