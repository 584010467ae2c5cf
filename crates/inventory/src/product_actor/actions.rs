//! Custom actions for the Product actor.
//!
//! This module defines the domain-specific operations (Actions) that can be performed on a
//! [`Product`](crate::model::Product) entity beyond create, get, list and delete.
//! These actions are handled by
//! [`ActorEntity::handle_action`](actor_framework::ActorEntity::handle_action).

use crate::model::Product;

/// Custom actions for Product entities.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Checks that `quantity` is on hand and removes it, in one step.
    ///
    /// # Errors
    /// `InvalidQuantity` for quantities below one, `InsufficientStock` when the request exceeds
    /// the stock. Either way the product is left unchanged.
    ReserveStock(i64),
    /// Adds `delta` (usually negative) to the stock without any check.
    AdjustStock(i64),
}

/// Results from ProductActions - variants match 1:1 with ProductAction.
/// Both carry the product as it is after the action.
#[derive(Debug, Clone)]
pub enum ProductActionResult {
    ReserveStock(Product),
    AdjustStock(Product),
}
