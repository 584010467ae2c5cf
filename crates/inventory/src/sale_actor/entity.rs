//! ActorEntity trait implementation for the Sale domain type.
//!
//! Sales have no custom actions: they are created by the sale client once stock has been taken,
//! and deleted directly.

use super::error::SaleError;
use crate::model::{Sale, SaleCreate, SaleId};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;

/// Sales cannot be changed after creation.
#[derive(Debug, Clone)]
pub enum SaleAction {}

#[async_trait]
impl ActorEntity for Sale {
    type Id = SaleId;
    type Create = SaleCreate;
    type Action = SaleAction;
    type ActionResult = ();
    type Context = ();
    type Error = SaleError;
    const COLLECTION: &'static str = "sales";

    fn id(&self) -> &SaleId {
        &self.id
    }

    fn from_create_params(id: SaleId, params: SaleCreate) -> Result<Self, Self::Error> {
        if params.quantity < 1 {
            return Err(SaleError::InvalidQuantity(params.quantity));
        }
        Ok(Self {
            id,
            product_id: params.product_id,
            quantity: params.quantity,
            date: params.date.unwrap_or_else(Utc::now),
        })
    }

    async fn handle_action(
        &mut self,
        action: SaleAction,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;

    #[test]
    fn date_defaults_to_now() {
        let before = Utc::now();
        let sale = Sale::from_create_params(
            SaleId::generate(),
            SaleCreate {
                product_id: ProductId::generate(),
                quantity: 2,
                date: None,
            },
        )
        .unwrap();
        assert!(sale.date >= before && sale.date <= Utc::now());
    }

    #[test]
    fn quantity_must_be_positive() {
        let err = Sale::from_create_params(
            SaleId::generate(),
            SaleCreate {
                product_id: ProductId::generate(),
                quantity: 0,
                date: None,
            },
        )
        .unwrap_err();
        assert_eq!(err, SaleError::InvalidQuantity(0));
    }
}
