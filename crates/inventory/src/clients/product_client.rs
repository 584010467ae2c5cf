//! # Product Client
//!
//! Provides a high‑level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and exposes domain‑specific methods.
use crate::model::{Product, ProductCreate, ProductId};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductError::from(e)
    }
}

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(ProductError::from)
    }

    /// Takes `quantity` out of stock if that much is on hand.
    ///
    /// Returns the product after the decrement.
    #[instrument(skip(self))]
    pub async fn reserve_stock(&self, id: ProductId, quantity: i64) -> Result<Product, ProductError> {
        debug!("Reserving {} units for product {}", quantity, id);
        match self
            .inner
            .perform_action(id, ProductAction::ReserveStock(quantity))
            .await
        {
            Ok(ProductActionResult::ReserveStock(product)) => Ok(product),
            Ok(other) => Err(unexpected(other)),
            Err(e) => Err(e.into()),
        }
    }

    /// Adds `delta` to the stock with no check.
    #[instrument(skip(self))]
    pub async fn adjust_stock(&self, id: ProductId, delta: i64) -> Result<Product, ProductError> {
        debug!("Adjusting stock of product {} by {}", id, delta);
        match self
            .inner
            .perform_action(id, ProductAction::AdjustStock(delta))
            .await
        {
            Ok(ProductActionResult::AdjustStock(product)) => Ok(product),
            Ok(other) => Err(unexpected(other)),
            Err(e) => Err(e.into()),
        }
    }
}

fn unexpected(result: ProductActionResult) -> ProductError {
    ProductError::ActorCommunicationError(format!("unexpected action result: {result:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::{create_mock_client, expect_action, MockClient};

    fn widget(id: ProductId, stock: i64) -> Product {
        Product::new(id, "Widget", 9.99, stock)
    }

    #[tokio::test]
    async fn test_reserve_stock_success() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);
        let id = ProductId::generate();

        let reserve_task = tokio::spawn(async move { product_client.reserve_stock(id, 5).await });

        let (got, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");

        assert_eq!(got, id);
        match action {
            ProductAction::ReserveStock(amount) => assert_eq!(amount, 5),
            _ => panic!("Expected ReserveStock action"),
        }

        responder
            .send(Ok(ProductActionResult::ReserveStock(widget(id, 5))))
            .unwrap();

        let result = reserve_task.await.unwrap();
        assert_eq!(result.unwrap().stock, 5);
    }

    #[tokio::test]
    async fn test_reserve_stock_insufficient_stock() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);
        let id = ProductId::generate();

        let reserve_task = tokio::spawn(async move { product_client.reserve_stock(id, 100).await });

        let (_, _, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");

        // The actor boxes the entity error; the client must recover it intact
        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                ProductError::InsufficientStock {
                    requested: 100,
                    available: 7,
                },
            ))))
            .unwrap();

        let result = reserve_task.await.unwrap();
        assert_eq!(
            result,
            Err(ProductError::InsufficientStock {
                requested: 100,
                available: 7
            })
        );
    }

    #[tokio::test]
    async fn test_adjust_stock_sends_delta() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);
        let id = ProductId::generate();

        let task = tokio::spawn(async move { product_client.adjust_stock(id, -6).await });

        let (_, action, responder) = expect_action(&mut receiver).await.unwrap();
        assert!(matches!(action, ProductAction::AdjustStock(-6)));
        responder
            .send(Ok(ProductActionResult::AdjustStock(widget(id, -2))))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap().stock, -2);
    }

    #[tokio::test]
    async fn test_mismatched_action_result() {
        let mut mock = MockClient::<Product>::new();
        let id = ProductId::generate();
        mock.expect_action(id)
            .return_ok(ProductActionResult::AdjustStock(widget(id, 1)));

        let result = ProductClient::new(mock.client()).reserve_stock(id, 1).await;
        assert!(matches!(result, Err(ProductError::ActorCommunicationError(_))));
        mock.verify();
    }

    #[tokio::test]
    async fn test_missing_product_maps_to_not_found() {
        let mut mock = MockClient::<Product>::new();
        let id = ProductId::generate();
        mock.expect_action(id)
            .return_err(FrameworkError::NotFound(id.to_string()));

        let result = ProductClient::new(mock.client()).reserve_stock(id, 1).await;
        assert_eq!(result, Err(ProductError::NotFound(id.to_string())));
        mock.verify();
    }
}
