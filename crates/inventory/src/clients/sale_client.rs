//! # Sale Client
//!
//! Provides a high‑level API for interacting with the `Sale` actor.
//! It wraps a `ResourceClient<Sale>` together with a [`ProductClient`] and handles the
//! orchestration of recording a sale:
//!
//! 1. find the product and check that enough is in stock,
//! 2. decrement the stock,
//! 3. create the sale record.
//!
//! How steps 1 and 2 run depends on the [`SaleMode`]. The two writes (stock, then sale) are not
//! atomic: if the sale record cannot be written the stock stays decremented.
use crate::clients::ProductClient;
use crate::config::SaleMode;
use crate::model::{Product, ProductId, Sale, SaleCreate, SaleRecord};
use crate::sale_actor::SaleError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

/// Client for interacting with the Sale actor.
#[derive(Clone)]
pub struct SaleClient {
    inner: ResourceClient<Sale>,
    products: ProductClient,
    mode: SaleMode,
}

impl SaleClient {
    pub fn new(inner: ResourceClient<Sale>, products: ProductClient, mode: SaleMode) -> Self {
        Self {
            inner,
            products,
            mode,
        }
    }

    pub fn mode(&self) -> SaleMode {
        self.mode
    }

    /// Takes `quantity` units of the product out of stock and records the sale.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub async fn record_sale(&self, product_id: ProductId, quantity: i64) -> Result<Sale, SaleError> {
        debug!("Sending request");
        if quantity < 1 {
            return Err(SaleError::InvalidQuantity(quantity));
        }

        let product = match self.mode {
            SaleMode::Serialized => self.products.reserve_stock(product_id, quantity).await?,
            SaleMode::Unserialized => self.take_stock_unserialized(product_id, quantity).await?,
        };
        debug!(stock = product.stock, "Stock taken");

        let params = SaleCreate {
            product_id,
            quantity,
            date: None,
        };
        match self.inner.create(params).await {
            Ok(sale) => {
                info!(sale_id = %sale.id, stock = product.stock, "Sale recorded");
                Ok(sale)
            }
            Err(e) => {
                warn!(%product_id, quantity, error = %e, "Stock decremented but sale not recorded");
                Err(e.into())
            }
        }
    }

    /// Read, check, then apply an unconditional decrement. Another sale can slip in between the
    /// read and the decrement.
    async fn take_stock_unserialized(
        &self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<Product, SaleError> {
        let product = self
            .products
            .get(product_id)
            .await?
            .ok_or_else(|| SaleError::ProductNotFound(product_id.to_string()))?;
        if quantity > product.stock {
            return Err(SaleError::InsufficientStock {
                requested: quantity,
                available: product.stock,
            });
        }
        Ok(self.products.adjust_stock(product_id, -quantity).await?)
    }

    /// Every sale, oldest first, with its product resolved (or `None` once the product is gone).
    #[instrument(skip(self))]
    pub async fn list_sales(&self) -> Result<Vec<SaleRecord>, SaleError> {
        debug!("Sending request");
        let sales = self.list().await?;
        let products: HashMap<ProductId, Product> = self
            .products
            .list()
            .await?
            .into_iter()
            .map(|product| (product.id, product))
            .collect();
        Ok(sales
            .into_iter()
            .map(|sale| SaleRecord::resolve(sale, &products))
            .collect())
    }
}

#[async_trait]
impl ActorClient<Sale> for SaleClient {
    type Error = SaleError;

    fn inner(&self) -> &ResourceClient<Sale> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        SaleError::from(e)
    }
}
