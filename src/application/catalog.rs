use super::crash::CrashRegistry;
use super::decay::DecayScheduler;
use super::product::ListedProduct;
use crate::config::PricingConfig;
use crate::domain::board::{PriceBoard, PriceSnapshot};
use crate::domain::ports::PriceFeed;
use crate::domain::price::Price;
use crate::domain::price_state::PriceMove;
use crate::domain::product::{Product, ProductId};
use crate::error::{PricingError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tracing::info;

/// The fixed set of products on sale and the composition root of the engine.
///
/// Owns one price record and one decay scheduler per product, and the single
/// crash registry they share. Membership never changes after construction.
pub struct PriceCatalog {
    products: Vec<Arc<ListedProduct>>,
    index: HashMap<ProductId, usize>,
    crashes: Arc<CrashRegistry>,
    shutdown: watch::Sender<bool>,
    schedulers: Mutex<Vec<JoinHandle<()>>>,
}

impl PriceCatalog {
    /// Builds the catalog and starts a decay scheduler for every product.
    ///
    /// Must be called from within a tokio runtime. Fails on an invalid config,
    /// an empty catalog, duplicate IDs or a base price whose floor rounds to
    /// zero.
    pub fn new(products: Vec<Product>, config: &PricingConfig) -> Result<Self> {
        config.validate()?;
        if products.is_empty() {
            return Err(PricingError::InvalidCatalog(
                "catalog must contain at least one product".to_string(),
            ));
        }

        let (shutdown, shutdown_rx) = watch::channel(false);
        let crashes = CrashRegistry::new(config.crash_expiry, shutdown_rx.clone());

        let mut index = HashMap::with_capacity(products.len());
        let mut listed = Vec::with_capacity(products.len());
        for product in products {
            // A zero floor leaves nothing to decay to or climb from.
            if config.rules.low_price(product.base_price) == Price::ZERO {
                return Err(PricingError::InvalidCatalog(format!(
                    "product {} has a base price of {} pence, too low for a non-zero floor",
                    product.id,
                    product.base_price.pence()
                )));
            }
            if index.insert(product.id, listed.len()).is_some() {
                return Err(PricingError::InvalidCatalog(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
            listed.push(Arc::new(ListedProduct::new(
                product,
                config.rules,
                Arc::clone(&crashes),
            )));
        }

        let schedulers = listed
            .iter()
            .map(|product| {
                DecayScheduler::new(Arc::clone(product), config.decay_period, shutdown_rx.clone())
                    .spawn()
            })
            .collect();

        info!(
            products = listed.len(),
            decay_period = ?config.decay_period,
            "price catalog started"
        );

        Ok(Self {
            products: listed,
            index,
            crashes,
            shutdown,
            schedulers: Mutex::new(schedulers),
        })
    }

    pub fn lookup(&self, product_id: ProductId) -> Result<&Arc<ListedProduct>> {
        self.index
            .get(&product_id)
            .map(|&position| &self.products[position])
            .ok_or(PricingError::ProductNotFound(product_id))
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().map(|listed| listed.product())
    }

    /// Looks up the product and applies one purchase to it.
    pub async fn apply_purchase(&self, product_id: ProductId) -> Result<PriceMove> {
        Ok(self.lookup(product_id)?.increment().await)
    }

    /// Every product's price in catalog order, each read under its own lock.
    pub async fn snapshot(&self) -> Vec<PriceSnapshot> {
        let mut prices = Vec::with_capacity(self.products.len());
        for product in &self.products {
            prices.push(product.snapshot().await);
        }
        prices
    }

    pub async fn crash_snapshot(&self) -> Option<ProductId> {
        self.crashes.read().await
    }

    pub async fn board(&self) -> PriceBoard {
        PriceBoard {
            prices: self.snapshot().await,
            crash: self.crash_snapshot().await,
        }
    }

    /// Stops every decay scheduler and pending crash expiry, then waits for
    /// the schedulers to finish. Prices stay readable afterwards.
    pub async fn shutdown(&self) {
        self.shutdown.send_replace(true);
        let handles: Vec<_> = self.schedulers.lock().await.drain(..).collect();
        for handle in handles {
            let _ = handle.await;
        }
        info!("price catalog stopped");
    }
}

#[async_trait]
impl PriceFeed for PriceCatalog {
    fn menu(&self) -> Vec<Product> {
        self.products().cloned().collect()
    }

    async fn apply_purchase(&self, product_id: ProductId) -> Result<PriceMove> {
        PriceCatalog::apply_purchase(self, product_id).await
    }

    async fn board(&self) -> PriceBoard {
        PriceCatalog::board(self).await
    }
}
