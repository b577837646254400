use super::board::PriceBoard;
use super::price_state::PriceMove;
use super::product::{Product, ProductId};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// The surface the transport layer needs from the pricing core.
#[async_trait]
pub trait PriceFeed: Send + Sync {
    /// Catalog entries in catalog order.
    fn menu(&self) -> Vec<Product>;
    /// Records one purchase. Fails with `ProductNotFound` for unknown IDs.
    async fn apply_purchase(&self, product_id: ProductId) -> Result<PriceMove>;
    async fn board(&self) -> PriceBoard;
}

pub type PriceFeedRef = Arc<dyn PriceFeed>;
