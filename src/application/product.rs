use super::crash::CrashRegistry;
use crate::domain::board::PriceSnapshot;
use crate::domain::price_state::{PriceMove, PriceState, PricingRules};
use crate::domain::product::Product;
use std::sync::Arc;
use tokio::sync::{Notify, RwLock};
use tracing::{debug, info};

/// A catalog entry together with its live price.
///
/// The price state sits behind this product's own lock; the crash registry is
/// shared with every other product.
pub struct ListedProduct {
    product: Product,
    state: RwLock<PriceState>,
    suppressor: Notify,
    crashes: Arc<CrashRegistry>,
}

impl ListedProduct {
    pub fn new(product: Product, rules: PricingRules, crashes: Arc<CrashRegistry>) -> Self {
        let state = PriceState::new(product.base_price, rules);
        Self {
            product,
            state: RwLock::new(state),
            suppressor: Notify::new(),
            crashes,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Applies a purchase.
    ///
    /// Cancels the pending decay tick, if any, so the raise is not undone by a
    /// tick that was about to fire. A crash is published to the registry while
    /// the product lock is still held.
    pub async fn increment(&self) -> PriceMove {
        let mut state = self.state.write().await;
        // Wakes only a scheduler that is currently waiting; never queues.
        self.suppressor.notify_waiters();

        let movement = state.increment();
        if movement == PriceMove::Crashed {
            self.crashes.set_crash(self.product.id).await;
            info!(
                product_id = self.product.id,
                name = %self.product.name,
                reset_to = %state.current(),
                "price crashed"
            );
        } else {
            debug!(product_id = self.product.id, price = %state.current(), "price raised");
        }
        movement
    }

    /// Applies one decay tick.
    pub async fn decrement(&self) -> PriceMove {
        let movement = self.state.write().await.decrement();
        debug!(product_id = self.product.id, ?movement, "price decayed");
        movement
    }

    pub async fn snapshot(&self) -> PriceSnapshot {
        let state = self.state.read().await;
        PriceSnapshot::of(self.product.id, &state)
    }

    pub(crate) fn suppressor(&self) -> &Notify {
        &self.suppressor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::price::Price;
    use crate::domain::price_state::Trend;
    use std::time::Duration;
    use tokio::sync::watch;

    fn listed(base: u64) -> (ListedProduct, Arc<CrashRegistry>, watch::Sender<bool>) {
        let (tx, rx) = watch::channel(false);
        let crashes = CrashRegistry::new(Duration::from_secs(2), rx);
        let product = ListedProduct::new(
            Product::new(1, "Stella", base),
            PricingRules::default(),
            Arc::clone(&crashes),
        );
        (product, crashes, tx)
    }

    #[tokio::test]
    async fn test_increment_updates_snapshot() {
        let (product, crashes, _shutdown) = listed(540);
        assert_eq!(product.increment().await, PriceMove::Raised(Price(113)));

        let snapshot = product.snapshot().await;
        assert_eq!(snapshot.id, 1);
        assert_eq!(snapshot.low, Price(108));
        assert_eq!(snapshot.current, Price(113));
        assert_eq!(snapshot.high, Price(113));
        assert_eq!(snapshot.trend, Trend::Up);
        assert_eq!(crashes.read().await, None);
    }

    #[tokio::test]
    async fn test_crash_is_published() {
        let (product, crashes, _shutdown) = listed(540);
        let mut movement = product.increment().await;
        while movement != PriceMove::Crashed {
            movement = product.increment().await;
        }

        let snapshot = product.snapshot().await;
        assert_eq!(snapshot.current, Price(108));
        assert_eq!(snapshot.trend, Trend::Down);
        assert_eq!(crashes.read().await, Some(1));
    }

    #[tokio::test]
    async fn test_suppression_without_waiter_is_absorbed() {
        let (product, _crashes, _shutdown) = listed(540);
        product.increment().await;

        // No scheduler was waiting, so nothing was stored for a later wait.
        let waiter = product.suppressor().notified();
        let fired = tokio::time::timeout(Duration::from_millis(10), waiter).await;
        assert!(fired.is_err());
    }
}
