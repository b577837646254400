use super::product::ListedProduct;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// Per-product timer that lowers an idle product's price once per period.
///
/// Each iteration arms a fresh wait of `period`. A purchase on the product
/// wakes the wait early and the scheduler re-arms without decaying. The task
/// ends when the shutdown flag flips to `true` or its sender is dropped.
pub struct DecayScheduler {
    product: Arc<ListedProduct>,
    period: Duration,
    shutdown: watch::Receiver<bool>,
}

impl DecayScheduler {
    pub fn new(
        product: Arc<ListedProduct>,
        period: Duration,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Self {
            product,
            period,
            shutdown,
        }
    }

    /// Starts the scheduler on the current tokio runtime.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    pub async fn run(mut self) {
        let product_id = self.product.product().id;
        debug!(product_id, period = ?self.period, "decay scheduler started");

        loop {
            if *self.shutdown.borrow() {
                break;
            }

            // Registered on creation, so a purchase landing before the first
            // poll still counts as suppressing this wait.
            let suppressed = self.product.suppressor().notified();

            tokio::select! {
                changed = self.shutdown.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
                _ = suppressed => {
                    debug!(product_id, "decay tick suppressed by purchase");
                }
                _ = tokio::time::sleep(self.period) => {
                    self.product.decrement().await;
                }
            }
        }

        debug!(product_id, "decay scheduler stopped");
    }
}
