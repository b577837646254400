use crate::domain::product::ProductId;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{RwLock, watch};
use tracing::info;

/// Process-wide slot naming the product that crashed most recently.
///
/// A crash is visible for `expiry` after it was set. A newer crash replaces an
/// older one, and the older crash's expiry then leaves the slot alone.
pub struct CrashRegistry {
    slot: RwLock<Option<ProductId>>,
    expiry: Duration,
    shutdown: watch::Receiver<bool>,
}

impl CrashRegistry {
    /// Creates an empty registry. Pending expiries stop once `shutdown` flips
    /// to `true` or its sender is dropped.
    pub fn new(expiry: Duration, shutdown: watch::Receiver<bool>) -> Arc<Self> {
        Arc::new(Self {
            slot: RwLock::new(None),
            expiry,
            shutdown,
        })
    }

    /// Publishes `product_id` as the current crash and schedules its expiry.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn set_crash(self: &Arc<Self>, product_id: ProductId) {
        *self.slot.write().await = Some(product_id);

        let registry = Arc::clone(self);
        let mut shutdown = self.shutdown.clone();
        tokio::spawn(async move {
            if *shutdown.borrow() {
                return;
            }
            tokio::select! {
                _ = tokio::time::sleep(registry.expiry) => {
                    if registry.clear_if_matches(product_id).await {
                        info!(product_id, "crash expired");
                    }
                }
                _ = shutdown.changed() => {}
            }
        });
    }

    /// Empties the slot if it still names `product_id`. Returns whether it did.
    pub async fn clear_if_matches(&self, product_id: ProductId) -> bool {
        let mut slot = self.slot.write().await;
        if *slot == Some(product_id) {
            *slot = None;
            true
        } else {
            false
        }
    }

    pub async fn read(&self) -> Option<ProductId> {
        *self.slot.read().await
    }
}
