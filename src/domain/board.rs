use super::price::Price;
use super::price_state::{PriceState, Trend};
use super::product::ProductId;

/// Point-in-time view of one product's price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceSnapshot {
    pub id: ProductId,
    pub low: Price,
    pub high: Price,
    pub current: Price,
    pub trend: Trend,
}

impl PriceSnapshot {
    pub fn of(id: ProductId, state: &PriceState) -> Self {
        Self {
            id,
            low: state.low(),
            high: state.high(),
            current: state.current(),
            trend: state.trend(),
        }
    }
}

/// Every product's snapshot in catalog order plus the crash notification.
///
/// Each snapshot is consistent on its own; the board as a whole is not
/// taken atomically across products.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PriceBoard {
    pub prices: Vec<PriceSnapshot>,
    pub crash: Option<ProductId>,
}

impl PriceBoard {
    pub fn price_of(&self, id: ProductId) -> Option<&PriceSnapshot> {
        self.prices.iter().find(|snapshot| snapshot.id == id)
    }
}
