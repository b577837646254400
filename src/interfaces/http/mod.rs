//! JSON-over-HTTP transport for the price feed.

pub mod error;
pub mod handlers;
pub mod models;
pub mod router;

use crate::domain::ports::PriceFeedRef;

#[derive(Clone)]
pub struct AppState {
    pub feed: PriceFeedRef,
}

impl AppState {
    pub fn new(feed: PriceFeedRef) -> Self {
        Self { feed }
    }
}
