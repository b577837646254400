use super::price::Price;
use crate::error::{PricingError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Share of the base price used as the floor of the walk.
pub const LOW_RATIO: Decimal = dec!(0.2);
/// Share of the base price above which a purchase crashes the price.
pub const CRASH_RATIO: Decimal = dec!(0.8);
/// Relative step applied by each purchase (up) and each decay tick (down).
pub const PRICE_INCREMENT: Decimal = dec!(0.04);

/// The ratios driving the price walk of every product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingRules {
    low_ratio: Decimal,
    crash_ratio: Decimal,
    price_increment: Decimal,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            low_ratio: LOW_RATIO,
            crash_ratio: CRASH_RATIO,
            price_increment: PRICE_INCREMENT,
        }
    }
}

impl PricingRules {
    /// Requires `0 < low_ratio <= crash_ratio` and `0 < price_increment < 1`.
    pub fn new(low_ratio: Decimal, crash_ratio: Decimal, price_increment: Decimal) -> Result<Self> {
        if low_ratio <= Decimal::ZERO {
            return Err(PricingError::InvalidConfig(
                "low ratio must be positive".to_string(),
            ));
        }
        if crash_ratio < low_ratio {
            return Err(PricingError::InvalidConfig(
                "crash ratio must not be below the low ratio".to_string(),
            ));
        }
        if price_increment <= Decimal::ZERO || price_increment >= Decimal::ONE {
            return Err(PricingError::InvalidConfig(
                "price increment must be between 0 and 1 (exclusive)".to_string(),
            ));
        }
        Ok(Self {
            low_ratio,
            crash_ratio,
            price_increment,
        })
    }

    pub fn low_ratio(&self) -> Decimal {
        self.low_ratio
    }

    pub fn crash_ratio(&self) -> Decimal {
        self.crash_ratio
    }

    pub fn price_increment(&self) -> Decimal {
        self.price_increment
    }

    pub fn low_price(&self, base: Price) -> Price {
        base.scale_floor(self.low_ratio)
    }

    pub fn max_price(&self, base: Price) -> Price {
        base.scale_floor(self.crash_ratio)
    }

    fn raised(&self, price: Price) -> Price {
        price.scale_ceil(Decimal::ONE + self.price_increment)
    }

    fn lowered(&self, price: Price) -> Price {
        price.scale_floor(Decimal::ONE - self.price_increment)
    }
}

/// Direction of the last operation that moved a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Trend {
    /// Fully decayed to the floor (or never moved).
    #[default]
    #[serde(rename = "")]
    None,
    #[serde(rename = "up")]
    Up,
    #[serde(rename = "down")]
    Down,
}

/// What a single increment or decrement did to the price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceMove {
    Raised(Price),
    /// The raise would have passed the ceiling; the price went back to the floor.
    Crashed,
    Lowered(Price),
    /// The decay would have passed the floor; the price is clamped there.
    Floored,
}

/// Mutable price record of one product.
///
/// Holds `low <= current <= max` after every operation. `high` is the
/// lifetime high-water mark of `current` and survives crashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceState {
    rules: PricingRules,
    low: Price,
    max: Price,
    current: Price,
    high: Price,
    trend: Trend,
}

impl PriceState {
    pub fn new(base_price: Price, rules: PricingRules) -> Self {
        let low = rules.low_price(base_price);
        Self {
            rules,
            low,
            max: rules.max_price(base_price),
            current: low,
            high: low,
            trend: Trend::None,
        }
    }

    pub fn low(&self) -> Price {
        self.low
    }

    pub fn max(&self) -> Price {
        self.max
    }

    pub fn current(&self) -> Price {
        self.current
    }

    pub fn high(&self) -> Price {
        self.high
    }

    pub fn trend(&self) -> Trend {
        self.trend
    }

    /// Applies one purchase.
    pub fn increment(&mut self) -> PriceMove {
        let candidate = self.rules.raised(self.current);
        if candidate > self.max {
            self.current = self.low;
            self.trend = Trend::Down;
            return PriceMove::Crashed;
        }

        self.current = candidate;
        self.trend = Trend::Up;
        self.high = self.high.max(candidate);
        PriceMove::Raised(candidate)
    }

    /// Applies one decay tick. Idempotent once the floor is reached.
    pub fn decrement(&mut self) -> PriceMove {
        let candidate = self.rules.lowered(self.current);
        if candidate < self.low {
            self.current = self.low;
            self.trend = Trend::None;
            return PriceMove::Floored;
        }

        self.current = candidate;
        self.trend = Trend::Down;
        PriceMove::Lowered(candidate)
    }
}
