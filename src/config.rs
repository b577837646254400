use crate::domain::price_state::PricingRules;
use crate::error::{PricingError, Result};
use std::time::Duration;

/// Time an idle product waits before one decay tick.
pub const DEFAULT_DECAY_PERIOD: Duration = Duration::from_secs(60);
/// How long a crash stays visible on the board.
pub const CRASH_EXPIRY: Duration = Duration::from_secs(2);

/// Runtime parameters of the pricing engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingConfig {
    pub rules: PricingRules,
    pub decay_period: Duration,
    pub crash_expiry: Duration,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            rules: PricingRules::default(),
            decay_period: DEFAULT_DECAY_PERIOD,
            crash_expiry: CRASH_EXPIRY,
        }
    }
}

impl PricingConfig {
    pub fn with_decay_period(mut self, decay_period: Duration) -> Self {
        self.decay_period = decay_period;
        self
    }

    pub fn with_crash_expiry(mut self, crash_expiry: Duration) -> Self {
        self.crash_expiry = crash_expiry;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.decay_period.is_zero() {
            return Err(PricingError::InvalidConfig(
                "decay period must be greater than zero".to_string(),
            ));
        }
        if self.crash_expiry.is_zero() {
            return Err(PricingError::InvalidConfig(
                "crash expiry must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
