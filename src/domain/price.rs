use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A price expressed in the smallest currency unit (pence).
///
/// All scaling goes through `rust_decimal::Decimal` so that ratios such as
/// `1.04` are applied exactly before rounding to a whole unit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(pub u64);

impl Price {
    pub const ZERO: Self = Self(0);

    pub const fn new(pence: u64) -> Self {
        Self(pence)
    }

    pub fn pence(self) -> u64 {
        self.0
    }

    /// The price in major currency units with two decimal places (108 -> 1.08).
    pub fn major_units(self) -> Decimal {
        Decimal::from_i128_with_scale(i128::from(self.0), 2)
    }

    /// Multiplies by `factor` and rounds up to the next whole unit.
    pub fn scale_ceil(self, factor: Decimal) -> Self {
        Self::from_decimal((Decimal::from(self.0) * factor).ceil())
    }

    /// Multiplies by `factor` and rounds down to the previous whole unit.
    pub fn scale_floor(self, factor: Decimal) -> Self {
        Self::from_decimal((Decimal::from(self.0) * factor).floor())
    }

    // Factors are validated positive, so only saturation at the top matters.
    fn from_decimal(value: Decimal) -> Self {
        if value.is_sign_negative() {
            return Self::ZERO;
        }
        Self(value.to_u64().unwrap_or(u64::MAX))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.major_units())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_scale_ceil_rounds_up() {
        assert_eq!(Price(108).scale_ceil(dec!(1.04)), Price(113));
        assert_eq!(Price(20).scale_ceil(dec!(1.04)), Price(21));
    }

    #[test]
    fn test_scale_ceil_exact_product_is_not_bumped() {
        assert_eq!(Price(25).scale_ceil(dec!(1.04)), Price(26));
    }

    #[test]
    fn test_scale_floor_rounds_down() {
        assert_eq!(Price(128).scale_floor(dec!(0.96)), Price(122));
        assert_eq!(Price(540).scale_floor(dec!(0.2)), Price(108));
        assert_eq!(Price(540).scale_floor(dec!(0.8)), Price(432));
    }

    #[test]
    fn test_major_units_keeps_two_decimals() {
        assert_eq!(Price(108).to_string(), "1.08");
        assert_eq!(Price(100).to_string(), "1.00");
        assert_eq!(Price(7).to_string(), "0.07");
    }
}
