//! Domain layer: prices, products and the arithmetic of the price walk.
//!
//! Nothing here knows about timers, locks or transports.

pub mod board;
pub mod ports;
pub mod price;
pub mod price_state;
pub mod product;
