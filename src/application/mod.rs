//! Application layer: the live pricing engine.
//!
//! `PriceCatalog` is the entry point. Each product's price sits behind its own
//! `tokio::sync::RwLock` and is decayed by its own scheduler task, so products
//! never contend with each other. The crash registry has a separate lock.

pub mod catalog;
pub mod crash;
pub mod decay;
pub mod product;
