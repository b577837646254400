use super::price::Price;
use serde::Deserialize;

pub type ProductId = u32;

/// Immutable identity of a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// List price in pence; the floor and ceiling of the walk derive from it.
    pub base_price: Price,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, base_price: u64) -> Self {
        Self {
            id,
            name: name.into(),
            base_price: Price::new(base_price),
        }
    }
}
