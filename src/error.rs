use crate::domain::product::ProductId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Product {0} not found")]
    ProductNotFound(ProductId),
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, PricingError>;
