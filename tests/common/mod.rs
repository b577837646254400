#![allow(dead_code)]

use hhse::application::catalog::PriceCatalog;
use hhse::config::PricingConfig;
use hhse::domain::product::Product;
use hhse::infrastructure::static_catalog::happy_hour_menu;
use std::io::{Error, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

pub const STELLA: u32 = 1;
pub const CARLSBERG: u32 = 2;

pub fn default_catalog() -> Arc<PriceCatalog> {
    Arc::new(
        PriceCatalog::new(happy_hour_menu(), &PricingConfig::default())
            .expect("built-in menu is valid"),
    )
}

pub fn catalog_with_period(products: Vec<Product>, decay_period: Duration) -> PriceCatalog {
    let config = PricingConfig::default().with_decay_period(decay_period);
    PriceCatalog::new(products, &config).expect("catalog should build")
}

pub fn write_catalog_csv(path: &Path, rows: &[(u32, &str, u64)]) -> Result<(), Error> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "id, name, base_price")?;
    for (id, name, base_price) in rows {
        writeln!(file, "{}, {}, {}", id, name, base_price)?;
    }
    Ok(())
}
