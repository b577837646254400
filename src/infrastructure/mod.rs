//! Sources of catalog data that live with the service itself.

pub mod static_catalog;
