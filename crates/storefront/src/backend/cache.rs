//! Cache types for backend API responses.

use std::sync::Arc;

use bazaar_core::{Product, Settings};

/// Cache key for settings and catalog reads.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum CacheKey {
    Settings,
    Products,
    Product(String),
}

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Settings(Settings),
    Products(Arc<Vec<Product>>),
    Product(Box<Product>),
}
