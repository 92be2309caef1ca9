//! Cache types for backend responses.

use std::sync::Arc;

use paraiso_core::{Product, Slug};

/// Cache key for catalog reads.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum CacheKey {
    /// The full product list.
    Products,
    /// One product by slug.
    Product(Slug),
}

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Products(Arc<Vec<Product>>),
    Product(Arc<Product>),
}
