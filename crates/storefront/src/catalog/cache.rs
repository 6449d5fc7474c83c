//! Cache types for catalog API responses.

use super::types::{Category, Collection, Product};

/// Cache key for catalog lookups.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub(crate) enum CacheKey {
    Product(String),
    Products { category: Option<String> },
    Categories,
    Collections,
}

/// Cached value types.
#[derive(Debug, Clone)]
pub(crate) enum CacheValue {
    Product(Box<Product>),
    Products(Vec<Product>),
    Categories(Vec<Category>),
    Collections(Vec<Collection>),
}
