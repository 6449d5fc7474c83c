//! Domain types for the WDB catalog API.
//!
//! Everything here mirrors the JSON the API serves (camelCase fields).
//! Products and variants are read-only records; the storefront never
//! mutates catalog data.

use std::str::FromStr;

use rand::seq::SliceRandom;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wdb_core::{CategoryId, ProductId};

/// A purchasable color/size combination of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// Color name shown to the customer (e.g., "Black")
    pub color: String,
    /// Swatch display color (e.g., "#101513")
    pub color_code: String,
    /// Size label; empty when the product has no size axis
    #[serde(default)]
    pub size: String,
    /// Units left in stock for this combination
    pub remains: u32,
}

/// A sellable product as served by `GET /products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub sku_code: String,
    /// URL slug, also the key for `GET /products/{permalink}`
    pub permalink: String,
    pub name: String,
    pub description: String,
    /// List price in baht
    pub price: Decimal,
    /// Discounted price; shown instead of `price` when lower
    #[serde(default)]
    pub promotional_price: Option<Decimal>,
    /// Average review rating, 0 to 5
    #[serde(default)]
    pub ratings: f64,
    /// Permalinks of the categories this product belongs to
    #[serde(default)]
    pub categories: Vec<String>,
    /// Permalink of the collection featuring this product, if any
    #[serde(default)]
    pub collection: Option<String>,
    /// Product photos in display order
    #[serde(default)]
    pub image_urls: Vec<String>,
    /// Purchasable color/size combinations
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl Product {
    /// The price a customer actually pays: the promotional price when one
    /// is set and lower than the list price.
    #[must_use]
    pub fn effective_price(&self) -> Decimal {
        match self.promotional_price {
            Some(promo) if promo < self.price => promo,
            _ => self.price,
        }
    }

    /// Whether the product is currently discounted.
    #[must_use]
    pub fn is_on_sale(&self) -> bool {
        self.promotional_price.is_some_and(|promo| promo < self.price)
    }
}

/// A navigation category as served by `GET /categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub permalink: String,
    /// Parent category id; `None` for top-level categories
    #[serde(default)]
    pub parent_id: Option<CategoryId>,
}

/// An editorial tile inside a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionItem {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A curated collection as served by `GET /collections`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub name: String,
    pub permalink: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Editorial tiles shown on the collection page
    #[serde(default)]
    pub items: Vec<CollectionItem>,
}

/// Envelope wrapping `GET /products` responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ProductListEnvelope {
    pub data: Vec<Product>,
}

/// Envelope wrapping `GET /products/{permalink}` responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ProductEnvelope {
    #[serde(default)]
    pub data: Option<Product>,
}

// =============================================================================
// Client-side list helpers
// =============================================================================

/// Sort orders offered on product listing pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSortKey {
    /// Cheapest list price first
    PriceLowToHigh,
    /// Most expensive list price first
    PriceHighToLow,
    /// Highest rated first
    BestSeller,
}

/// Error for an unrecognized sort key token.
#[derive(Debug, Clone, Error)]
#[error("unknown sort key `{0}` (expected price-low, price-high, or best-seller)")]
pub struct ParseSortKeyError(String);

impl FromStr for ProductSortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price-low" => Ok(Self::PriceLowToHigh),
            "price-high" => Ok(Self::PriceHighToLow),
            "best-seller" => Ok(Self::BestSeller),
            other => Err(ParseSortKeyError(other.to_owned())),
        }
    }
}

/// Sort a product list in place.
///
/// Price sorts compare the list price; best-seller ranks by rating,
/// highest first. All sorts are stable, so ties keep API order.
pub fn sort_products(products: &mut [Product], key: ProductSortKey) {
    match key {
        ProductSortKey::PriceLowToHigh => products.sort_by(|a, b| a.price.cmp(&b.price)),
        ProductSortKey::PriceHighToLow => products.sort_by(|a, b| b.price.cmp(&a.price)),
        ProductSortKey::BestSeller => products.sort_by(|a, b| b.ratings.total_cmp(&a.ratings)),
    }
}

/// Pick up to `count` products at random, for "you may also like" rails.
#[must_use]
pub fn sample_products(products: &[Product], count: usize) -> Vec<Product> {
    let mut pool = products.to_vec();
    pool.shuffle(&mut rand::rng());
    pool.truncate(count);
    pool
}
