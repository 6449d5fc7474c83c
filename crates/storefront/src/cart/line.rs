//! Cart line items and the product data frozen into them.

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use wdb_core::{LineId, ProductId};

use crate::catalog::{Product, Variant};

/// Derive the line id for a product/color/size combination.
///
/// Two additions of the same combination produce the same id and
/// therefore land on the same line.
#[must_use]
pub fn line_id(product_id: &ProductId, color: &str, size: &str) -> LineId {
    LineId::new(format!("{product_id}-{color}-{size}"))
}

/// Product data captured at the moment a line was added.
///
/// A copy, not a reference into the catalog: later catalog edits (price
/// changes, variants going out of stock) must not rewrite lines the
/// customer already put in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSnapshot {
    pub id: ProductId,
    pub sku_code: String,
    pub permalink: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub promotional_price: Option<Decimal>,
    #[serde(default)]
    pub ratings: f64,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub collection: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    /// Kept so the cart edit view can re-offer colors and sizes without
    /// refetching the product
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl ProductSnapshot {
    /// The unit price a customer pays for this line's product.
    #[must_use]
    pub fn effective_price(&self) -> Decimal {
        match self.promotional_price {
            Some(promo) if promo < self.price => promo,
            _ => self.price,
        }
    }
}

impl From<&Product> for ProductSnapshot {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            sku_code: product.sku_code.clone(),
            permalink: product.permalink.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            promotional_price: product.promotional_price,
            ratings: product.ratings,
            categories: product.categories.clone(),
            collection: product.collection.clone(),
            image_urls: product.image_urls.clone(),
            variants: product.variants.clone(),
        }
    }
}

/// One line of the cart: a product in a specific color and size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Identity key; lines with equal ids are the same selection
    pub id: LineId,
    pub product: ProductSnapshot,
    /// At least 1 by construction; a line with nothing in it does not
    /// exist
    pub quantity: NonZeroU32,
    pub selected_color: String,
    pub selected_size: String,
}

impl CartLineItem {
    /// Build a fresh line for `product` in the given color and size.
    #[must_use]
    pub fn new(
        product: &Product,
        quantity: NonZeroU32,
        color: impl Into<String>,
        size: impl Into<String>,
    ) -> Self {
        let selected_color = color.into();
        let selected_size = size.into();
        Self {
            id: line_id(&product.id, &selected_color, &selected_size),
            product: ProductSnapshot::from(product),
            quantity,
            selected_color,
            selected_size,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_line_id_format() {
        let id = line_id(&ProductId::new("p42"), "Navy", "XL");
        assert_eq!(id.as_str(), "p42-Navy-XL");
    }

    #[test]
    fn test_line_id_empty_size_for_sizeless_products() {
        let id = line_id(&ProductId::new("bag-01"), "Tan", "");
        assert_eq!(id.as_str(), "bag-01-Tan-");
    }

    #[test]
    fn test_quantity_zero_rejected_on_deserialize() {
        let json = r#"{
            "id": "p1-Black-M",
            "product": {
                "id": "p1", "skuCode": "S", "permalink": "p", "name": "P",
                "description": "", "price": 100
            },
            "quantity": 0,
            "selectedColor": "Black",
            "selectedSize": "M"
        }"#;

        assert!(serde_json::from_str::<CartLineItem>(json).is_err());
    }
}
