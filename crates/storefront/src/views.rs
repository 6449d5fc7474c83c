//! Display data for cart and product rendering.
//!
//! Views carry preformatted strings so the rendering layer never does
//! money math or price formatting itself.

use rust_decimal::Decimal;
use wdb_core::Baht;

use crate::cart::{self, CartLineItem};
use crate::catalog::Product;

/// Format an amount the way WDB shows prices (`฿1,990`).
#[must_use]
pub fn format_baht(amount: Decimal) -> String {
    Baht(amount).to_string()
}

/// Cart line display data.
#[derive(Debug, Clone)]
pub struct CartLineView {
    pub id: String,
    pub name: String,
    pub permalink: String,
    pub color: String,
    pub size: String,
    pub quantity: u32,
    /// Effective unit price, formatted
    pub unit_price: String,
    /// Unit price times quantity, formatted
    pub line_total: String,
    pub image_url: Option<String>,
}

/// Cart display data.
#[derive(Debug, Clone)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub subtotal: String,
    pub item_count: u64,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            lines: Vec::new(),
            subtotal: format_baht(Decimal::ZERO),
            item_count: 0,
        }
    }
}

// =============================================================================
// Type Conversions
// =============================================================================

impl From<&[CartLineItem]> for CartView {
    fn from(lines: &[CartLineItem]) -> Self {
        Self {
            lines: lines.iter().map(CartLineView::from).collect(),
            subtotal: format_baht(cart::cart_subtotal(lines)),
            item_count: cart::total_item_count(lines),
        }
    }
}

impl From<&CartLineItem> for CartLineView {
    fn from(line: &CartLineItem) -> Self {
        Self {
            id: line.id.to_string(),
            name: line.product.name.clone(),
            permalink: line.product.permalink.clone(),
            color: line.selected_color.clone(),
            size: line.selected_size.clone(),
            quantity: line.quantity.get(),
            unit_price: format_baht(line.product.effective_price()),
            line_total: format_baht(cart::line_total(line)),
            image_url: line.product.image_urls.first().cloned(),
        }
    }
}

/// Product card display data for listing pages.
#[derive(Debug, Clone)]
pub struct ProductCardView {
    pub name: String,
    pub permalink: String,
    /// List price, formatted; shown struck through while on sale
    pub price: String,
    /// Promotional price, formatted, when the product is on sale
    pub promotional_price: Option<String>,
    /// Whole-percent discount badge, e.g. `-25%`; absent when not on sale
    pub discount_badge: Option<String>,
    pub stars: RatingStars,
    pub ratings: f64,
    pub image_url: Option<String>,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        let discount = cart::discount_percent(product.price, product.promotional_price);
        Self {
            name: product.name.clone(),
            permalink: product.permalink.clone(),
            price: format_baht(product.price),
            promotional_price: product
                .is_on_sale()
                .then(|| format_baht(product.effective_price())),
            discount_badge: (discount > 0).then(|| format!("-{discount}%")),
            stars: RatingStars::from_rating(product.ratings),
            ratings: product.ratings,
            image_url: product.image_urls.first().cloned(),
        }
    }
}

/// Star breakdown for a 0-5 rating.
///
/// Whole stars are the rating floored; the half star lights up when the
/// fraction reaches one half. Always five stars in total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingStars {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl RatingStars {
    #[must_use]
    pub fn from_rating(rating: f64) -> Self {
        let clamped = if rating.is_nan() {
            0.0
        } else {
            rating.clamp(0.0, 5.0)
        };
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let full = clamped.floor() as u8;
        let half = clamped - clamped.floor() >= 0.5;
        let empty = 5u8.saturating_sub(full + u8::from(half));
        Self { full, half, empty }
    }
}

impl std::fmt::Display for RatingStars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for _ in 0..self.full {
            f.write_str("★")?;
        }
        if self.half {
            f.write_str("½")?;
        }
        for _ in 0..self.empty {
            f.write_str("☆")?;
        }
        Ok(())
    }
}
