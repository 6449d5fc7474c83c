//! Product browsing commands.
//!
//! # Usage
//!
//! ```bash
//! # All products, cheapest first
//! wdb products list --sort price-low
//!
//! # One category
//! wdb products list --category men-shoes
//!
//! # Full detail for one product
//! wdb products show classic-tee-black
//! ```

use wdb_storefront::catalog::{CatalogError, ProductSortKey, sort_products};
use wdb_storefront::state::AppState;
use wdb_storefront::variants::{all_sizes_union, available_colors, default_selection};
use wdb_storefront::views::ProductCardView;

/// List products, optionally filtered to a category and sorted.
#[allow(clippy::print_stdout)]
pub async fn list(
    state: &AppState,
    category: Option<&str>,
    sort: Option<ProductSortKey>,
) -> Result<(), CatalogError> {
    let mut products = state.catalog().list_products(category).await?;
    if let Some(key) = sort {
        sort_products(&mut products, key);
    }

    if products.is_empty() {
        println!("No products found.");
        return Ok(());
    }

    for product in &products {
        print_card(&ProductCardView::from(product));
    }
    println!("{} products", products.len());
    Ok(())
}

/// Show one product: pricing, rating, and the full variant matrix.
#[allow(clippy::print_stdout)]
pub async fn show(state: &AppState, permalink: &str) -> Result<(), CatalogError> {
    let product = state.catalog().get_product(permalink).await?;
    let card = ProductCardView::from(&product);

    println!("{}  (SKU {})", product.name, product.sku_code);
    match (&card.promotional_price, &card.discount_badge) {
        (Some(promo), Some(badge)) => println!("{promo}  (was {}, {badge})", card.price),
        _ => println!("{}", card.price),
    }
    println!("{}  {:.1}", card.stars, product.ratings);
    if !product.description.is_empty() {
        println!("\n{}", product.description);
    }

    let colors = available_colors(&product.variants);
    if !colors.is_empty() {
        let names: Vec<&str> = colors.iter().map(|choice| choice.color.as_str()).collect();
        println!("\nColors: {}", names.join(", "));

        let sizes = all_sizes_union(&product.variants);
        if sizes.iter().any(|size| !size.is_empty()) {
            println!("Sizes:  {}", sizes.join(", "));
        }

        println!("\nStock:");
        for variant in &product.variants {
            let size = if variant.size.is_empty() {
                "-"
            } else {
                variant.size.as_str()
            };
            let stock = if variant.remains == 0 {
                "out of stock".to_string()
            } else {
                format!("{} left", variant.remains)
            };
            println!("  {:<12} {:<8} {stock}", variant.color, size);
        }
    }

    if let Some(selection) = default_selection(&product.variants) {
        match selection.size.as_deref() {
            Some(size) if !size.is_empty() => {
                println!("\nDefault selection: {} / {size}", selection.color);
            }
            _ => println!("\nDefault selection: {}", selection.color),
        }
    }

    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_card(card: &ProductCardView) {
    match (&card.promotional_price, &card.discount_badge) {
        (Some(promo), Some(badge)) => println!(
            "{:<36} {} {promo} (was {}, {badge})",
            card.permalink, card.stars, card.price
        ),
        _ => println!("{:<36} {} {}", card.permalink, card.stars, card.price),
    }
}
