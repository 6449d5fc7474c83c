//! Cart management commands.
//!
//! Adds go through the catalog so stock can be checked before anything
//! lands in the cart; everything else works offline from the persisted
//! snapshot.

use std::num::NonZeroU32;

use wdb_core::LineId;
use wdb_storefront::catalog::CatalogError;
use wdb_storefront::state::AppState;
use wdb_storefront::variants::{
    is_out_of_stock, max_selectable_quantity, resolve_size_on_color_change,
};
use wdb_storefront::views::CartView;

/// Print the cart contents.
#[allow(clippy::print_stdout)]
pub fn show(state: &AppState) {
    let view = CartView::from(state.cart().lines());
    if view.lines.is_empty() {
        println!("Your cart is empty.");
        return;
    }

    for line in &view.lines {
        println!(
            "{:<28} {:<10} {:<6} x{:<3} {:>10}   [{}]",
            line.name,
            line.color,
            size_label(&line.size),
            line.quantity,
            line.line_total,
            line.id
        );
    }
    println!("{} items, subtotal {}", view.item_count, view.subtotal);
}

/// Fetch a product and add it to the cart.
#[allow(clippy::print_stdout)]
pub async fn add(
    state: &mut AppState,
    permalink: &str,
    color: &str,
    size: &str,
    quantity: NonZeroU32,
) -> Result<(), CatalogError> {
    let product = state.catalog().get_product(permalink).await?;

    if is_out_of_stock(&product.variants, color, size) {
        println!(
            "{} in {color}/{} is out of stock.",
            product.name,
            size_label(size)
        );
        return Ok(());
    }

    let max = max_selectable_quantity(&product.variants, color, size);
    if quantity.get() > max {
        println!(
            "Only {max} left of {} in {color}/{}.",
            product.name,
            size_label(size)
        );
        return Ok(());
    }

    let id = state.cart_mut().add_item(&product, quantity, color, size);
    println!("Added {} x{quantity} (line {id}).", product.name);
    Ok(())
}

/// Remove a line from the cart.
#[allow(clippy::print_stdout)]
pub fn remove(state: &mut AppState, line_id: &str) {
    let id = LineId::new(line_id);
    if state.cart_mut().remove_item(&id) {
        println!("Removed line {id}.");
    } else {
        println!("No line {id} in the cart.");
    }
}

/// Replace a line's quantity; zero removes the line.
#[allow(clippy::print_stdout)]
pub fn set_quantity(state: &mut AppState, line_id: &str, quantity: u32) {
    let id = LineId::new(line_id);
    if !state.cart().lines().iter().any(|line| line.id == id) {
        println!("No line {id} in the cart.");
        return;
    }

    state.cart_mut().set_quantity(&id, quantity);
    if quantity == 0 {
        println!("Removed line {id}.");
    } else {
        println!("Line {id} set to {quantity}.");
    }
}

/// Change a line's selection.
///
/// When no size is given the new color keeps the line's current size if
/// it can, and otherwise falls back to the color's first in-stock size,
/// exactly like switching color on the product page.
#[allow(clippy::print_stdout)]
pub fn edit(state: &mut AppState, line_id: &str, color: &str, size: Option<&str>) {
    let id = LineId::new(line_id);
    let Some(line) = state.cart().lines().iter().find(|line| line.id == id) else {
        println!("No line {id} in the cart.");
        return;
    };

    let new_size = match size {
        Some(size) => size.to_string(),
        None => {
            let Some(resolved) = resolve_size_on_color_change(
                &line.product.variants,
                color,
                &line.selected_size,
            ) else {
                println!("{} has nothing in stock in {color}.", line.product.name);
                return;
            };
            resolved
        }
    };

    match state.cart_mut().edit_selection(&id, color, new_size) {
        Some(new_id) => println!("Line is now {new_id}."),
        None => println!("No line {id} in the cart."),
    }
}

/// Checkout stub: prints a summary and reports checkout is unavailable.
#[allow(clippy::print_stdout)]
pub fn checkout(state: &AppState) {
    if state.cart().is_empty() {
        println!("Your cart is empty.");
        return;
    }

    let view = CartView::from(state.cart().lines());
    println!("{} items, subtotal {}", view.item_count, view.subtotal);
    println!("Checkout is not available yet.");
}

fn size_label(size: &str) -> &str {
    if size.is_empty() { "-" } else { size }
}
