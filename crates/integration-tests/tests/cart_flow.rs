//! End-to-end cart sessions against the persistent store.
//!
//! These tests run entirely offline: products are built in code and the
//! cart file lives in a temp directory. Each "session" opens a fresh
//! `CartStore` on the same path, the way a returning shopper gets their
//! cart back.
//!
//! Run with: cargo test -p wdb-integration-tests

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use tempfile::TempDir;
use wdb_core::ProductId;
use wdb_storefront::cart::{CartStore, cart_subtotal, total_item_count};
use wdb_storefront::catalog::{Product, Variant};
use wdb_storefront::variants::resolve_size_on_color_change;
use wdb_storefront::views::CartView;

fn qty(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).expect("quantity is nonzero")
}

fn variant(color: &str, size: &str, remains: u32) -> Variant {
    Variant {
        color: color.to_string(),
        color_code: "#101513".to_string(),
        size: size.to_string(),
        remains,
    }
}

/// A tee sold in two colors, discounted from 1990 to 1490 baht.
fn classic_tee() -> Product {
    Product {
        id: ProductId::new("classic-tee"),
        sku_code: "SKU-TEE".to_string(),
        permalink: "classic-tee".to_string(),
        name: "Classic Tee".to_string(),
        description: "Everyday cotton tee".to_string(),
        price: Decimal::new(1990, 0),
        promotional_price: Some(Decimal::new(1490, 0)),
        ratings: 4.6,
        categories: vec!["men-shirts".to_string()],
        collection: None,
        image_urls: vec![],
        variants: vec![
            variant("Black", "M", 5),
            variant("Black", "L", 2),
            variant("White", "M", 3),
        ],
    }
}

/// A one-size cap with no size axis on its variants.
fn canvas_cap() -> Product {
    Product {
        id: ProductId::new("canvas-cap"),
        sku_code: "SKU-CAP".to_string(),
        permalink: "canvas-cap".to_string(),
        name: "Canvas Cap".to_string(),
        description: "Adjustable canvas cap".to_string(),
        price: Decimal::new(590, 0),
        promotional_price: None,
        ratings: 4.1,
        categories: vec!["accessories".to_string()],
        collection: None,
        image_urls: vec![],
        variants: vec![variant("Navy", "", 8)],
    }
}

// ============================================================================
// Session Round-Trip Tests
// ============================================================================

#[test]
fn test_full_session_survives_restart() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("cart.json");
    let tee = classic_tee();
    let cap = canvas_cap();

    // Session 1: fill the cart, then switch the tee to White.
    {
        let mut cart = CartStore::open(&path);
        let tee_line = cart.add_item(&tee, qty(1), "Black", "M");
        cart.add_item(&tee, qty(1), "Black", "M");
        cart.add_item(&cap, qty(2), "Navy", "");

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(total_item_count(cart.lines()), 4);
        assert_eq!(cart_subtotal(cart.lines()), Decimal::new(4160, 0));

        let line = cart
            .lines()
            .iter()
            .find(|l| l.id == tee_line)
            .expect("tee line is in the cart");
        let size =
            resolve_size_on_color_change(&line.product.variants, "White", &line.selected_size)
                .expect("White has stock in some size");
        assert_eq!(size, "M");

        let new_id = cart
            .edit_selection(&tee_line, "White", size)
            .expect("tee line is in the cart");
        assert_eq!(new_id.as_str(), "classic-tee-White-M");
    }

    // Session 2: the cart comes back exactly as it was left.
    {
        let mut cart = CartStore::open(&path);
        assert_eq!(cart.lines().len(), 2);

        let first = cart.lines().first().expect("edited tee kept its position");
        assert_eq!(first.id.as_str(), "classic-tee-White-M");
        assert_eq!(first.quantity, qty(2));
        assert_eq!(first.selected_color, "White");
        let tee_id = first.id.clone();

        let view = CartView::from(cart.lines());
        assert_eq!(view.subtotal, "\u{e3f}4,160");
        assert_eq!(view.item_count, 4);

        let cap_id = cart
            .lines()
            .iter()
            .find(|l| l.product.permalink == "canvas-cap")
            .expect("cap line is in the cart")
            .id
            .clone();
        cart.set_quantity(&cap_id, 5);
        assert!(cart.remove_item(&tee_id));
    }

    // Session 3: only the cap is left, at its new quantity.
    let cart = CartStore::open(&path);
    assert_eq!(cart.lines().len(), 1);
    let cap_line = cart.lines().first().expect("cap line survived");
    assert_eq!(cap_line.quantity, qty(5));
    assert_eq!(cart_subtotal(cart.lines()), Decimal::new(2950, 0));
}

#[test]
fn test_editing_into_an_existing_line_merges_across_sessions() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("cart.json");
    let tee = classic_tee();

    let black_id = {
        let mut cart = CartStore::open(&path);
        let black = cart.add_item(&tee, qty(1), "Black", "M");
        cart.add_item(&tee, qty(2), "White", "M");
        black
    };

    {
        let mut cart = CartStore::open(&path);
        let merged = cart
            .edit_selection(&black_id, "White", "M")
            .expect("black line is in the cart");
        assert_eq!(merged.as_str(), "classic-tee-White-M");
        assert_eq!(cart.lines().len(), 1);
    }

    let cart = CartStore::open(&path);
    let line = cart.lines().first().expect("merged line persisted");
    assert_eq!(line.quantity, qty(3));
    assert_eq!(line.selected_color, "White");
}

// ============================================================================
// Snapshot Semantics Tests
// ============================================================================

#[test]
fn test_merged_lines_keep_the_first_snapshot() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("cart.json");
    let tee = classic_tee();

    let mut cart = CartStore::open(&path);
    cart.add_item(&tee, qty(1), "Black", "M");

    // The catalog moves on, but the line was captured at add time.
    let mut repriced = tee.clone();
    repriced.price = Decimal::new(2990, 0);
    repriced.promotional_price = None;
    cart.add_item(&repriced, qty(1), "Black", "M");

    assert_eq!(cart.lines().len(), 1);
    let line = cart.lines().first().expect("merged line");
    assert_eq!(line.quantity, qty(2));
    assert_eq!(line.product.price, Decimal::new(1990, 0));
    assert_eq!(line.product.promotional_price, Some(Decimal::new(1490, 0)));
    assert_eq!(cart_subtotal(cart.lines()), Decimal::new(2980, 0));
}

#[test]
fn test_restored_snapshot_still_prices_with_the_promotion() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("cart.json");

    {
        let mut cart = CartStore::open(&path);
        cart.add_item(&classic_tee(), qty(3), "Black", "L");
    }

    let cart = CartStore::open(&path);
    let line = cart.lines().first().expect("tee line restored");
    assert_eq!(line.product.effective_price(), Decimal::new(1490, 0));
    assert_eq!(cart_subtotal(cart.lines()), Decimal::new(4470, 0));

    let view = CartView::from(cart.lines());
    let line_view = view.lines.first().expect("tee line view");
    assert_eq!(line_view.line_total, "\u{e3f}4,470");
}
