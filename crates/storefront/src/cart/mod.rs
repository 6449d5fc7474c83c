//! The shopping cart.
//!
//! # Architecture
//!
//! - Lines live in memory in insertion order; every mutation rewrites a
//!   JSON snapshot file so the cart survives process restarts
//! - Adding the same product/color/size twice merges into one line
//!   instead of duplicating it
//! - Each line freezes a [`ProductSnapshot`] at add time, so catalog
//!   changes never rewrite what is already in the cart
//! - Mutations are infallible: a snapshot that cannot be written is
//!   logged and the in-memory cart stays authoritative
//!
//! # Example
//!
//! ```rust,ignore
//! use wdb_storefront::cart::CartStore;
//!
//! let mut cart = CartStore::open(&config.cart.path);
//! let line_id = cart.add_item(&product, quantity, "Black", "M");
//! cart.set_quantity(&line_id, 2);
//! ```

pub mod line;
pub mod store;
pub mod totals;

pub use line::{CartLineItem, ProductSnapshot, line_id};
pub use store::{CartSnapshot, CartStore};
pub use totals::{cart_subtotal, discount_percent, line_total, total_item_count};
