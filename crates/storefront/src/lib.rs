//! WDB storefront client library.
//!
//! Everything a WDB storefront frontend needs short of rendering: a typed
//! client for the read-only catalog API, a persistent shopping cart, the
//! rules for picking a purchasable color/size variant, and display
//! formatting for cart and product data.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod state;
pub mod variants;
pub mod views;
