//! WDB Core - Shared types library.
//!
//! This crate provides common types used across all WDB storefront components:
//! - `storefront` - catalog client, cart store, and variant resolution
//! - `cli` - command-line shell over the storefront library
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no file
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and baht money display

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
