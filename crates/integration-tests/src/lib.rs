//! Integration tests for the WDB storefront.
//!
//! # Running Tests
//!
//! ```bash
//! # Offline tests (cart sessions against a temp directory)
//! cargo test -p wdb-integration-tests
//!
//! # Live catalog API tests (network access required)
//! cargo test -p wdb-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - End-to-end cart sessions across store restarts
//! - `catalog_api` - Live requests against the public catalog API
