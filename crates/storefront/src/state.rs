//! Application state wiring the storefront components together.

use crate::cart::CartStore;
use crate::catalog::CatalogClient;
use crate::config::StorefrontConfig;

/// Everything the application shell needs, constructed once at startup
/// and passed explicitly to whatever drives the storefront.
///
/// The catalog client can be cloned out cheaply; the cart store is
/// exclusive and handed out mutably, so the state itself is an owned
/// value rather than a shared handle.
pub struct AppState {
    config: StorefrontConfig,
    catalog: CatalogClient,
    cart: CartStore,
}

impl AppState {
    /// Build the state from configuration: readies a catalog client and
    /// opens the cart persisted at the configured path.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let catalog = CatalogClient::new(&config.catalog);
        let cart = CartStore::open(&config.cart.path);
        Self {
            config,
            catalog,
            cart,
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Get a reference to the catalog API client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.catalog
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Get mutable access to the cart store.
    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use url::Url;

    use crate::config::{CartConfig, CatalogApiConfig};

    use super::*;

    #[test]
    fn test_state_opens_fresh_cart() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorefrontConfig {
            catalog: CatalogApiConfig {
                base_url: Url::parse("http://localhost/").unwrap(),
                timeout: Duration::from_secs(1),
                cache_ttl: Duration::from_secs(60),
                cache_capacity: 10,
            },
            cart: CartConfig {
                path: dir.path().join("cart.json"),
            },
        };

        let state = AppState::new(config);
        assert!(state.cart().is_empty());
        assert!(
            state
                .config()
                .catalog
                .base_url
                .as_str()
                .starts_with("http://localhost")
        );
    }
}
