//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults point at the public WDB API
//! and persist the cart to `cart.json` in the working directory.
//!
//! - `WDB_API_BASE_URL` - Base URL of the catalog API (default: `https://api.storefront.wdb.skooldio.dev`)
//! - `WDB_CART_PATH` - File the cart snapshot is written to (default: `cart.json`)
//! - `WDB_HTTP_TIMEOUT_SECS` - Per-request timeout in seconds (default: 10)
//! - `WDB_CACHE_TTL_SECS` - Catalog cache time-to-live in seconds (default: 300)
//! - `WDB_CACHE_CAPACITY` - Maximum cached catalog entries (default: 1000)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Public WDB catalog API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.storefront.wdb.skooldio.dev";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Catalog API configuration
    pub catalog: CatalogApiConfig,
    /// Cart persistence configuration
    pub cart: CartConfig,
}

/// Catalog API connection configuration.
#[derive(Debug, Clone)]
pub struct CatalogApiConfig {
    /// Base URL of the catalog API, normalized to end with `/` so
    /// endpoint paths can be joined onto it
    pub base_url: Url,
    /// Per-request timeout
    pub timeout: Duration,
    /// Time-to-live for cached catalog responses
    pub cache_ttl: Duration,
    /// Maximum number of cached catalog entries
    pub cache_capacity: u64,
}

/// Cart persistence configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// File the cart snapshot is written to
    pub path: PathBuf,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            catalog: CatalogApiConfig::from_env()?,
            cart: CartConfig::from_env(),
        })
    }
}

impl CatalogApiConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = parse_base_url(&get_env_or_default(
            "WDB_API_BASE_URL",
            DEFAULT_API_BASE_URL,
        ))?;
        let timeout_secs = get_env_or_default("WDB_HTTP_TIMEOUT_SECS", "10")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("WDB_HTTP_TIMEOUT_SECS".to_string(), e.to_string())
            })?;
        let cache_ttl_secs = get_env_or_default("WDB_CACHE_TTL_SECS", "300")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("WDB_CACHE_TTL_SECS".to_string(), e.to_string())
            })?;
        let cache_capacity = get_env_or_default("WDB_CACHE_CAPACITY", "1000")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("WDB_CACHE_CAPACITY".to_string(), e.to_string())
            })?;

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            cache_ttl: Duration::from_secs(cache_ttl_secs),
            cache_capacity,
        })
    }
}

impl CartConfig {
    fn from_env() -> Self {
        Self {
            path: PathBuf::from(get_env_or_default("WDB_CART_PATH", "cart.json")),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a base URL, normalizing the path to end with `/`.
///
/// `Url::join` treats the last path segment as a file unless the path ends
/// with a slash, so `https://host/api` would otherwise lose `api` when an
/// endpoint is joined onto it.
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(raw)
        .map_err(|e| ConfigError::InvalidEnvVar("WDB_API_BASE_URL".to_string(), e.to_string()))?;
    if !url.path().ends_with('/') {
        url.set_path(&format!("{}/", url.path()));
    }
    Ok(url)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base_url_adds_trailing_slash() {
        let url = parse_base_url("https://api.example.com/v1").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v1/");
    }

    #[test]
    fn test_parse_base_url_keeps_trailing_slash() {
        let url = parse_base_url("https://api.example.com/v1/").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v1/");
    }

    #[test]
    fn test_parse_base_url_bare_host() {
        let url = parse_base_url("https://api.example.com").unwrap();
        assert_eq!(url.path(), "/");
        assert_eq!(url.join("products").unwrap().path(), "/products");
    }

    #[test]
    fn test_parse_base_url_rejects_garbage() {
        let result = parse_base_url("not a url");
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_default_api_base_url_parses() {
        assert!(parse_base_url(DEFAULT_API_BASE_URL).is_ok());
    }

    #[test]
    fn test_get_env_or_default_falls_back() {
        let value = get_env_or_default("WDB_TEST_VAR_THAT_IS_NEVER_SET", "fallback");
        assert_eq!(value, "fallback");
    }
}
