//! WDB catalog API client.
//!
//! # Architecture
//!
//! - Plain REST over `reqwest` 0.13; every response body is JSON
//! - The API is read-only: the storefront fetches, never writes
//! - In-memory caching via `moka` for API responses (5 minute TTL)
//!
//! # Endpoints
//!
//! - `GET /products` (optional `?categories={permalink}` filter) and
//!   `GET /products/{permalink}` wrap their payload in a `{ "data": … }`
//!   envelope
//! - `GET /categories` and `GET /collections` return bare JSON arrays
//!
//! # Example
//!
//! ```rust,ignore
//! use wdb_storefront::catalog::CatalogClient;
//!
//! let client = CatalogClient::new(&config.catalog);
//!
//! // Browse a category
//! let products = client.list_products(Some("men-shoes")).await?;
//!
//! // Load one product page
//! let product = client.get_product("classic-tee-black").await?;
//! ```

mod cache;
pub mod types;

pub use types::{
    Category, Collection, CollectionItem, ParseSortKeyError, Product, ProductSortKey, Variant,
    sample_products, sort_products,
};

use std::sync::Arc;

use moka::future::Cache;
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

use crate::config::CatalogApiConfig;

use cache::{CacheKey, CacheValue};
use types::{ProductEnvelope, ProductListEnvelope};

/// Errors that can occur when talking to the catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A request URL could not be built from the configured base.
    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The API answered with an unexpected status code.
    #[error("Unexpected status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Rate limited by the API.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),
}

// =============================================================================
// CatalogClient
// =============================================================================

/// Client for the WDB catalog API.
///
/// Cheap to clone; all clones share one connection pool and one response
/// cache. Product, category, and collection reads are cached for the
/// configured TTL.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: Url,
    timeout: std::time::Duration,
    cache: Cache<CacheKey, CacheValue>,
}

impl CatalogClient {
    /// Create a new catalog API client.
    #[must_use]
    pub fn new(config: &CatalogApiConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.cache_capacity)
            .time_to_live(config.cache_ttl)
            .build();

        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.clone(),
                timeout: config.timeout,
                cache,
            }),
        }
    }

    /// Execute a GET request and decode the JSON body.
    async fn fetch<T>(&self, url: Url) -> Result<T, CatalogError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .inner
            .client
            .get(url.clone())
            .timeout(self.inner.timeout)
            .send()
            .await?;

        let status = response.status();

        // Check for rate limiting
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(CatalogError::RateLimited(retry_after));
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(url.path().to_string()));
        }

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "catalog API returned non-success status"
            );
            return Err(CatalogError::Status {
                status,
                body: response_text.chars().take(200).collect(),
            });
        }

        match serde_json::from_str(&response_text) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "failed to parse catalog API response"
                );
                Err(CatalogError::Parse(e))
            }
        }
    }

    // =========================================================================
    // Product Methods
    // =========================================================================

    /// List products, optionally filtered to one category permalink.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the response cannot
    /// be parsed.
    #[instrument(skip(self))]
    pub async fn list_products(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<Product>, CatalogError> {
        let key = CacheKey::Products {
            category: category.map(ToOwned::to_owned),
        };

        // Check cache
        if let Some(CacheValue::Products(products)) = self.inner.cache.get(&key).await {
            debug!("cache hit for product list");
            return Ok(products);
        }

        let mut url = self.inner.base_url.join("products")?;
        if let Some(slug) = category {
            url.query_pairs_mut().append_pair("categories", slug);
        }

        let envelope: ProductListEnvelope = self.fetch(url).await?;
        let products = envelope.data;

        // Cache the result
        self.inner
            .cache
            .insert(key, CacheValue::Products(products.clone()))
            .await;

        Ok(products)
    }

    /// Get a single product by its permalink.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the API has no such product,
    /// or another `CatalogError` if the request fails.
    #[instrument(skip(self), fields(permalink = %permalink))]
    pub async fn get_product(&self, permalink: &str) -> Result<Product, CatalogError> {
        let key = CacheKey::Product(permalink.to_string());

        // Check cache
        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&key).await {
            debug!("cache hit for product");
            return Ok(*product);
        }

        let url = self.inner.base_url.join(&format!("products/{permalink}"))?;
        let envelope: ProductEnvelope = self.fetch(url).await?;

        let product = envelope
            .data
            .ok_or_else(|| CatalogError::NotFound(format!("Product not found: {permalink}")))?;

        // Cache the result
        self.inner
            .cache
            .insert(key, CacheValue::Product(Box::new(product.clone())))
            .await;

        Ok(product)
    }

    // =========================================================================
    // Category and Collection Methods
    // =========================================================================

    /// List all navigation categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the response cannot
    /// be parsed.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
        if let Some(CacheValue::Categories(categories)) =
            self.inner.cache.get(&CacheKey::Categories).await
        {
            debug!("cache hit for categories");
            return Ok(categories);
        }

        let url = self.inner.base_url.join("categories")?;
        let categories: Vec<Category> = self.fetch(url).await?;

        self.inner
            .cache
            .insert(CacheKey::Categories, CacheValue::Categories(categories.clone()))
            .await;

        Ok(categories)
    }

    /// List all curated collections.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the response cannot
    /// be parsed.
    #[instrument(skip(self))]
    pub async fn list_collections(&self) -> Result<Vec<Collection>, CatalogError> {
        if let Some(CacheValue::Collections(collections)) =
            self.inner.cache.get(&CacheKey::Collections).await
        {
            debug!("cache hit for collections");
            return Ok(collections);
        }

        let url = self.inner.base_url.join("collections")?;
        let collections: Vec<Collection> = self.fetch(url).await?;

        self.inner
            .cache
            .insert(
                CacheKey::Collections,
                CacheValue::Collections(collections.clone()),
            )
            .await;

        Ok(collections)
    }
}
