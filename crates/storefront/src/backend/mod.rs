//! Backend REST API client.
//!
//! # Architecture
//!
//! - The backend is the source of truth for settings, products and wishlists
//! - Settings and catalog reads are cached via `moka` (TTL from configuration)
//! - Wishlist mutations are never cached
//!
//! # Endpoints
//!
//! ```text
//! GET  /api/settings          - Store settings (currency symbol)
//! GET  /api/products          - Catalog listing
//! GET  /api/products/{slug}   - Single product
//! POST /api/wishlist          - Add to wishlist ({ pid, id } -> { success, exists })
//! ```

mod cache;

use std::sync::Arc;

use moka::future::Cache;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

use bazaar_core::actions::{WishlistApi, WishlistRequest, WishlistResponse};
use bazaar_core::{Product, Settings};

use crate::config::BackendConfig;

pub use cache::{CacheKey, CacheValue};

/// Errors that can occur when talking to the backend API.
#[derive(Debug, Error)]
pub enum BackendError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The configured base URL cannot have endpoint paths appended.
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),
}

/// Client for the backend REST API.
///
/// Cheaply cloneable; all clones share one connection pool and cache.
#[derive(Clone)]
pub struct BackendClient {
    inner: Arc<BackendClientInner>,
}

struct BackendClientInner {
    client: reqwest::Client,
    base_url: Url,
    token: Option<SecretString>,
    cache: Cache<CacheKey, CacheValue>,
}

impl BackendClient {
    /// Create a new backend client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(config.cache_ttl)
            .build();

        Ok(Self {
            inner: Arc::new(BackendClientInner {
                client,
                base_url: config.base_url.clone(),
                token: config.token.clone(),
                cache,
            }),
        })
    }

    /// Build an endpoint URL from path segments, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, BackendError> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| BackendError::InvalidUrl(self.inner.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: reqwest::Method, url: Url) -> reqwest::RequestBuilder {
        let builder = self.inner.client.request(method, url);
        match &self.inner.token {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        }
    }

    /// GET a JSON document.
    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, BackendError> {
        let url = self.endpoint(segments)?;
        let response = self.request(reqwest::Method::GET, url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::NOT_FOUND {
            return Err(BackendError::NotFound(segments.join("/")));
        }

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "Backend returned non-success status"
            );
            return Err(BackendError::Api {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Get store settings.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response cannot be parsed.
    #[instrument(skip(self))]
    pub async fn settings(&self) -> Result<Settings, BackendError> {
        if let Some(CacheValue::Settings(settings)) = self.inner.cache.get(&CacheKey::Settings).await
        {
            debug!("Cache hit for settings");
            return Ok(settings);
        }

        let settings: Settings = self.get_json(&["api", "settings"]).await?;
        self.inner
            .cache
            .insert(CacheKey::Settings, CacheValue::Settings(settings.clone()))
            .await;
        Ok(settings)
    }

    /// Get the catalog listing.
    ///
    /// Records that do not decode as products are logged and left out, so
    /// one bad record never hides the rest of the catalog.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response cannot be parsed.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Arc<Vec<Product>>, BackendError> {
        if let Some(CacheValue::Products(products)) = self.inner.cache.get(&CacheKey::Products).await
        {
            debug!("Cache hit for products");
            return Ok(products);
        }

        let records: Vec<serde_json::Value> = self.get_json(&["api", "products"]).await?;
        let products = Arc::new(decode_catalog(records));
        self.inner
            .cache
            .insert(CacheKey::Products, CacheValue::Products(Arc::clone(&products)))
            .await;
        Ok(products)
    }

    /// Get a single product by slug.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::NotFound` for unknown slugs, or another error if
    /// the request fails.
    #[instrument(skip(self))]
    pub async fn product(&self, slug: &str) -> Result<Product, BackendError> {
        let key = CacheKey::Product(slug.to_string());
        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&key).await {
            debug!(slug, "Cache hit for product");
            return Ok(*product);
        }

        let product: Product = self.get_json(&["api", "products", slug]).await?;
        self.inner
            .cache
            .insert(key, CacheValue::Product(Box::new(product.clone())))
            .await;
        Ok(product)
    }
}

/// Decode catalog records one by one, skipping the malformed ones.
fn decode_catalog(records: Vec<serde_json::Value>) -> Vec<Product> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Product>(record) {
            Ok(product) => Some(product),
            Err(e) => {
                tracing::warn!(index, error = %e, "Skipping malformed catalog record");
                None
            }
        })
        .collect()
}

impl WishlistApi for BackendClient {
    type Error = BackendError;

    /// `POST /api/wishlist`.
    ///
    /// The response body is honored even on error statuses, since the backend
    /// reports "already exists" and failures in the JSON payload.
    async fn add(&self, request: &WishlistRequest) -> Result<WishlistResponse, BackendError> {
        let url = self.endpoint(&["api", "wishlist"])?;
        let response = self
            .request(reqwest::Method::POST, url)
            .json(request)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<WishlistResponse>(&body) {
            Ok(parsed) => Ok(parsed),
            Err(_) if !status.is_success() => Err(BackendError::Api {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            }),
            Err(e) => Err(BackendError::Parse(e)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(base: &str) -> BackendClient {
        BackendClient::new(&BackendConfig::new(Url::parse(base).unwrap())).unwrap()
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let url = client("https://api.shop.test").endpoint(&["api", "products"]).unwrap();
        assert_eq!(url.as_str(), "https://api.shop.test/api/products");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let url = client("https://shop.test/backend/").endpoint(&["api", "settings"]).unwrap();
        assert_eq!(url.as_str(), "https://shop.test/backend/api/settings");
    }

    #[test]
    fn test_endpoint_encodes_slug() {
        let url = client("https://api.shop.test")
            .endpoint(&["api", "products", "tea/green"])
            .unwrap();
        assert_eq!(url.as_str(), "https://api.shop.test/api/products/tea%2Fgreen");
    }

    #[test]
    fn test_decode_catalog_skips_malformed_records() {
        let records: Vec<serde_json::Value> = serde_json::from_value(serde_json::json!([
            { "_id": "p-tea", "slug": "green-tea", "price": 200, "discount": 150 },
            { "slug": "legacy", "price": 10 },
            { "_id": "p-bad", "slug": "bad", "price": [] },
            { "_id": "p-rice", "slug": "rice", "price": null, "review": [{ "rating": 4.5 }] }
        ]))
        .unwrap();

        let products = decode_catalog(records);
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p-tea", "p-rice"]);
    }

    #[test]
    fn test_endpoint_rejects_non_base_url() {
        let err = client("mailto:shop@example.com").endpoint(&["api"]).unwrap_err();
        assert!(matches!(err, BackendError::InvalidUrl(_)));
    }
}
