//! Application state shared across handlers.

use std::sync::Arc;

use bazaar_core::Settings;
use bazaar_core::stock::{InventoryStock, StockCheck};

use crate::backend::{BackendClient, BackendError};
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the backend client and the stock rule.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    backend: BackendClient,
    stock: Box<dyn StockCheck + Send + Sync>,
}

impl AppState {
    /// Create a new application state using the inventory-based stock rule.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend HTTP client cannot be built.
    pub fn new(config: StorefrontConfig) -> Result<Self, BackendError> {
        Self::with_stock(config, InventoryStock)
    }

    /// Create a new application state with a custom stock rule.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend HTTP client cannot be built.
    pub fn with_stock(
        config: StorefrontConfig,
        stock: impl StockCheck + Send + Sync + 'static,
    ) -> Result<Self, BackendError> {
        let backend = BackendClient::new(&config.backend)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                backend,
                stock: Box::new(stock),
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the backend API client.
    #[must_use]
    pub fn backend(&self) -> &BackendClient {
        &self.inner.backend
    }

    /// Get the stock rule used to gate buy-now actions.
    #[must_use]
    pub fn stock(&self) -> &(dyn StockCheck + Send + Sync) {
        self.inner.stock.as_ref()
    }

    /// Current store settings.
    ///
    /// Falls back to the configured currency symbol when the backend is
    /// unreachable or has no symbol, so cards always render a price.
    pub async fn settings(&self) -> Settings {
        match self.backend().settings().await {
            Ok(settings) if settings.currency.as_ref().is_some_and(|c| !c.symbol.is_empty()) => {
                settings
            }
            Ok(_) => Settings::with_symbol(&self.config().currency_symbol),
            Err(e) => {
                tracing::warn!("Failed to load settings, using configured currency: {e}");
                Settings::with_symbol(&self.config().currency_symbol)
            }
        }
    }
}
