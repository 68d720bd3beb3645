//! Store-wide settings consumed by product cards.

use serde::{Deserialize, Serialize};

/// Currency symbol shown when the backend does not configure one.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "Tk";

/// Read-only store settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Display currency.
    #[serde(default)]
    pub currency: Option<Currency>,
}

/// Display currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// Symbol prefixed to every amount.
    #[serde(default)]
    pub symbol: String,
}

impl Settings {
    /// Settings with an explicit currency symbol.
    #[must_use]
    pub fn with_symbol(symbol: impl Into<String>) -> Self {
        Self {
            currency: Some(Currency {
                symbol: symbol.into(),
            }),
        }
    }

    /// The configured symbol, or [`DEFAULT_CURRENCY_SYMBOL`] when missing or empty.
    #[must_use]
    pub fn currency_symbol(&self) -> &str {
        self.currency
            .as_ref()
            .map(|c| c.symbol.as_str())
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_CURRENCY_SYMBOL)
    }
}
