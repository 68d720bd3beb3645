//! Price display and discount arithmetic using decimal amounts.
//!
//! Amounts are shown the way the backend sends them: the currency symbol
//! followed by the shortest decimal form of the amount (`Tk150`, `Tk99.5`).

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An amount paired with the currency symbol it is displayed with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Amount in the currency's standard unit.
    pub amount: Decimal,
    /// Display symbol (e.g., "Tk", "$").
    pub symbol: String,
}

impl Money {
    /// Create a new display amount.
    #[must_use]
    pub fn new(amount: Decimal, symbol: impl Into<String>) -> Self {
        Self {
            amount,
            symbol: symbol.into(),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.symbol, self.amount.normalize())
    }
}

/// Which price values a card shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceDisplay {
    /// No discount: only the regular price.
    Single(Money),
    /// Discounted: the sale price is emphasized, the original is struck through.
    Discounted {
        /// The price the customer pays.
        discounted: Money,
        /// The regular price before discount.
        original: Money,
    },
}

impl PriceDisplay {
    /// Decide between a single price and a discounted pair.
    ///
    /// Inputs are trusted; negative amounts are not rejected.
    #[must_use]
    pub fn new(price: Decimal, discount: Decimal, symbol: &str) -> Self {
        if is_discounted(price, discount) {
            Self::Discounted {
                discounted: Money::new(discount, symbol),
                original: Money::new(price, symbol),
            }
        } else {
            Self::Single(Money::new(price, symbol))
        }
    }

    /// The amount the customer pays.
    #[must_use]
    pub const fn current(&self) -> &Money {
        match self {
            Self::Single(money) | Self::Discounted { discounted: money, .. } => money,
        }
    }

    /// The struck-through original amount, if discounted.
    #[must_use]
    pub const fn original(&self) -> Option<&Money> {
        match self {
            Self::Single(_) => None,
            Self::Discounted { original, .. } => Some(original),
        }
    }

    /// Number of price values rendered.
    #[must_use]
    pub const fn value_count(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Discounted { .. } => 2,
        }
    }
}

/// A product is discounted only when the discount is strictly below the price.
#[must_use]
pub fn is_discounted(price: Decimal, discount: Decimal) -> bool {
    discount < price
}

/// Percentage reduction from `price` to `discount`, rounded to one decimal.
///
/// Returns zero when `price <= 0`. Rounds half up toward positive infinity,
/// so `-2.25` becomes `-2.2`. A discount above the price yields a negative
/// percentage, which is passed through unclamped.
#[must_use]
pub fn discount_percent(price: Decimal, discount: Decimal) -> Decimal {
    if price <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let hundred = Decimal::ONE_HUNDRED;
    let ten = Decimal::TEN;
    let reduction = hundred - discount * hundred / price;
    ((reduction * ten + Decimal::new(5, 1)).floor() / ten).normalize()
}
