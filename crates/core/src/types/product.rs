//! Product data as delivered by the backend.
//!
//! Every field the backend may omit is optional here. Resolving those
//! options into display values happens once, in [`crate::card::CardState`].

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::id::ProductId;

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Backend document id.
    #[serde(rename = "_id", alias = "id")]
    pub id: ProductId,
    /// Unique routing key. Products without one cannot be rendered.
    #[serde(default)]
    pub slug: Option<String>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Regular price.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub price: Decimal,
    /// Sale price; only shown when strictly below `price`.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub discount: Decimal,
    /// Unit label, e.g. "kg".
    #[serde(default)]
    pub unit: Option<String>,
    /// Quantity per unit, e.g. `500` or `"1.5"`.
    #[serde(default)]
    pub unit_value: Option<UnitValue>,
    /// Ordered product images; the first one is the card image.
    #[serde(default, rename = "image")]
    pub images: Vec<Image>,
    /// Customer reviews.
    #[serde(default, rename = "review")]
    pub reviews: Vec<Review>,
    /// Inventory model.
    #[serde(default, rename = "type")]
    pub kind: ProductKind,
    /// Stock on hand for simple products.
    #[serde(default)]
    pub quantity: Option<i64>,
    /// Variants for variable products.
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl Product {
    /// Create a simple product with the given pricing and no optional data.
    #[must_use]
    pub fn new(id: impl Into<ProductId>, price: Decimal, discount: Decimal) -> Self {
        Self {
            id: id.into(),
            slug: None,
            name: None,
            price,
            discount,
            unit: None,
            unit_value: None,
            images: Vec::new(),
            reviews: Vec::new(),
            kind: ProductKind::Simple,
            quantity: None,
            variants: Vec::new(),
        }
    }

    /// The routing slug, if present and non-empty.
    #[must_use]
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref().filter(|slug| !slug.is_empty())
    }

    /// URL of the first image, if any.
    #[must_use]
    pub fn primary_image_url(&self) -> Option<&str> {
        self.images
            .first()
            .map(|image| image.url.as_str())
            .filter(|url| !url.is_empty())
    }

    /// "{unitValue} {unit}" when both parts are present and non-blank.
    #[must_use]
    pub fn unit_label(&self) -> Option<String> {
        let value = self.unit_value.as_ref().filter(|v| v.is_present())?;
        let unit = self.unit.as_deref().filter(|u| !u.is_empty())?;
        Some(format!("{value} {unit}"))
    }
}

/// Amounts the backend sends as `null` read as zero.
fn null_as_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Decimal>::deserialize(deserializer)?.unwrap_or_default())
}

/// Quantity-per-unit value, which the backend sends as either a number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UnitValue {
    Number(serde_json::Number),
    Text(String),
}

impl UnitValue {
    /// Zero and empty strings count as absent.
    #[must_use]
    pub fn is_present(&self) -> bool {
        match self {
            Self::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
            Self::Text(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for UnitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Product image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Image URL.
    #[serde(default)]
    pub url: String,
}

/// Customer review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Star rating, 1 to 5. Averaged ratings may be fractional.
    #[serde(default)]
    pub rating: Decimal,
}

/// How stock is tracked for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    /// Stock is tracked on the product itself.
    #[default]
    Simple,
    /// Stock is tracked per variant.
    Variable,
}

/// A purchasable variant of a variable product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Variant name, e.g. "Red / XL".
    #[serde(default)]
    pub name: Option<String>,
    /// Stock on hand.
    #[serde(default, alias = "qty")]
    pub quantity: i64,
}
