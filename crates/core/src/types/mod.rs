//! Core types for Bazaar.
//!
//! This module provides type-safe wrappers for the product, pricing and
//! settings data the storefront renders.

pub mod id;
pub mod price;
pub mod product;
pub mod settings;

pub use id::*;
pub use price::{Money, PriceDisplay, discount_percent, is_discounted};
pub use product::{Image, Product, ProductKind, Review, UnitValue, Variant};
pub use settings::{Currency, DEFAULT_CURRENCY_SYMBOL, Settings};
