//! Bazaar Core - product card logic shared by the storefront and CLI.
//!
//! This crate provides the pieces of the product cards that are not markup:
//! - `storefront` - Public-facing shop rendering the cards with Askama
//! - `cli` - Offline renderer for previewing card markup
//!
//! # Architecture
//!
//! The core crate contains only types, pure functions and traits - no HTTP
//! clients and no templates. State is passed in as read-only snapshots and
//! changes come back as [`cart::CartCommand`] values for the host to apply.
//!
//! # Modules
//!
//! - [`types`] - IDs, products, settings, and price display
//! - [`card`] - Resolve a product into a renderable card, or nothing
//! - [`stock`] - Pluggable availability checks for the buy-now action
//! - [`actions`] - Wishlist and compare actions
//! - [`cart`] - Per-visitor wishlist counter and compare list
//! - [`urls`] - Product and gallery URLs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod actions;
pub mod card;
pub mod cart;
pub mod stock;
pub mod types;
pub mod urls;

pub use types::*;
