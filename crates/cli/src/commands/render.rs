//! Render product cards to HTML without a running storefront.
//!
//! Products are read from a JSON file in the backend's wire format, either a
//! single object or an array. Products without a slug produce no output,
//! exactly as on the site.

use std::io::Write;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use bazaar_core::stock::InventoryStock;
use bazaar_core::{Product, Settings};
use bazaar_storefront::views::{CardOptions, render_product_card, render_shop_card};

/// Errors from the render command.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid product JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

/// Which card template to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CardKind {
    /// Home grid card
    Listing,
    /// Shop grid card with hover actions
    Shop,
}

/// Render settings taken from the command line.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub card: CardKind,
    pub symbol: String,
    pub button: bool,
    pub layout: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ProductFile {
    Many(Vec<Product>),
    One(Box<Product>),
}

impl ProductFile {
    fn into_products(self) -> Vec<Product> {
        match self {
            Self::Many(products) => products,
            Self::One(product) => vec![*product],
        }
    }
}

/// Parse products from JSON text.
///
/// # Errors
///
/// Returns an error if the text is neither a product nor an array of products.
pub fn parse_products(json: &str) -> Result<Vec<Product>, RenderError> {
    Ok(serde_json::from_str::<ProductFile>(json)?.into_products())
}

/// Render every product with the chosen card, one card per line.
///
/// Returns how many cards were written.
///
/// # Errors
///
/// Returns an error if rendering or writing fails.
pub fn render_all(
    products: &[Product],
    options: &RenderOptions,
    out: &mut impl Write,
) -> Result<usize, RenderError> {
    let settings = Settings::with_symbol(&options.symbol);
    let mut written = 0;

    for product in products {
        let html = match options.card {
            CardKind::Listing => render_product_card(product, &settings)?,
            CardKind::Shop => {
                let card_options = CardOptions {
                    show_button: options.button,
                    layout: options.layout.clone(),
                    ..CardOptions::default()
                };
                render_shop_card(product, &settings, card_options, &InventoryStock)?
            }
        };

        if html.is_empty() {
            tracing::warn!(id = %product.id, "Skipping product without slug");
            continue;
        }

        writeln!(out, "{html}")?;
        written += 1;
    }

    Ok(written)
}

/// Read `path` and render its products to `out`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or rendering fails.
pub fn run(path: &Path, options: &RenderOptions, out: &mut impl Write) -> Result<(), RenderError> {
    let json = std::fs::read_to_string(path).map_err(|source| RenderError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let products = parse_products(&json)?;
    let written = render_all(&products, options, out)?;
    tracing::info!(total = products.len(), written, "Rendered product cards");
    Ok(())
}
