//! Shop grid route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;
use crate::views::{CardOptions, render_shop_card};

/// Shop page template.
#[derive(Template, WebTemplate)]
#[template(path = "shop.html")]
pub struct ShopTemplate {
    /// Pre-rendered shop cards.
    pub cards: Vec<String>,
}

/// Display the shop grid with buy buttons.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<ShopTemplate> {
    let settings = state.settings().await;
    let products = state.backend().products().await?;

    let mut cards = Vec::with_capacity(products.len());
    for product in products.iter() {
        let html = render_shop_card(product, &settings, CardOptions::with_button(), state.stock())?;
        if !html.is_empty() {
            cards.push(html);
        }
    }

    Ok(ShopTemplate { cards })
}
