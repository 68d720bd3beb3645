//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::views::{GalleryTemplate, render_product_card};

use super::{SlugQuery, is_htmx};

/// Home page template: the listing grid.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct HomeTemplate {
    /// Pre-rendered listing cards.
    pub cards: Vec<String>,
    /// Pre-rendered gallery when opened via `/?slug=`.
    pub gallery: Option<String>,
}

/// Display the listing grid.
///
/// The listing card's "Add to cart" control requests `/?slug={slug}` with
/// HTMX; such requests get only the gallery fragment back. A plain browser
/// request for the same URL gets the full page with the gallery opened.
#[instrument(skip(state, headers))]
pub async fn home(
    State(state): State<AppState>,
    Query(query): Query<SlugQuery>,
    headers: HeaderMap,
) -> Result<Response> {
    let settings = state.settings().await;

    let gallery = match query.slug() {
        Some(slug) => {
            let product = state.backend().product(slug).await?;
            let template = GalleryTemplate::for_product(&product, &settings, state.stock())
                .ok_or_else(|| AppError::NotFound(slug.to_string()))?;

            if is_htmx(&headers) {
                return Ok(template.into_response());
            }
            Some(template.render()?)
        }
        None => None,
    };

    let products = state.backend().products().await?;
    let mut cards = Vec::with_capacity(products.len());
    for product in products.iter() {
        let html = render_product_card(product, &settings)?;
        if !html.is_empty() {
            cards.push(html);
        }
    }

    Ok(HomeTemplate { cards, gallery }.into_response())
}
