//! Product page and gallery fragment handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::views::GalleryTemplate;

use super::SlugQuery;

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub name: String,
    /// Pre-rendered gallery.
    pub gallery: String,
}

async fn load_gallery(state: &AppState, slug: &str) -> Result<GalleryTemplate> {
    let settings = state.settings().await;
    let product = state.backend().product(slug).await?;
    GalleryTemplate::for_product(&product, &settings, state.stock())
        .ok_or_else(|| AppError::NotFound(slug.to_string()))
}

/// Display the product page.
///
/// This is also the URL pushed by the cards' shallow gallery navigation, so a
/// reload lands on the same product.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<ProductShowTemplate> {
    let gallery = load_gallery(&state, &slug).await?;

    Ok(ProductShowTemplate {
        name: gallery.card.name.clone(),
        gallery: gallery.render()?,
    })
}

/// Gallery fragment for the shop card's quick view and buy button (HTMX).
#[instrument(skip(state))]
pub async fn gallery(
    State(state): State<AppState>,
    Query(query): Query<SlugQuery>,
) -> Result<Response> {
    let slug = query
        .slug()
        .ok_or_else(|| AppError::BadRequest("missing slug".to_string()))?;

    Ok(load_gallery(&state, slug).await?.into_response())
}
