//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Listing grid (gallery fragment for HTMX `?slug=`)
//! GET  /shop                   - Shop grid with buy buttons
//! GET  /product/{slug}         - Product page
//! GET  /gallery?slug=          - Gallery fragment (HTMX)
//!
//! # Card actions (HTMX fragments)
//! POST /wishlist               - Add to wishlist (notice, triggers wishlist-updated)
//! GET  /wishlist/count         - Wishlist count badge
//! POST /compare                - Add to compare list (notice, triggers compare-updated)
//! GET  /compare/count          - Compare count badge
//! ```

pub mod compare;
pub mod home;
pub mod products;
pub mod shop;
pub mod wishlist;

use axum::{
    Router,
    http::HeaderMap,
    response::{AppendHeaders, IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tower_sessions::Session;

use bazaar_core::ProductId;
use bazaar_core::actions::ActionOutcome;
use bazaar_core::cart::CartState;

use crate::error::{AppError, Result};
use crate::middleware::store_cart_state;
use crate::state::AppState;
use crate::views::NoticeTemplate;

/// `?slug=` query used by the gallery routes.
#[derive(Debug, Default, Deserialize)]
pub struct SlugQuery {
    #[serde(default)]
    pub slug: Option<String>,
}

impl SlugQuery {
    /// The slug, with an empty value treated as absent.
    #[must_use]
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref().filter(|s| !s.is_empty())
    }
}

/// Form body posted by the card action buttons.
#[derive(Debug, Deserialize)]
pub struct ProductActionForm {
    pub pid: String,
}

impl ProductActionForm {
    /// The posted product id, trimmed.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` when the id is blank.
    pub fn product_id(self) -> Result<ProductId> {
        let pid = self.pid.trim();
        if pid.is_empty() {
            return Err(AppError::BadRequest("missing product id".to_string()));
        }
        Ok(ProductId::new(pid))
    }
}

/// Whether the request was issued by HTMX.
#[must_use]
pub fn is_htmx(headers: &HeaderMap) -> bool {
    headers
        .get("HX-Request")
        .is_some_and(|value| value.as_bytes() == b"true")
}

/// Apply an action's command to the session cart and render its notice.
///
/// When the cart changed, `event` is sent as `HX-Trigger` so the count
/// badges refresh.
async fn action_response(
    session: &Session,
    mut cart: CartState,
    outcome: ActionOutcome,
    event: &'static str,
) -> Response {
    let ActionOutcome { notice, command } = outcome;
    let template = NoticeTemplate { notice };

    let Some(command) = command else {
        return template.into_response();
    };

    cart.apply(command);
    if let Err(e) = store_cart_state(session, &cart).await {
        tracing::error!("Failed to save cart state to session: {e}");
        return template.into_response();
    }

    (AppendHeaders([("HX-Trigger", event)]), template).into_response()
}

/// Create the wishlist routes router.
pub fn wishlist_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(wishlist::add))
        .route("/count", get(wishlist::count))
}

/// Create the compare routes router.
pub fn compare_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(compare::add))
        .route("/count", get(compare::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Listing grid and shallow gallery
        .route("/", get(home::home))
        .route("/shop", get(shop::index))
        .route("/product/{slug}", get(products::show))
        .route("/gallery", get(products::gallery))
        // Card actions
        .nest("/wishlist", wishlist_routes())
        .nest("/compare", compare_routes())
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_is_htmx() {
        let mut headers = HeaderMap::new();
        assert!(!is_htmx(&headers));

        headers.insert("HX-Request", HeaderValue::from_static("true"));
        assert!(is_htmx(&headers));
    }

    #[test]
    fn test_empty_slug_is_absent() {
        let query = SlugQuery {
            slug: Some(String::new()),
        };
        assert_eq!(query.slug(), None);
    }

    #[test]
    fn test_blank_product_id_is_rejected() {
        for pid in ["", "   "] {
            let form = ProductActionForm {
                pid: pid.to_string(),
            };
            assert!(matches!(form.product_id(), Err(AppError::BadRequest(_))));
        }

        let form = ProductActionForm {
            pid: " p-tea ".to_string(),
        };
        assert!(matches!(form.product_id(), Ok(id) if id.as_str() == "p-tea"));
    }
}
