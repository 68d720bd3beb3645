//! Wishlist action handlers (HTMX).

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use tower_sessions::Session;
use tracing::instrument;

use bazaar_core::actions::add_to_wishlist;

use crate::error::{Result, add_breadcrumb};
use crate::middleware::{OptionalAuth, load_cart_state};
use crate::state::AppState;
use crate::views::CountBadgeTemplate;

use super::{ProductActionForm, action_response};

/// Event sent when the wishlist counter changed.
pub const WISHLIST_UPDATED: &str = "wishlist-updated";

/// Add a product to the signed-in user's wishlist.
///
/// Guests get a login warning and no backend call is made. Returns the
/// notice fragment; on success also triggers `wishlist-updated`.
#[instrument(skip(state, session, user))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    OptionalAuth(user): OptionalAuth,
    Form(form): Form<ProductActionForm>,
) -> Result<Response> {
    add_breadcrumb("wishlist", "Add to wishlist", Some(&[("product_id", form.pid.as_str())]));

    let product_id = form.product_id()?;
    let cart = load_cart_state(&session).await;
    let outcome = add_to_wishlist(
        state.backend(),
        user.as_ref().map(|u| &u.id),
        &product_id,
        cart.wishlist,
    )
    .await;

    Ok(action_response(&session, cart, outcome, WISHLIST_UPDATED).await)
}

/// Wishlist count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> impl IntoResponse {
    let cart = load_cart_state(&session).await;

    CountBadgeTemplate {
        list: "wishlist",
        count: cart.wishlist_count(),
    }
}
