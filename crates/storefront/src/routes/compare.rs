//! Compare list action handlers (HTMX).

use axum::{
    Form,
    response::{IntoResponse, Response},
};
use tower_sessions::Session;
use tracing::instrument;

use bazaar_core::actions::add_to_compare;

use crate::error::{Result, add_breadcrumb};
use crate::middleware::load_cart_state;
use crate::views::CountBadgeTemplate;

use super::{ProductActionForm, action_response};

/// Event sent when the compare list changed.
pub const COMPARE_UPDATED: &str = "compare-updated";

/// Queue a product for comparison.
///
/// Works for guests; the list lives in the visitor's session.
#[instrument(skip(session))]
pub async fn add(
    session: Session,
    Form(form): Form<ProductActionForm>,
) -> Result<Response> {
    add_breadcrumb("compare", "Add to compare list", Some(&[("product_id", form.pid.as_str())]));

    let product_id = form.product_id()?;
    let cart = load_cart_state(&session).await;
    let outcome = add_to_compare(&cart.compare, &product_id);

    Ok(action_response(&session, cart, outcome, COMPARE_UPDATED).await)
}

/// Compare count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> impl IntoResponse {
    let cart = load_cart_state(&session).await;

    CountBadgeTemplate {
        list: "compare",
        count: u32::try_from(cart.compare.len()).unwrap_or(u32::MAX),
    }
}
