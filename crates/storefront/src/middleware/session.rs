//! Session middleware configuration and cart state helpers.
//!
//! Sessions live in memory via tower-sessions. The visitor's wishlist counter
//! and compare list are stored under [`session_keys::CART_STATE`].

use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};

use bazaar_core::cart::CartState;

use crate::config::StorefrontConfig;
use crate::models::session_keys;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "bazaar_session";

/// Session expiry time in seconds (7 days).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Create the session layer with an in-memory store.
#[must_use]
pub fn create_session_layer(config: &StorefrontConfig) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}

/// Read the cart state snapshot; a missing or unreadable entry is an empty cart.
pub async fn load_cart_state(session: &Session) -> CartState {
    match session.get::<CartState>(session_keys::CART_STATE).await {
        Ok(state) => state.unwrap_or_default(),
        Err(e) => {
            tracing::warn!("Failed to read cart state from session: {e}");
            CartState::default()
        }
    }
}

/// Store the cart state.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn store_cart_state(
    session: &Session,
    state: &CartState,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CART_STATE, state).await
}
