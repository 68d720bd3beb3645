//! Session-related types.
//!
//! Types stored in the session for the signed-in user and cart state.

use serde::{Deserialize, Serialize};

use bazaar_core::UserId;

/// Session-stored user identity.
///
/// Written by the authentication service; the storefront only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Backend user ID.
    pub id: UserId,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Session keys.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for the visitor's wishlist counter and compare list.
    pub const CART_STATE: &str = "cart_state";
}
