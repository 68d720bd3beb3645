//! Wishlist action.
//!
//! The only card action that talks to the backend. Failures are logged and
//! turned into notices; they never propagate to the caller.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::cart::CartCommand;
use crate::types::{ProductId, UserId};

use super::ActionOutcome;
use super::notice::{LOGIN_REQUIRED, Notice, WISHLIST_ADDED, WISHLIST_EXISTS, WISHLIST_FAILED};

/// Body of `POST /api/wishlist`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistRequest {
    /// Product id.
    pub pid: ProductId,
    /// User id.
    pub id: UserId,
}

/// Response of `POST /api/wishlist`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistResponse {
    #[serde(default)]
    pub success: bool,
    /// Set when the product was already on the wishlist.
    #[serde(default)]
    pub exists: bool,
}

/// Backend endpoint that records wishlist entries.
pub trait WishlistApi {
    /// Transport or decoding failure.
    type Error: std::error::Error;

    /// Send one wishlist mutation.
    fn add(
        &self,
        request: &WishlistRequest,
    ) -> impl Future<Output = Result<WishlistResponse, Self::Error>> + Send;
}

/// Add a product to the signed-in user's wishlist.
///
/// Without a user no request is made and a login warning is returned. On
/// success the returned command sets the wishlist counter to
/// `current_count + 1`, where an absent counter counts as zero.
pub async fn add_to_wishlist<A>(
    api: &A,
    user: Option<&UserId>,
    product_id: &ProductId,
    current_count: Option<u32>,
) -> ActionOutcome
where
    A: WishlistApi + Sync,
{
    let Some(user_id) = user else {
        return ActionOutcome::notice(Notice::warning(LOGIN_REQUIRED));
    };

    let request = WishlistRequest {
        pid: product_id.clone(),
        id: user_id.clone(),
    };

    match api.add(&request).await {
        Ok(response) if response.success => {
            let count = current_count.unwrap_or(0).saturating_add(1);
            ActionOutcome::with_command(
                Notice::success(WISHLIST_ADDED),
                CartCommand::UpdateWishlist(count),
            )
        }
        Ok(response) if response.exists => ActionOutcome::notice(Notice::warning(WISHLIST_EXISTS)),
        Ok(_) => ActionOutcome::notice(Notice::error(WISHLIST_FAILED)),
        Err(e) => {
            tracing::error!(
                error = %e,
                product_id = %product_id,
                user_id = %user_id,
                "Wishlist request failed"
            );
            ActionOutcome::notice(Notice::error(e.to_string()))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::actions::NoticeLevel;

    #[derive(Debug)]
    struct Offline;

    impl std::fmt::Display for Offline {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("connection refused")
        }
    }

    impl std::error::Error for Offline {}

    /// Records requests and replies with a canned result.
    struct FakeApi {
        reply: Result<WishlistResponse, ()>,
        calls: Mutex<Vec<WishlistRequest>>,
    }

    impl FakeApi {
        fn replying(response: WishlistResponse) -> Self {
            Self {
                reply: Ok(response),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                reply: Err(()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    impl WishlistApi for FakeApi {
        type Error = Offline;

        async fn add(&self, request: &WishlistRequest) -> Result<WishlistResponse, Offline> {
            self.calls.lock().unwrap().push(request.clone());
            self.reply.map_err(|()| Offline)
        }
    }

    fn user() -> UserId {
        UserId::new("u1")
    }

    fn pid() -> ProductId {
        ProductId::new("p1")
    }

    #[tokio::test]
    async fn test_no_session_makes_no_request() {
        let api = FakeApi::replying(WishlistResponse {
            success: true,
            exists: false,
        });
        let outcome = add_to_wishlist(&api, None, &pid(), Some(3)).await;

        assert_eq!(outcome.notice, Notice::warning(LOGIN_REQUIRED));
        assert!(outcome.command.is_none());
        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn test_success_increments_counter() {
        let api = FakeApi::replying(WishlistResponse {
            success: true,
            exists: false,
        });

        let outcome = add_to_wishlist(&api, Some(&user()), &pid(), None).await;
        assert_eq!(outcome.notice, Notice::success(WISHLIST_ADDED));
        assert_eq!(outcome.command, Some(CartCommand::UpdateWishlist(1)));

        let outcome = add_to_wishlist(&api, Some(&user()), &pid(), Some(0)).await;
        assert_eq!(outcome.command, Some(CartCommand::UpdateWishlist(1)));

        let outcome = add_to_wishlist(&api, Some(&user()), &pid(), Some(4)).await;
        assert_eq!(outcome.command, Some(CartCommand::UpdateWishlist(5)));
    }

    #[tokio::test]
    async fn test_request_carries_product_and_user() {
        let api = FakeApi::replying(WishlistResponse::default());
        let _ = add_to_wishlist(&api, Some(&user()), &pid(), None).await;

        let calls = api.calls.lock().unwrap().clone();
        assert_eq!(
            calls,
            vec![WishlistRequest {
                pid: pid(),
                id: user(),
            }]
        );
    }

    #[tokio::test]
    async fn test_exists_warns() {
        let api = FakeApi::replying(WishlistResponse {
            success: false,
            exists: true,
        });
        let outcome = add_to_wishlist(&api, Some(&user()), &pid(), Some(2)).await;
        assert_eq!(outcome.notice, Notice::warning(WISHLIST_EXISTS));
        assert!(outcome.command.is_none());
    }

    #[tokio::test]
    async fn test_success_wins_over_exists() {
        let api = FakeApi::replying(WishlistResponse {
            success: true,
            exists: true,
        });
        let outcome = add_to_wishlist(&api, Some(&user()), &pid(), None).await;
        assert_eq!(outcome.notice.level, NoticeLevel::Success);
    }

    #[tokio::test]
    async fn test_neither_flag_is_generic_failure() {
        let api = FakeApi::replying(WishlistResponse::default());
        let outcome = add_to_wishlist(&api, Some(&user()), &pid(), None).await;
        assert_eq!(outcome.notice, Notice::error(WISHLIST_FAILED));
        assert!(outcome.command.is_none());
    }

    #[tokio::test]
    async fn test_transport_error_becomes_notice() {
        let api = FakeApi::failing();
        let outcome = add_to_wishlist(&api, Some(&user()), &pid(), Some(7)).await;
        assert_eq!(outcome.notice, Notice::error("connection refused"));
        assert!(outcome.command.is_none());
        assert_eq!(api.call_count(), 1);
    }

    #[test]
    fn test_response_defaults_missing_flags() {
        let response: WishlistResponse =
            serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!response.exists);
    }
}
