//! The full application router, driven in-process with `oneshot`.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;
use url::Url;

use bazaar_storefront::config::StorefrontConfig;
use bazaar_storefront::state::AppState;

/// Nothing listens on the discard port, so every backend call fails fast.
fn unreachable_app() -> axum::Router {
    let config = StorefrontConfig::for_backend(Url::parse("http://127.0.0.1:9").unwrap());
    bazaar_storefront::app(AppState::new(config).unwrap())
}

#[tokio::test]
async fn test_health() {
    let response = unreachable_app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_readiness_fails_without_backend() {
    let response = unreachable_app()
        .oneshot(Request::get("/health/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let response = unreachable_app()
        .oneshot(
            Request::get("/health")
                .header("x-request-id", "req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()["x-request-id"], "req-42");
}

#[tokio::test]
async fn test_catalog_failure_is_bad_gateway() {
    let response = unreachable_app()
        .oneshot(Request::get("/shop").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_guest_wishlist_needs_no_backend() {
    let response = unreachable_app()
        .oneshot(
            Request::post("/wishlist")
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from("pid=p-tea"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get("HX-Trigger").is_none());
}

#[tokio::test]
async fn test_compare_works_without_backend() {
    let response = unreachable_app()
        .oneshot(
            Request::post("/compare")
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from("pid=p-tea"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["HX-Trigger"], "compare-updated");
}
