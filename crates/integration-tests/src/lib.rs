//! Integration tests for Bazaar.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p bazaar-integration-tests
//! ```
//!
//! # Harness
//!
//! [`TestContext::start`] binds two servers on ephemeral ports:
//!
//! - a fake backend serving `/api/settings`, `/api/products`,
//!   `/api/products/{slug}` and `/api/wishlist` from a fixed catalog
//! - the storefront routes pointed at that backend, plus a `/test/login`
//!   route that signs the session in the way the authentication service would
//!
//! The [`reqwest::Client`] keeps cookies, so requests share one session.

#![allow(clippy::expect_used, clippy::missing_panics_doc)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, PoisonError};

use axum::{
    Form, Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tower_sessions::Session;
use url::Url;

use bazaar_core::UserId;
use bazaar_core::actions::{WishlistRequest, WishlistResponse};
use bazaar_storefront::config::StorefrontConfig;
use bazaar_storefront::middleware::{create_session_layer, set_current_user};
use bazaar_storefront::models::CurrentUser;
use bazaar_storefront::routes;
use bazaar_storefront::state::AppState;

/// Product id the fake backend reports as already wishlisted.
pub const EXISTING_WISHLIST_PID: &str = "already-listed";

/// Product id the fake backend fails on.
pub const FAILING_WISHLIST_PID: &str = "broken";

/// The fake backend's catalog.
///
/// - `green-tea`: discounted 200 -> 150, in stock
/// - `wild-honey`: not discounted, out of stock
/// - `p-noslug`: no slug, never rendered
/// - `legacy`: no `_id`, dropped when the catalog is decoded
/// - `p-rice`: null price and a fractional rating, still rendered
#[must_use]
pub fn catalog() -> Value {
    json!([
        {
            "_id": "p-tea",
            "slug": "green-tea",
            "name": "Green Tea",
            "price": 200,
            "discount": 150,
            "unit": "g",
            "unitValue": 500,
            "type": "simple",
            "quantity": 12,
            "image": [{ "url": "/img/tea.png" }],
            "review": [{ "rating": 5 }, { "rating": 4 }]
        },
        {
            "_id": "p-honey",
            "slug": "wild-honey",
            "name": "Wild Honey",
            "price": 90,
            "discount": 90,
            "type": "variable",
            "variants": [{ "name": "250g", "qty": 0 }, { "name": "500g", "qty": 0 }],
            "image": [{ "url": "/img/honey.png" }]
        },
        {
            "_id": "p-noslug",
            "name": "Ghost Product",
            "price": 10,
            "discount": 5
        },
        {
            "slug": "legacy",
            "name": "Legacy Record",
            "price": 10
        },
        {
            "_id": "p-rice",
            "slug": "brown-rice",
            "name": "Brown Rice",
            "price": null,
            "discount": 30,
            "quantity": 4,
            "review": [{ "rating": 4.5 }, { "rating": 5 }]
        }
    ])
}

/// Wishlist requests received by the fake backend.
#[derive(Clone, Default)]
pub struct WishlistCalls(Arc<Mutex<Vec<WishlistRequest>>>);

impl WishlistCalls {
    fn push(&self, request: WishlistRequest) {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);
    }

    /// Snapshot of the received requests.
    #[must_use]
    pub fn all(&self) -> Vec<WishlistRequest> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

async fn fake_settings() -> Json<Value> {
    Json(json!({ "currency": { "symbol": "$" } }))
}

async fn fake_products() -> Json<Value> {
    Json(catalog())
}

async fn fake_product(Path(slug): Path<String>) -> Response {
    let catalog = catalog();
    let found = catalog
        .as_array()
        .into_iter()
        .flatten()
        .find(|product| product["slug"] == slug.as_str());

    match found {
        Some(product) => Json(product.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, "no such product").into_response(),
    }
}

async fn fake_wishlist(
    State(calls): State<WishlistCalls>,
    Json(request): Json<WishlistRequest>,
) -> Response {
    let pid = request.pid.as_str().to_string();
    calls.push(request);

    match pid.as_str() {
        EXISTING_WISHLIST_PID => (
            StatusCode::CONFLICT,
            Json(WishlistResponse {
                success: false,
                exists: true,
            }),
        )
            .into_response(),
        FAILING_WISHLIST_PID => Json(json!({ "success": false })).into_response(),
        _ => Json(WishlistResponse {
            success: true,
            exists: false,
        })
        .into_response(),
    }
}

/// Router for the fake backend.
pub fn fake_backend(calls: WishlistCalls) -> Router {
    Router::new()
        .route("/api/settings", get(fake_settings))
        .route("/api/products", get(fake_products))
        .route("/api/products/{slug}", get(fake_product))
        .route("/api/wishlist", post(fake_wishlist))
        .with_state(calls)
}

#[derive(Deserialize)]
struct LoginForm {
    id: String,
}

/// Stand-in for the authentication service writing the session user.
async fn test_login(session: Session, Form(form): Form<LoginForm>) -> StatusCode {
    let user = CurrentUser {
        id: UserId::new(form.id),
        name: None,
    };
    match set_current_user(&session, &user).await {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Storefront routes plus `/test/login`, sharing one session layer.
pub fn storefront(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());

    routes::routes()
        .route("/test/login", post(test_login))
        .layer(session_layer)
        .with_state(state)
}

async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Test server error");
    });

    addr
}

/// A running fake backend and storefront.
pub struct TestContext {
    pub client: reqwest::Client,
    pub storefront_url: String,
    pub backend_url: Url,
    pub wishlist_calls: WishlistCalls,
}

impl TestContext {
    /// Start both servers.
    pub async fn start() -> Self {
        let wishlist_calls = WishlistCalls::default();
        let backend_addr = spawn(fake_backend(wishlist_calls.clone())).await;
        let backend_url =
            Url::parse(&format!("http://{backend_addr}")).expect("Invalid backend URL");

        let config = StorefrontConfig::for_backend(backend_url.clone());
        let state = AppState::new(config).expect("Failed to build application state");
        let storefront_addr = spawn(storefront(state)).await;

        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            storefront_url: format!("http://{storefront_addr}"),
            backend_url,
            wishlist_calls,
        }
    }

    /// Absolute storefront URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.storefront_url)
    }

    /// GET a storefront page, returning status and body.
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("GET failed");
        let status = StatusCode::from_u16(response.status().as_u16()).expect("Invalid status");
        (status, response.text().await.expect("Failed to read body"))
    }

    /// POST a urlencoded form body, returning the raw response.
    pub async fn post_form(&self, path: &str, body: &str) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .header("content-type", "application/x-www-form-urlencoded")
            .header("hx-request", "true")
            .body(body.to_string())
            .send()
            .await
            .expect("POST failed")
    }

    /// Sign the client's session in as `user_id`.
    pub async fn login(&self, user_id: &str) {
        let response = self.post_form("/test/login", &format!("id={user_id}")).await;
        assert_eq!(response.status().as_u16(), 204);
    }
}
