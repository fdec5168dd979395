#![allow(dead_code)]

use std::sync::Arc;

use axum::{Router, middleware, routing::get};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::json;
use shorthand::api::handlers::redirect_handler;
use shorthand::api::middleware::auth;
use shorthand::api::routes::protected_routes;
use shorthand::application::services::{AuthService, LinkService};
use shorthand::infrastructure::memory::MemoryLinkStore;
use shorthand::state::AppState;

pub const TEST_SECRET: &str = "test-signing-secret";

/// Builds application state over a fresh, empty link store.
pub fn create_test_state() -> AppState {
    let store = Arc::new(MemoryLinkStore::new());

    AppState {
        link_service: Arc::new(LinkService::new(store)),
        auth_service: Arc::new(AuthService::new(TEST_SECRET)),
    }
}

/// Full application router: protected API plus public redirect route.
pub fn create_test_app(state: AppState) -> Router {
    let api_router = protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/{shorthand}", get(redirect_handler))
        .nest("/api", api_router)
        .with_state(state)
}

/// Mints a token signed with [`TEST_SECRET`], carrying the same claims as
/// the original author tokens (no expiry).
pub fn mint_token() -> String {
    let claims = json!({ "userid": "johndoe", "realname": "John Doe" });

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}

/// Authorization header value for a freshly minted valid token.
pub fn bearer() -> String {
    format!("Bearer {}", mint_token())
}
