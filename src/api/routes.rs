//! API route configuration.
//!
//! All API endpoints require Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::create_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// All API routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `POST /create` - Create a shortened link
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/create", post(create_handler))
}
