//! Handler for shorthand redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a shorthand to its original URL.
///
/// # Endpoint
///
/// `GET /{shorthand}` (public)
///
/// Issues a `302 Found` with the stored URL in the `Location` header.
///
/// # Errors
///
/// Returns 404 Not Found with a JSON error body if the shorthand is
/// unknown.
pub async fn redirect_handler(
    Path(shorthand): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let target_url = state.link_service.resolve(&shorthand).await?;

    debug!(%shorthand, %target_url, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, target_url)]))
}
