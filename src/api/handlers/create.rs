//! Handler for link creation.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header},
};

use crate::api::dto::{CreateRequest, CreateResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened link.
///
/// # Endpoint
///
/// `POST /api/create` (Bearer token required, enforced by the auth layer)
///
/// # Request Body
///
/// ```json
/// {
///   "original_url": "https://example.com/a",
///   "shorthand": "my-link"   // optional
/// }
/// ```
///
/// The body is read raw and parsed leniently: an unparseable body is
/// treated as an empty request, so the validator reports the missing
/// field instead of a generic parse error. The declared `Content-Type`
/// is checked by the validation pipeline, which needs it as its first
/// ordered check, so the `Json` extractor is deliberately not used here.
///
/// # Responses
///
/// - `201` `{"shorthand": "..."}` on success
/// - `415` when the content type is not `application/json`
/// - `400` when `original_url` is missing or empty
/// - `409` when the supplied shorthand is already taken
pub async fn create_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<CreateResponse>), AppError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());

    let payload: CreateRequest = serde_json::from_slice(&body).unwrap_or_default();

    let shorthand = state
        .link_service
        .create_link(content_type, payload.original_url, payload.shorthand)
        .await?;

    Ok((StatusCode::CREATED, Json(CreateResponse { shorthand })))
}
