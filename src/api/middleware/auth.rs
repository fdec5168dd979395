//! Bearer credential middleware.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::AppState};

/// Verifies the Bearer credential before any payload validation runs.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// The header is handed to
/// [`AuthService`](crate::application::services::AuthService) as-is;
/// absence, a wrong scheme, and a failing signature each produce a 403
/// with their own message. A header that is not valid UTF-8 is treated
/// the same as a malformed one.
///
/// Credential checks are unconditionally prioritized: this layer runs
/// and rejects before the handler ever sees the body.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = match req.headers().get(header::AUTHORIZATION) {
        None => None,
        Some(value) => Some(
            value
                .to_str()
                .map_err(|_| AppError::forbidden("Invalid credentials."))?,
        ),
    };

    st.auth_service.authorize(header)?;

    Ok(next.run(req).await)
}
