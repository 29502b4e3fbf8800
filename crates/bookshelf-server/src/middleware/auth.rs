//! Authorization gate for protected routes.
//!
//! Extracts the `Authorization` header, requires the literal form
//! `Bearer <token>`, and verifies the token before any protected
//! handler runs. On success the decoded identity is attached to the
//! request extensions; on any failure the request is answered with an
//! unauthorized envelope and never reaches a handler.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};

use bookshelf_core::response::CustomError;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated user id attached to the request extensions for
/// downstream handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthId(pub i64);

/// Split the header on `"Bearer "`; anything other than exactly two
/// segments is rejected.
fn bearer_token(header: &str) -> Result<&str, CustomError> {
    let segments: Vec<&str> = header.split("Bearer ").collect();
    if segments.len() != 2 {
        return Err(CustomError::unauthorized_with_info("len token must be 2"));
    }
    Ok(segments[1])
}

/// Middleware gating the author and book routes.
pub async fn check_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let header_value = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    let token = match bearer_token(&header_value) {
        Ok(token) => token,
        Err(err) => return ApiError::from(err).into_response(),
    };

    match state.tokens().validate(token) {
        Ok(claims) => {
            request.extensions_mut().insert(AuthId(claims.auth_id));
            next.run(request).await
        }
        Err(err) => {
            tracing::debug!(error = %err, "Rejected bearer token");
            ApiError::from(CustomError::unauthorized_with_info(err.to_string())).into_response()
        }
    }
}
