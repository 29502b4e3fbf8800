//! Transport-boundary conversion for the response envelopes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use bookshelf_core::response::{CustomError, SuccessResponse};

/// Wrapper carrying a [`CustomError`] out of a handler.
///
/// Handlers return `ApiResult` so `?` on a service call converts the
/// error envelope in one place.
#[derive(Debug)]
pub struct ApiError(pub CustomError);

impl From<CustomError> for ApiError {
    fn from(err: CustomError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.0)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Render a success envelope with its own status code.
pub fn reply<T: Serialize>(body: SuccessResponse<T>) -> Response {
    let status =
        StatusCode::from_u16(body.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(body)).into_response()
}
