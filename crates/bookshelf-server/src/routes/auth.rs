//! Authentication routes: register and login.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::Response,
    routing::post,
};

use bookshelf_core::params::{TokenData, UserRequest};
use bookshelf_core::response::{CustomError, SuccessResponse};

use crate::error::{ApiResult, reply};
use crate::state::AppState;

/// POST /auth/register
async fn register(
    State(state): State<AppState>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(request) = payload.map_err(|_| CustomError::general())?;

    state.users().register(&request).await?;

    Ok(reply(SuccessResponse::created_message(
        "Success register users",
    )))
}

/// POST /auth/login
async fn login(
    State(state): State<AppState>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(request) = payload.map_err(|_| CustomError::general())?;

    let token: TokenData = state.users().login(&request).await?;

    Ok(reply(SuccessResponse::general_with(
        "Success login users",
        token,
    )))
}

/// Build auth routes. These are the only unprotected API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}
