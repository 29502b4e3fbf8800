//! Book CRUD routes, bearer-gated.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    middleware,
    response::Response,
    routing::get,
};

use bookshelf_core::params::BookRequest;
use bookshelf_core::response::{CustomError, SuccessResponse};

use crate::error::{ApiResult, reply};
use crate::middleware::check_auth;
use crate::routes::parse_id;
use crate::state::AppState;

/// GET /books/
async fn list_books(State(state): State<AppState>) -> ApiResult<Response> {
    let books = state.books().find_all().await?;

    Ok(reply(SuccessResponse::general_with(
        "Success get data books.",
        books,
    )))
}

/// GET /books/{id}
async fn find_book(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Response> {
    let id = parse_id(&id)?;
    let book = state.books().find_detail(id).await?;

    Ok(reply(SuccessResponse::general_with(
        "Success get data detail books.",
        book,
    )))
}

/// POST /books/
async fn create_book(
    State(state): State<AppState>,
    payload: Result<Json<BookRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(request) = payload.map_err(|_| CustomError::general())?;

    state.books().create(&request).await?;

    Ok(reply(SuccessResponse::created()))
}

/// PUT /books/{id}
async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<BookRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(request) = payload.map_err(|_| CustomError::general())?;
    let id = parse_id(&id)?;

    let book = state.books().update(id, &request).await?;

    Ok(reply(SuccessResponse::general_with(
        "Success update data books",
        book,
    )))
}

/// DELETE /books/{id}
async fn delete_book(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Response> {
    let id = parse_id(&id)?;
    state.books().delete(id).await?;

    Ok(reply(SuccessResponse::general()))
}

/// Build book routes behind the authorization gate.
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/books/", get(list_books).post(create_book))
        .route(
            "/books/{id}",
            get(find_book).put(update_book).delete(delete_book),
        )
        .route_layer(middleware::from_fn_with_state(state, check_auth))
}
