//! Route definitions for the HTTP API.

pub mod auth;
pub mod authors;
pub mod books;
pub mod health;

use axum::Router;

use bookshelf_core::response::CustomError;

use crate::state::AppState;

/// Build the complete router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(authors::routes(state.clone()))
        .merge(books::routes(state.clone()))
        .with_state(state)
}

/// Parse a path id segment; a non-numeric id reads as a missing record.
pub(crate) fn parse_id(raw: &str) -> Result<i64, CustomError> {
    raw.parse().map_err(|_| CustomError::not_found())
}
