//! Author CRUD routes, bearer-gated.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    middleware,
    response::Response,
    routing::get,
};

use bookshelf_core::params::AuthorRequest;
use bookshelf_core::response::{CustomError, SuccessResponse};

use crate::error::{ApiResult, reply};
use crate::middleware::check_auth;
use crate::routes::parse_id;
use crate::state::AppState;

/// GET /authors/
async fn list_authors(State(state): State<AppState>) -> ApiResult<Response> {
    let authors = state.authors().find_all().await?;

    Ok(reply(SuccessResponse::general_with(
        "Success get data authors.",
        authors,
    )))
}

/// GET /authors/{id}
async fn find_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let id = parse_id(&id)?;
    let author = state.authors().find_detail(id).await?;

    Ok(reply(SuccessResponse::general_with(
        "Success get data detail authors.",
        author,
    )))
}

/// POST /authors/
async fn create_author(
    State(state): State<AppState>,
    payload: Result<Json<AuthorRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(request) = payload.map_err(|_| CustomError::general())?;

    state.authors().create(&request).await?;

    Ok(reply(SuccessResponse::created()))
}

/// PUT /authors/{id}
async fn update_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<AuthorRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(request) = payload.map_err(|_| CustomError::general())?;
    let id = parse_id(&id)?;

    let author = state.authors().update(id, &request).await?;

    Ok(reply(SuccessResponse::general_with(
        "Success update data authors",
        author,
    )))
}

/// DELETE /authors/{id}
async fn delete_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let id = parse_id(&id)?;
    state.authors().delete(id).await?;

    Ok(reply(SuccessResponse::general()))
}

/// Build author routes behind the authorization gate.
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/authors/", get(list_authors).post(create_author))
        .route(
            "/authors/{id}",
            get(find_author).put(update_author).delete(delete_author),
        )
        .route_layer(middleware::from_fn_with_state(state, check_auth))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::testing;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn app() -> (Router, String) {
        let state = testing::state();
        let token = state.tokens().generate(42).unwrap();
        let app = routes(state.clone()).with_state(state);
        (app, token)
    }

    fn authed(method: &str, uri: &str, token: &str, body: Option<&str>) -> Request<Body> {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("Authorization", format!("Bearer {token}"))
            .header("content-type", "application/json");
        builder
            .body(match body {
                Some(body) => Body::from(body.to_string()),
                None => Body::empty(),
            })
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn request_without_token_never_reaches_handler() {
        let (app, _) = app();
        let request = Request::builder()
            .method("GET")
            .uri("/authors/")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = body_json(response).await;
        assert_eq!(json["errors"], "len token must be 2");
    }

    #[tokio::test]
    async fn tampered_token_is_rejected() {
        let (app, _) = app();
        let foreign = crate::auth::TokenService::new("other-secret", 24)
            .generate(42)
            .unwrap();

        let response = app
            .oneshot(authed("GET", "/authors/", &foreign, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = body_json(response).await;
        assert_eq!(json["errors"], "invalid token signature");
    }

    #[tokio::test]
    async fn create_then_read_round_trips_birthdate() {
        let (app, token) = app();
        let created = app
            .clone()
            .oneshot(authed(
                "POST",
                "/authors/",
                &token,
                Some(r#"{"name": "Ursula K. Le Guin", "birthdate": "1985-04-05"}"#),
            ))
            .await
            .unwrap();
        assert_eq!(created.status(), StatusCode::CREATED);
        let json = body_json(created).await;
        assert_eq!(json["message"], "CREATED SUCCESS");

        let detail = app
            .oneshot(authed("GET", "/authors/1", &token, None))
            .await
            .unwrap();
        assert_eq!(detail.status(), StatusCode::OK);
        let json = body_json(detail).await;
        assert_eq!(json["message"], "Success get data detail authors.");
        assert_eq!(json["data"]["birthdate"], "1985-04-05");
    }

    #[tokio::test]
    async fn update_and_delete_envelopes() {
        let (app, token) = app();
        app.clone()
            .oneshot(authed(
                "POST",
                "/authors/",
                &token,
                Some(r#"{"name": "A", "birthdate": "1950-01-01"}"#),
            ))
            .await
            .unwrap();

        let updated = app
            .clone()
            .oneshot(authed(
                "PUT",
                "/authors/1",
                &token,
                Some(r#"{"name": "B", "birthdate": "1951-02-02"}"#),
            ))
            .await
            .unwrap();
        assert_eq!(updated.status(), StatusCode::OK);
        let json = body_json(updated).await;
        assert_eq!(json["message"], "Success update data authors");
        assert_eq!(json["data"]["name"], "B");

        let deleted = app
            .oneshot(authed("DELETE", "/authors/1", &token, None))
            .await
            .unwrap();
        assert_eq!(deleted.status(), StatusCode::OK);
        let json = body_json(deleted).await;
        assert_eq!(json["message"], "SUCCESS");
        assert!(json.get("data").is_none());
    }

    #[tokio::test]
    async fn non_numeric_id_reads_as_not_found() {
        let (app, token) = app();
        let response = app
            .oneshot(authed("GET", "/authors/abc", &token, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["message"], "NOT FOUND");
    }

    #[tokio::test]
    async fn malformed_body_is_general_error() {
        let (app, token) = app();
        let response = app
            .oneshot(authed("POST", "/authors/", &token, Some("{broken")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["message"], "GENERAL ERROR");
    }
}
