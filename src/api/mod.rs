pub mod admin;
pub mod auth;
pub mod author;
pub mod books;
pub mod health;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;

use crate::domain::DomainError;
use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Auth
        .route("/auth/login", post(auth::login))
        .route("/auth/register", post(auth::register))
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .patch(books::patch_book)
                .delete(books::delete_book),
        )
        // Authors
        .route(
            "/authors",
            get(author::list_authors).post(author::create_author),
        )
        .route(
            "/authors/:id",
            get(author::get_author).delete(author::delete_author),
        )
        // Admin changelist
        .route("/admin/books", get(admin::book_changelist))
        .with_state(state)
}

/// Translate a domain failure into the client-facing error response.
pub(crate) fn error_response(resource: &str, e: DomainError) -> Response {
    match e {
        DomainError::NotFound => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("{} not found", resource) })),
        )
            .into_response(),
        DomainError::Validation(errors) => {
            (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
        }
        DomainError::Database(msg) => {
            tracing::error!("Database error: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error" })),
            )
                .into_response()
        }
    }
}
