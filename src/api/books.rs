use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::auth::Claims;
use crate::infrastructure::AppState;
use crate::services::book_service::{self, BookInput, BookPatch};

#[utoipa::path(
    get,
    path = "/api/books",
    responses(
        (status = 200, description = "All books with derived pricing fields")
    )
)]
pub async fn list_books(State(state): State<AppState>) -> Response {
    match book_service::list_books(&state.db, state.tax_rate_bps).await {
        Ok(books) => Json(json!({
            "books": books,
            "total": books.len()
        }))
        .into_response(),
        Err(e) => super::error_response("Book", e),
    }
}

#[utoipa::path(
    get,
    path = "/api/books/{id}",
    responses(
        (status = 200, description = "Single book"),
        (status = 404, description = "Unknown book id")
    )
)]
pub async fn get_book(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match book_service::get_book(&state.db, state.tax_rate_bps, &id).await {
        Ok(book) => Json(book).into_response(),
        Err(e) => super::error_response("Book", e),
    }
}

#[utoipa::path(
    post,
    path = "/api/books",
    responses(
        (status = 201, description = "Book created"),
        (status = 400, description = "Validation failure, field-keyed"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    _claims: Claims,
    Json(input): Json<BookInput>,
) -> Response {
    match book_service::create_book(&state.db, state.tax_rate_bps, input).await {
        Ok(book) => (StatusCode::CREATED, Json(book)).into_response(),
        Err(e) => super::error_response("Book", e),
    }
}

#[utoipa::path(
    put,
    path = "/api/books/{id}",
    responses(
        (status = 200, description = "Book replaced"),
        (status = 400, description = "Validation failure, field-keyed"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Unknown book id")
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    _claims: Claims,
    Json(input): Json<BookInput>,
) -> Response {
    match book_service::update_book(&state.db, state.tax_rate_bps, &id, input).await {
        Ok(book) => Json(book).into_response(),
        Err(e) => super::error_response("Book", e),
    }
}

#[utoipa::path(
    patch,
    path = "/api/books/{id}",
    responses(
        (status = 200, description = "Book partially updated"),
        (status = 400, description = "Validation failure, field-keyed"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Unknown book id")
    )
)]
pub async fn patch_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    _claims: Claims,
    Json(patch): Json<BookPatch>,
) -> Response {
    match book_service::patch_book(&state.db, state.tax_rate_bps, &id, patch).await {
        Ok(book) => Json(book).into_response(),
        Err(e) => super::error_response("Book", e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    responses(
        (status = 200, description = "Book deleted"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Unknown book id")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    _claims: Claims,
) -> Response {
    match book_service::delete_book(&state.db, &id).await {
        Ok(()) => Json(json!({ "message": "Book deleted successfully" })).into_response(),
        Err(e) => super::error_response("Book", e),
    }
}
