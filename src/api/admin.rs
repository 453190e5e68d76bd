//! Admin changelist metadata for books.
//!
//! The rendering UI is external; this endpoint only surfaces which fields
//! are listed, how they are ordered, and which are read-only, together with
//! the rows projected to the listed columns.

use axum::{Json, extract::State, response::{IntoResponse, Response}};
use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::auth::Claims;
use crate::services::book_service;

#[utoipa::path(
    get,
    path = "/api/admin/books",
    responses(
        (status = 200, description = "Changelist rows and display hints"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn book_changelist(
    State(db): State<DatabaseConnection>,
    _claims: Claims,
) -> Response {
    let models = match book_service::list_books_for_admin(&db).await {
        Ok(models) => models,
        Err(e) => return super::error_response("Book", e),
    };

    let rows: Vec<serde_json::Value> = models
        .iter()
        .map(|b| {
            json!({
                "title": b.title,
                "price": b.price,
                "created_at": b.created_at,
            })
        })
        .collect();

    Json(json!({
        "model": "book",
        "list_display": ["title", "price", "created_at"],
        "ordering": ["-created_at"],
        "readonly_fields": ["id", "created_at"],
        "rows": rows,
        "total": rows.len()
    }))
    .into_response()
}
