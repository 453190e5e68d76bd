use crate::auth::Claims;
use crate::domain::validation::{ValidationErrors, check_required_text};
use crate::models::author::{self, Entity as Author};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::*;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct CreateAuthorRequest {
    name: String,
}

#[utoipa::path(
    get,
    path = "/api/authors",
    responses(
        (status = 200, description = "All authors")
    )
)]
pub async fn list_authors(State(db): State<DatabaseConnection>) -> Response {
    match Author::find().all(&db).await {
        Ok(authors) => (StatusCode::OK, Json(authors)).into_response(),
        Err(e) => super::error_response("Author", e.into()),
    }
}

#[utoipa::path(
    post,
    path = "/api/authors",
    responses(
        (status = 201, description = "Author created"),
        (status = 400, description = "Validation failure, field-keyed"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn create_author(
    State(db): State<DatabaseConnection>,
    _claims: Claims,
    Json(payload): Json<CreateAuthorRequest>,
) -> Response {
    let mut errors = ValidationErrors::new();
    check_required_text(&mut errors, "name", &payload.name);
    if let Err(errors) = errors.into_result() {
        return (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response();
    }

    let new_author = author::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        name: Set(payload.name.trim().to_string()),
    };

    match new_author.insert(&db).await {
        Ok(model) => (StatusCode::CREATED, Json(model)).into_response(),
        Err(e) => super::error_response("Author", e.into()),
    }
}

#[utoipa::path(
    get,
    path = "/api/authors/{id}",
    responses(
        (status = 200, description = "Single author"),
        (status = 404, description = "Unknown author id")
    )
)]
pub async fn get_author(State(db): State<DatabaseConnection>, Path(id): Path<String>) -> Response {
    match Author::find_by_id(id.as_str()).one(&db).await {
        Ok(Some(model)) => (StatusCode::OK, Json(model)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Author not found" })),
        )
            .into_response(),
        Err(e) => super::error_response("Author", e.into()),
    }
}

#[utoipa::path(
    delete,
    path = "/api/authors/{id}",
    responses(
        (status = 200, description = "Author deleted"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Unknown author id")
    )
)]
pub async fn delete_author(
    State(db): State<DatabaseConnection>,
    Path(id): Path<String>,
    _claims: Claims,
) -> Response {
    let found = match Author::find_by_id(id.as_str()).one(&db).await {
        Ok(found) => found,
        Err(e) => return super::error_response("Author", e.into()),
    };

    match found {
        Some(model) => match model.delete(&db).await {
            Ok(_) => Json(json!({ "message": "Author deleted" })).into_response(),
            Err(e) => super::error_response("Author", e.into()),
        },
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Author not found" })),
        )
            .into_response(),
    }
}
