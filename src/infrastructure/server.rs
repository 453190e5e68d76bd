// Server module - reusable router assembly shared by main.rs and tests

use axum::Router;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};

use crate::api;
use crate::infrastructure::AppState;

/// Build the API router with database connection and configured tax rate
pub fn build_router(db: DatabaseConnection, tax_rate_bps: u32) -> Router {
    let state = AppState::new(db, tax_rate_bps);
    let api_router = api::api_router(state);

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new().nest("/api", api_router).layer(cors)
}
