//! Application state shared across all handlers

use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Tax rate in basis points, fixed at process configuration time.
    pub tax_rate_bps: u32,
}

impl AppState {
    pub fn new(db: DatabaseConnection, tax_rate_bps: u32) -> Self {
        Self { db, tax_rate_bps }
    }
}

// Handlers that only touch storage can extract the connection directly.
impl FromRef<AppState> for DatabaseConnection {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}
