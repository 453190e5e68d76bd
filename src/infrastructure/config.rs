use std::env;

use crate::domain::pricing::DEFAULT_TAX_RATE_BPS;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Consumption tax rate in basis points (1000 = 10%). Fixed for the
    /// lifetime of the process.
    pub tax_rate_bps: u32,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://bookstore.db?mode=rwc".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            tax_rate_bps: env::var("TAX_RATE_BPS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TAX_RATE_BPS),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_else(Vec::new),
        }
    }
}
