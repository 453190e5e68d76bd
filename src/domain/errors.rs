//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.
//! The API layer translates them into HTTP responses.

use std::fmt;

use super::validation::ValidationErrors;

#[derive(Debug)]
pub enum DomainError {
    /// Resource not found
    NotFound,
    /// Field-keyed validation failure
    Validation(ValidationErrors),
    /// Database/persistence error
    Database(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotFound => write!(f, "Resource not found"),
            DomainError::Validation(errors) => write!(f, "Validation error: {}", errors),
            DomainError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

// Conversion from SeaORM errors (used in the service layer)
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Database(e.to_string())
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        DomainError::Validation(errors)
    }
}
