pub mod errors;
pub mod pricing;
pub mod validation;

pub use errors::DomainError;
pub use validation::ValidationErrors;
