//! Field-keyed validation errors.
//!
//! Failures accumulate per field instead of aborting on the first problem,
//! so a bad create/update request comes back with everything that is wrong
//! with it in one structured body.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Maximum length for title and author name fields.
pub const MAX_TEXT_LENGTH: usize = 120;

/// Validation failures keyed by field name.
#[derive(Debug, Default, Serialize)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the accumulator, returning `Err` if anything was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.fields().collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

/// Checks a required bounded-length text field, recording failures.
pub fn check_required_text(errors: &mut ValidationErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, "This field is required.");
    } else if value.chars().count() > MAX_TEXT_LENGTH {
        errors.add(
            field,
            format!("Ensure this field has no more than {} characters.", MAX_TEXT_LENGTH),
        );
    }
}

/// Checks that a price, when present, is not negative.
pub fn check_price(errors: &mut ValidationErrors, field: &str, price: Option<i64>) {
    if let Some(p) = price
        && p < 0
    {
        errors.add(field, "Ensure this value is greater than or equal to 0.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_title_is_required() {
        let mut errors = ValidationErrors::new();
        check_required_text(&mut errors, "title", "   ");
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn overlong_title_is_rejected() {
        let mut errors = ValidationErrors::new();
        check_required_text(&mut errors, "title", &"x".repeat(121));
        assert!(!errors.is_empty());
    }

    #[test]
    fn max_length_title_passes() {
        let mut errors = ValidationErrors::new();
        check_required_text(&mut errors, "title", &"x".repeat(120));
        assert!(errors.is_empty());
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut errors = ValidationErrors::new();
        check_price(&mut errors, "price", Some(-1));
        assert!(!errors.is_empty());
    }

    #[test]
    fn absent_and_zero_prices_pass() {
        let mut errors = ValidationErrors::new();
        check_price(&mut errors, "price", None);
        check_price(&mut errors, "price", Some(0));
        assert!(errors.is_empty());
    }

    #[test]
    fn failures_accumulate_per_field() {
        let mut errors = ValidationErrors::new();
        check_required_text(&mut errors, "title", "");
        check_price(&mut errors, "price", Some(-5));
        let fields: Vec<&str> = errors.fields().collect();
        assert_eq!(fields, vec!["price", "title"]);
    }
}
