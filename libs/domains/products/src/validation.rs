//! Pure field checks applied before a product reaches the repository.
//!
//! Uniqueness of `code_value` is deliberately not checked here; that needs
//! the stored state and belongs to the repository.

use chrono::NaiveDate;
use validator::ValidationError;

use crate::error::{ProductError, ProductResult};

/// Wire layout for product expiration dates.
pub const DATE_LAYOUT: &str = "%Y-%m-%d";

/// Validator rule for expiration fields: the value must parse under
/// [`DATE_LAYOUT`].
pub fn validate_expiration(value: &str) -> Result<(), ValidationError> {
    if NaiveDate::parse_from_str(value, DATE_LAYOUT).is_ok() {
        Ok(())
    } else {
        let mut error = ValidationError::new("expiration");
        error.message = Some("must be a date in YYYY-MM-DD form".into());
        Err(error)
    }
}

/// Parse an expiration string into a calendar date.
pub fn parse_expiration(value: &str) -> ProductResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_LAYOUT).map_err(|_| {
        ProductError::Validation(format!(
            "expiration '{}' must be a date in YYYY-MM-DD form",
            value
        ))
    })
}
