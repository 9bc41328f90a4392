//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";

// local@domain.tld with no whitespace and a single '@'
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Validates basic email format (`local@domain.tld`)
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Email rule: empty values pass, `required` owns emptiness
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() || is_valid_email(email) {
        Ok(())
    } else {
        Err(EMAIL_MESSAGE.to_string())
    }
}
