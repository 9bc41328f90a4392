//! String validation functions
//!
//! Every function here except `validate_required` lets an empty value pass.

use url::Url;

pub const PHONE_MESSAGE: &str = "Please enter a valid phone number";
pub const URL_MESSAGE: &str = "Please enter a valid URL (e.g., https://example.com)";

const PHONE_MIN_DIGITS: usize = 10;
const PHONE_MAX_DIGITS: usize = 15;

/// Value must be non-empty
pub fn validate_required(value: &str, label: Option<&str>) -> Result<(), String> {
    if !value.is_empty() {
        return Ok(());
    }
    Err(format!("{} is required", label.unwrap_or("This field")))
}

/// Validates minimum length, counted in characters
pub fn validate_min_length(s: &str, min: usize) -> Result<(), String> {
    if s.is_empty() || s.chars().count() >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {} characters", min))
    }
}

/// Validates maximum length, counted in characters
pub fn validate_max_length(s: &str, max: usize) -> Result<(), String> {
    if s.is_empty() || s.chars().count() <= max {
        Ok(())
    } else {
        Err(format!("Must not exceed {} characters", max))
    }
}

/// Phone numbers are checked by digit count only; punctuation and spaces are ignored
pub fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits)
}

pub fn validate_phone(phone: &str) -> Result<(), String> {
    if phone.is_empty() || is_valid_phone(phone) {
        Ok(())
    } else {
        Err(PHONE_MESSAGE.to_string())
    }
}

/// URL validation: must parse as an absolute URL
pub fn is_valid_url(url: &str) -> bool {
    Url::parse(url).is_ok()
}

pub fn validate_url(url: &str) -> Result<(), String> {
    if url.is_empty() || is_valid_url(url) {
        Ok(())
    } else {
        Err(URL_MESSAGE.to_string())
    }
}
