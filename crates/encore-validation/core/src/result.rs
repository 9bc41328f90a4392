//! Outcome of evaluating a rule (or a whole chain) against one value

use serde::{Deserialize, Serialize};

/// Result of validating one value
///
/// `message` is only meaningful when `valid` is false; passing results carry
/// an empty message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
}

impl ValidationResult {
    /// A passing result
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    /// A failing result with the message shown to the user
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The failure message, if any
    pub fn error(&self) -> Option<&str> {
        if self.valid {
            None
        } else {
            Some(&self.message)
        }
    }

    /// Convert from the `Result<(), String>` shape the validator functions return
    pub fn from_result(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Self::ok(),
            Err(message) => Self::fail(message),
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}
