//! Password validation functions

use serde::{Deserialize, Serialize};

/// Password strength tiers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    /// 6+ characters
    Weak,
    /// 8+ chars with uppercase, lowercase, and digit
    #[default]
    Medium,
    /// 12+ chars with uppercase, lowercase, digit, and symbol
    Strong,
}

impl PasswordStrength {
    /// Parse a strength tier name
    ///
    /// # Examples
    /// ```
    /// use encore_validation_core::PasswordStrength;
    /// assert_eq!(PasswordStrength::parse("weak"), Some(PasswordStrength::Weak));
    /// assert_eq!(PasswordStrength::parse("strong"), Some(PasswordStrength::Strong));
    /// assert_eq!(PasswordStrength::parse("extreme"), None);
    /// ```
    pub fn parse(tier: &str) -> Option<Self> {
        match tier {
            "weak" => Some(PasswordStrength::Weak),
            "medium" => Some(PasswordStrength::Medium),
            "strong" => Some(PasswordStrength::Strong),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "weak",
            PasswordStrength::Medium => "medium",
            PasswordStrength::Strong => "strong",
        }
    }

    pub fn min_length(&self) -> usize {
        match self {
            PasswordStrength::Weak => 6,
            PasswordStrength::Medium => 8,
            PasswordStrength::Strong => 12,
        }
    }

    /// Message shown when a password does not meet this tier
    pub fn message(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Password must be at least 6 characters",
            PasswordStrength::Medium => {
                "Password must be at least 8 characters and include uppercase, lowercase, and a number"
            }
            PasswordStrength::Strong => {
                "Password must be at least 12 characters and include uppercase, lowercase, a number, and a special character"
            }
        }
    }

    /// Whether `password` satisfies this tier
    pub fn accepts(&self, password: &str) -> bool {
        if password.chars().count() < self.min_length() {
            return false;
        }

        let has_uppercase = password.chars().any(|c| c.is_uppercase());
        let has_lowercase = password.chars().any(|c| c.is_lowercase());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        let has_symbol = password
            .chars()
            .any(|c| !c.is_alphanumeric() && !c.is_whitespace());

        match self {
            PasswordStrength::Weak => true,
            PasswordStrength::Medium => has_uppercase && has_lowercase && has_digit,
            PasswordStrength::Strong => has_uppercase && has_lowercase && has_digit && has_symbol,
        }
    }
}

/// Validates a password against a strength tier. Empty passwords pass.
pub fn validate_password(password: &str, strength: PasswordStrength) -> Result<(), String> {
    if password.is_empty() || strength.accepts(password) {
        Ok(())
    } else {
        Err(strength.message().to_string())
    }
}
