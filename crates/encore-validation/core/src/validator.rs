//! Rule registry
//!
//! The builtin validators form a closed set. A rule's name resolves to a
//! `Validator` variant and each variant dispatches to the matching validation
//! function with the rule's parameters.

use crate::chain::FieldLookup;
use crate::date::{parse_date, validate_date};
use crate::email::validate_email;
use crate::error::RuleError;
use crate::numeric::{parse_number, validate_number};
use crate::password::{validate_password, PasswordStrength};
use crate::result::ValidationResult;
use crate::rule::Rule;
use crate::string::{
    validate_max_length, validate_min_length, validate_phone, validate_required, validate_url,
};
use std::fmt;

pub const MATCH_MESSAGE: &str = "Fields do not match";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Validator {
    Required,
    Email,
    Phone,
    Url,
    MinLength,
    MaxLength,
    Number,
    Date,
    Password,
    Match,
}

impl Validator {
    pub const ALL: [Validator; 10] = [
        Validator::Required,
        Validator::Email,
        Validator::Phone,
        Validator::Url,
        Validator::MinLength,
        Validator::MaxLength,
        Validator::Number,
        Validator::Date,
        Validator::Password,
        Validator::Match,
    ];

    /// Resolve a declared rule name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "required" => Some(Validator::Required),
            "email" => Some(Validator::Email),
            "phone" => Some(Validator::Phone),
            "url" => Some(Validator::Url),
            "minLength" => Some(Validator::MinLength),
            "maxLength" => Some(Validator::MaxLength),
            "number" => Some(Validator::Number),
            "date" => Some(Validator::Date),
            "password" => Some(Validator::Password),
            "match" => Some(Validator::Match),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Validator::Required => "required",
            Validator::Email => "email",
            Validator::Phone => "phone",
            Validator::Url => "url",
            Validator::MinLength => "minLength",
            Validator::MaxLength => "maxLength",
            Validator::Number => "number",
            Validator::Date => "date",
            Validator::Password => "password",
            Validator::Match => "match",
        }
    }

    /// Evaluate this validator against a (trimmed) value.
    ///
    /// Only `required` fails on an empty value. Malformed parameters never
    /// fail a value; they make the affected check inert.
    pub fn evaluate(&self, rule: &Rule, value: &str, lookup: &dyn FieldLookup) -> ValidationResult {
        let outcome = match self {
            Validator::Required => validate_required(value, rule.non_empty_param(0)),
            Validator::Email => validate_email(value),
            Validator::Phone => validate_phone(value),
            Validator::Url => validate_url(value),
            Validator::MinLength => match length_param(rule) {
                Some(min) => validate_min_length(value, min),
                None => Ok(()),
            },
            Validator::MaxLength => match length_param(rule) {
                Some(max) => validate_max_length(value, max),
                None => Ok(()),
            },
            Validator::Number => {
                validate_number(value, rule.non_empty_param(0), rule.non_empty_param(1))
            }
            Validator::Date => validate_date(value, rule.non_empty_param(0), rule.non_empty_param(1)),
            Validator::Password => {
                let strength = rule
                    .non_empty_param(0)
                    .and_then(PasswordStrength::parse)
                    .unwrap_or_default();
                validate_password(value, strength)
            }
            Validator::Match => validate_match(value, rule.non_empty_param(0), lookup),
        };

        ValidationResult::from_result(outcome)
    }

    /// Check a rule's parameters without evaluating anything
    pub fn check_params(&self, rule: &Rule) -> Result<(), RuleError> {
        match self {
            Validator::Required | Validator::Email | Validator::Phone | Validator::Url => Ok(()),
            Validator::MinLength | Validator::MaxLength => {
                let param = required_param(rule)?;
                param
                    .parse::<usize>()
                    .map(|_| ())
                    .map_err(|_| invalid(rule, param, "a non-negative integer"))
            }
            Validator::Number => {
                for param in rule.params.iter().filter(|p| !p.is_empty()) {
                    if parse_number(param).is_none() {
                        return Err(invalid(rule, param, "a number"));
                    }
                }
                Ok(())
            }
            Validator::Date => {
                for param in rule.params.iter().filter(|p| !p.is_empty()) {
                    if parse_date(param).is_none() {
                        return Err(invalid(rule, param, "a YYYY-MM-DD date"));
                    }
                }
                Ok(())
            }
            Validator::Password => match rule.non_empty_param(0) {
                Some(tier) if PasswordStrength::parse(tier).is_none() => {
                    Err(invalid(rule, tier, "weak, medium or strong"))
                }
                _ => Ok(()),
            },
            Validator::Match => required_param(rule).map(|_| ()),
        }
    }
}

impl fmt::Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Message for a `match` rule whose target cannot be resolved
pub fn match_configuration_message(target: &str) -> String {
    format!("Validation configuration error: field '{}' not found", target)
}

fn validate_match(value: &str, target: Option<&str>, lookup: &dyn FieldLookup) -> Result<(), String> {
    if value.is_empty() {
        return Ok(());
    }

    let target = target.unwrap_or_default();
    match lookup.field_value(target) {
        Some(other) if other.trim() == value => Ok(()),
        Some(_) => Err(MATCH_MESSAGE.to_string()),
        None => {
            tracing::warn!(target_field = target, "match rule references a missing field");
            Err(match_configuration_message(target))
        }
    }
}

fn length_param(rule: &Rule) -> Option<usize> {
    let parsed = rule.param(0).and_then(|p| p.parse::<usize>().ok());
    if parsed.is_none() {
        tracing::debug!(rule = %rule, "length rule without a usable bound, skipping");
    }
    parsed
}

fn required_param(rule: &Rule) -> Result<&str, RuleError> {
    rule.non_empty_param(0).ok_or_else(|| RuleError::MissingParameter {
        rule: rule.name.clone(),
    })
}

fn invalid(rule: &Rule, param: &str, expected: &'static str) -> RuleError {
    RuleError::InvalidParameter {
        rule: rule.name.clone(),
        param: param.to_string(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::NoFields;
    use std::collections::HashMap;

    fn eval(declaration: &str, value: &str) -> ValidationResult {
        let rule = Rule::parse(declaration).unwrap();
        rule.validator().unwrap().evaluate(&rule, value, &NoFields)
    }

    #[test]
    fn test_names_round_trip() {
        for validator in Validator::ALL {
            assert_eq!(Validator::from_name(validator.name()), Some(validator));
        }
        assert_eq!(Validator::from_name("MinLength"), None);
        assert_eq!(Validator::from_name("creditCard"), None);
    }

    #[test]
    fn test_only_required_fails_empty() {
        let declarations = [
            "email",
            "phone",
            "url",
            "minLength:8",
            "maxLength:2",
            "number:1:5",
            "date:2024-01-01",
            "password:strong",
            "match:other",
        ];
        for declaration in declarations {
            assert!(eval(declaration, "").is_valid(), "{} failed on empty", declaration);
        }
        assert!(!eval("required", "").is_valid());
    }

    #[test]
    fn test_required_label() {
        assert_eq!(eval("required", "").message, "This field is required");
        assert_eq!(eval("required:Genre", "").message, "Genre is required");
    }

    #[test]
    fn test_min_length() {
        assert_eq!(eval("minLength:8", "abcdefg").message, "Must be at least 8 characters");
        assert!(eval("minLength:8", "abcdefgh").is_valid());
    }

    #[test]
    fn test_malformed_length_is_permissive() {
        assert!(eval("minLength:eight", "a").is_valid());
        assert!(eval("maxLength", "a very long value").is_valid());
    }

    #[test]
    fn test_password_tiers() {
        assert!(!eval("password:medium", "abcdefg1").is_valid());
        assert!(eval("password:medium", "Abcdefg1").is_valid());
        assert!(!eval("password:strong", "Abcdefg1").is_valid());
        // no tier and unknown tier both fall back to medium
        assert!(eval("password", "Abcdefg1").is_valid());
        assert!(!eval("password:extreme", "abcdefg1").is_valid());
    }

    #[test]
    fn test_number_bounds() {
        assert_eq!(eval("number:0:100", "150").message, "Must not exceed 100");
        assert!(eval("number:0:100", "50").is_valid());
    }

    #[test]
    fn test_match() {
        let mut fields = HashMap::new();
        fields.insert("confirmPassword".to_string(), "Secret123".to_string());
        let rule = Rule::parse("match:confirmPassword").unwrap();

        let differs = Validator::Match.evaluate(&rule, "Secret124", &fields);
        assert_eq!(differs.message, MATCH_MESSAGE);

        let same = Validator::Match.evaluate(&rule, "Secret123", &fields);
        assert!(same.is_valid());
    }

    #[test]
    fn test_match_missing_target_is_configuration_error() {
        let result = eval("match:ghost", "value");
        assert!(!result.is_valid());
        assert_eq!(result.message, match_configuration_message("ghost"));
        assert_ne!(result.message, MATCH_MESSAGE);
    }

    #[test]
    fn test_check_params() {
        let rule = Rule::parse("number:1:x").unwrap();
        assert!(matches!(
            Validator::Number.check_params(&rule),
            Err(RuleError::InvalidParameter { .. })
        ));
        let rule = Rule::parse("date::2030-01-01").unwrap();
        assert!(Validator::Date.check_params(&rule).is_ok());
    }
}
