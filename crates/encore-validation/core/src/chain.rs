//! Chain evaluator
//!
//! Runs a field's rules left to right against its value and stops at the
//! first failure. Rules naming an unknown validator are skipped.

use crate::result::ValidationResult;
use crate::rule::RuleChain;
use std::collections::{BTreeMap, HashMap};

/// Read access to the live values of other fields, by field id.
///
/// Only the `match` rule consults it; the value is resolved at evaluation
/// time, so a chain never holds on to the field it compares against.
pub trait FieldLookup {
    fn field_value(&self, field_id: &str) -> Option<&str>;
}

/// Lookup for contexts without a surrounding form
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFields;

impl FieldLookup for NoFields {
    fn field_value(&self, _field_id: &str) -> Option<&str> {
        None
    }
}

impl FieldLookup for HashMap<String, String> {
    fn field_value(&self, field_id: &str) -> Option<&str> {
        self.get(field_id).map(String::as_str)
    }
}

impl FieldLookup for BTreeMap<String, String> {
    fn field_value(&self, field_id: &str) -> Option<&str> {
        self.get(field_id).map(String::as_str)
    }
}

impl<T: FieldLookup + ?Sized> FieldLookup for &T {
    fn field_value(&self, field_id: &str) -> Option<&str> {
        (**self).field_value(field_id)
    }
}

/// Evaluate `chain` against `value`.
///
/// `value` is expected to be trimmed already. Returns the first failing
/// rule's result, or a passing result when every known rule passes (including
/// the empty chain).
pub fn evaluate_chain(value: &str, chain: &RuleChain, lookup: &dyn FieldLookup) -> ValidationResult {
    for rule in chain {
        let Some(validator) = rule.validator() else {
            tracing::warn!(rule = %rule.name, "unknown validator, skipping rule");
            continue;
        };

        let result = validator.evaluate(rule, value, lookup);
        if !result.is_valid() {
            tracing::debug!(rule = %rule, message = %result.message, "rule failed");
            return result;
        }
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn check(declaration: &str, value: &str) -> ValidationResult {
        evaluate_chain(value, &RuleChain::parse(declaration), &NoFields)
    }

    #[test]
    fn test_empty_chain_passes() {
        assert_eq!(check("", "anything"), ValidationResult::ok());
    }

    #[test]
    fn test_stops_at_first_failure() {
        // both rules fail on "ab"; only the first message surfaces
        let result = check("minLength:8|email", "ab");
        assert_eq!(result, ValidationResult::fail("Must be at least 8 characters"));

        let result = check("email|minLength:8", "ab");
        assert_eq!(result, ValidationResult::fail("Please enter a valid email address"));
    }

    #[test]
    fn test_required_before_format() {
        let result = check("required:Email|email", "");
        assert_eq!(result.message, "Email is required");
    }

    #[test]
    fn test_empty_value_skips_optional_rules() {
        assert!(check("email|phone|url|minLength:3|number:1:2", "").is_valid());
    }

    #[test]
    fn test_unknown_validator_is_skipped() {
        assert!(check("shout|minLength:2", "abc").is_valid());
        assert_eq!(check("shout|minLength:5", "abc").message, "Must be at least 5 characters");
    }

    #[test]
    fn test_all_rules_pass() {
        assert!(check("required|email|maxLength:64", "booking@venue.com").is_valid());
    }

    #[test]
    fn test_match_uses_lookup() {
        let mut fields = HashMap::new();
        fields.insert("password".to_string(), "Abcdefg1".to_string());
        let chain = RuleChain::parse("required|match:password");

        assert!(evaluate_chain("Abcdefg1", &chain, &fields).is_valid());
        assert_eq!(
            evaluate_chain("Abcdefg2", &chain, &fields).message,
            "Fields do not match"
        );
    }
}
