// File: src/field.rs
// Purpose: Field bindings and the transient per-field validation state

use encore_validation_core::{RuleChain, ValidationResult};

/// One input element and the rules declared for it.
///
/// Created when the form is bound and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBinding {
    /// Element id, also the key other fields use in `match:<id>`
    pub id: String,
    /// Submission name; several fields may share one
    pub name: String,
    pub rules: RuleChain,
}

impl FieldBinding {
    pub fn new(id: impl Into<String>, name: impl Into<String>, rules: RuleChain) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rules,
        }
    }

    /// Binding whose submission name equals its id
    pub fn named(id: impl Into<String>, declaration: &str) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            rules: RuleChain::parse(declaration),
        }
    }
}

/// Validation status of one field as last shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    /// Set on the first loss of focus; cleared only by a form reset
    pub touched: bool,
    /// Whether the rule chain has run since binding or the last reset
    pub evaluated: bool,
    pub valid: bool,
    pub last_message: String,
}

impl Default for FieldState {
    fn default() -> Self {
        Self {
            touched: false,
            evaluated: false,
            valid: true,
            last_message: String::new(),
        }
    }
}

impl FieldState {
    /// Fresh state for an evaluation outcome
    pub fn from_result(touched: bool, result: &ValidationResult) -> Self {
        Self {
            touched,
            evaluated: true,
            valid: result.valid,
            last_message: result.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_binding() {
        let binding = FieldBinding::named("email", "required|email");
        assert_eq!(binding.name, "email");
        assert_eq!(binding.rules.len(), 2);
    }

    #[test]
    fn test_state_from_result() {
        let state = FieldState::from_result(true, &ValidationResult::fail("Too short"));
        assert!(state.touched);
        assert!(!state.valid);
        assert_eq!(state.last_message, "Too short");
        assert!(state.evaluated);

        let fresh = FieldState::default();
        assert!(fresh.valid);
        assert!(!fresh.evaluated);
    }
}
