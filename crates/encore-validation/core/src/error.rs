//! Configuration problems found in a rule declaration

use thiserror::Error;

/// A problem with how a rule chain was declared
///
/// These never stop evaluation. The evaluator skips unknown validators and
/// treats unparsable bounds as absent; `RuleChain::lint` surfaces them so the
/// binder can log them once, when the form is set up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("unknown validator '{0}'")]
    UnknownValidator(String),

    #[error("validator '{rule}' requires a parameter")]
    MissingParameter { rule: String },

    #[error("validator '{rule}' has invalid parameter '{param}' (expected {expected})")]
    InvalidParameter {
        rule: String,
        param: String,
        expected: &'static str,
    },
}
