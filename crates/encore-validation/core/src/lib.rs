//! Encore Validation Core
//!
//! Declarative rule-chain validation used by Encore's profile, collaboration
//! and wallet forms. A field declares its rules as `rule1:param|rule2`, the
//! chain evaluator runs them left to right and reports the first failure.
//!
//! Used by both the form binder (`encore-forms`) and the WASM bindings.

pub mod chain;
pub mod date;
pub mod email;
pub mod error;
pub mod file;
pub mod numeric;
pub mod password;
pub mod result;
pub mod rule;
pub mod string;
pub mod validator;

pub use chain::{evaluate_chain, FieldLookup, NoFields};
pub use error::RuleError;
pub use file::{validate_file, FileInfo, FileRules};
pub use password::PasswordStrength;
pub use result::ValidationResult;
pub use rule::{Rule, RuleChain};
pub use validator::Validator;
