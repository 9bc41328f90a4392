//! Rule declarations
//!
//! A field declares its rules as a pipe-delimited list, each rule optionally
//! followed by colon-delimited parameters:
//!
//! ```
//! use encore_validation_core::RuleChain;
//!
//! let chain = RuleChain::parse("required:Email|email|maxLength:120");
//! assert_eq!(chain.len(), 3);
//! assert_eq!(chain.rules()[0].param(0), Some("Email"));
//! assert_eq!(chain.to_string(), "required:Email|email|maxLength:120");
//! ```

use crate::error::RuleError;
use crate::validator::Validator;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

const RULE_SEPARATOR: char = '|';
const PARAM_SEPARATOR: char = ':';

/// A single named validator with its ordered parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    #[serde(default)]
    pub params: Vec<String>,
}

impl Rule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.params.push(param.into());
        self
    }

    /// Parse one `name:param:param` token. Returns None for a blank token.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }

        let mut parts = token.split(PARAM_SEPARATOR);
        let name = parts.next()?.trim();
        if name.is_empty() {
            return None;
        }

        Some(Self {
            name: name.to_string(),
            params: parts.map(|p| p.trim().to_string()).collect(),
        })
    }

    /// Parameter at `index`, if present
    pub fn param(&self, index: usize) -> Option<&str> {
        self.params.get(index).map(String::as_str)
    }

    /// Parameter at `index`, treating an empty string as absent
    pub fn non_empty_param(&self, index: usize) -> Option<&str> {
        self.param(index).filter(|p| !p.is_empty())
    }

    /// The builtin validator this rule names, if any
    pub fn validator(&self) -> Option<Validator> {
        Validator::from_name(&self.name)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for param in &self.params {
            write!(f, "{}{}", PARAM_SEPARATOR, param)?;
        }
        Ok(())
    }
}

/// The ordered rules bound to one field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleChain(Vec<Rule>);

impl RuleChain {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self(rules)
    }

    /// Parse a `rule1:p1|rule2` declaration. Blank tokens are dropped.
    pub fn parse(declaration: &str) -> Self {
        Self(declaration.split(RULE_SEPARATOR).filter_map(Rule::parse).collect())
    }

    pub fn rules(&self) -> &[Rule] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the chain contains a rule with this name
    pub fn has_rule(&self, name: &str) -> bool {
        self.0.iter().any(|r| r.name == name)
    }

    /// Report declaration problems: unknown names and malformed parameters.
    ///
    /// Evaluation does not depend on this; a chain with problems still
    /// evaluates, skipping or relaxing the offending rules.
    pub fn lint(&self) -> Vec<RuleError> {
        self.0
            .iter()
            .filter_map(|rule| match rule.validator() {
                Some(validator) => validator.check_params(rule).err(),
                None => Some(RuleError::UnknownValidator(rule.name.clone())),
            })
            .collect()
    }
}

impl FromStr for RuleChain {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for RuleChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", RULE_SEPARATOR)?;
            }
            write!(f, "{}", rule)?;
        }
        Ok(())
    }
}

impl From<Vec<Rule>> for RuleChain {
    fn from(rules: Vec<Rule>) -> Self {
        Self(rules)
    }
}

impl<'a> IntoIterator for &'a RuleChain {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_rules_and_params() {
        let chain = RuleChain::parse("required|number:0:100|password:strong");
        assert_eq!(
            chain.rules(),
            &[
                Rule::new("required"),
                Rule::new("number").with_param("0").with_param("100"),
                Rule::new("password").with_param("strong"),
            ]
        );
    }

    #[test]
    fn test_blank_tokens_are_dropped() {
        let chain = RuleChain::parse(" required || email |");
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.rules()[1].name, "email");
        assert!(RuleChain::parse("").is_empty());
    }

    #[test]
    fn test_empty_params_are_kept_in_position() {
        let rule = Rule::parse("number::100").unwrap();
        assert_eq!(rule.param(0), Some(""));
        assert_eq!(rule.non_empty_param(0), None);
        assert_eq!(rule.non_empty_param(1), Some("100"));
    }

    #[test]
    fn test_display_matches_declaration() {
        let declaration = "required:Artist name|minLength:2|match:confirmPassword";
        assert_eq!(RuleChain::parse(declaration).to_string(), declaration);
    }

    #[test]
    fn test_lint_reports_problems() {
        let chain = RuleChain::parse("required|fancy|minLength:eight|match");
        let problems = chain.lint();
        assert_eq!(
            problems,
            vec![
                RuleError::UnknownValidator("fancy".to_string()),
                RuleError::InvalidParameter {
                    rule: "minLength".to_string(),
                    param: "eight".to_string(),
                    expected: "a non-negative integer",
                },
                RuleError::MissingParameter {
                    rule: "match".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_lint_accepts_well_formed_chain() {
        let chain = RuleChain::parse("required|email|number:0:|date:2024-01-01|password:weak");
        assert!(chain.lint().is_empty());
    }

    #[test]
    fn test_deserializes_from_rule_list() {
        let chain: RuleChain =
            serde_json::from_str(r#"[{"name":"minLength","params":["8"]},{"name":"email"}]"#)
                .unwrap();
        assert_eq!(chain.to_string(), "minLength:8|email");
    }
}
