//! Single-value rules: a check paired with the message it reports

use crate::email::is_valid_email;
use crate::numeric::{is_at_least, is_at_most};
use crate::string::{has_min_length, is_valid_url, matches_pattern};
use crate::value::Coerced;
use regex::Regex;

/// What a rule tests
///
/// Text checks pass on non-text values and numeric checks pass on non-numbers;
/// the owning field's kind decides which one a value reaches.
#[derive(Debug, Clone)]
pub enum Check {
    Email,
    MinLength(usize),
    Pattern(Regex),
    Url,
    Min(f64),
    Max(f64),
    IsTrue,
}

/// A check and the message reported when it fails
#[derive(Debug, Clone)]
pub struct Rule {
    check: Check,
    message: String,
}

impl Rule {
    pub fn new(check: Check, message: impl Into<String>) -> Self {
        Self {
            check,
            message: message.into(),
        }
    }

    pub fn email(message: impl Into<String>) -> Self {
        Self::new(Check::Email, message)
    }

    pub fn min_length(min: usize, message: impl Into<String>) -> Self {
        Self::new(Check::MinLength(min), message)
    }

    /// Compile `pattern` into a rule; fails on invalid regex syntax
    pub fn pattern(pattern: &str, message: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self::new(Check::Pattern(Regex::new(pattern)?), message))
    }

    pub fn matches(regex: Regex, message: impl Into<String>) -> Self {
        Self::new(Check::Pattern(regex), message)
    }

    pub fn url(message: impl Into<String>) -> Self {
        Self::new(Check::Url, message)
    }

    pub fn min(min: f64, message: impl Into<String>) -> Self {
        Self::new(Check::Min(min), message)
    }

    pub fn max(max: f64, message: impl Into<String>) -> Self {
        Self::new(Check::Max(max), message)
    }

    pub fn is_true(message: impl Into<String>) -> Self {
        Self::new(Check::IsTrue, message)
    }

    pub fn check(&self) -> &Check {
        &self.check
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Apply the rule to a present, coerced value
    pub fn evaluate(&self, value: &Coerced) -> Result<(), String> {
        let passed = match (&self.check, value) {
            (Check::Email, Coerced::Text(s)) => is_valid_email(s),
            (Check::MinLength(min), Coerced::Text(s)) => has_min_length(s, *min),
            (Check::Pattern(re), Coerced::Text(s)) => matches_pattern(s, re),
            (Check::Url, Coerced::Text(s)) => is_valid_url(s),
            (Check::Min(min), Coerced::Number(n)) => is_at_least(*n, *min),
            (Check::Max(max), Coerced::Number(n)) => is_at_most(*n, *max),
            (Check::IsTrue, Coerced::Bool(b)) => *b,
            _ => true,
        };

        if passed {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }
}
