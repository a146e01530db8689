//! Comparator tokens recognized in requirement strings

use std::fmt;
use thiserror::Error;

/// Closed set of comparator tokens for requirement parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Exact match (=)
    Equal,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
    /// Caret shorthand (^): flexible minor and patch
    Caret,
    /// Tilde shorthand (~): flexible patch
    Tilde,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid comparator \"{0}\"")]
pub struct InvalidOperatorError(pub String);

impl Operator {
    /// Parse a comparator token
    pub fn from_token(s: &str) -> Result<Self, InvalidOperatorError> {
        match s {
            "=" => Ok(Operator::Equal),
            "<" => Ok(Operator::LessThan),
            "<=" => Ok(Operator::LessThanOrEqual),
            ">" => Ok(Operator::GreaterThan),
            ">=" => Ok(Operator::GreaterThanOrEqual),
            "^" => Ok(Operator::Caret),
            "~" => Ok(Operator::Tilde),
            _ => Err(InvalidOperatorError(s.to_string())),
        }
    }

    /// Get the string representation of the token
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
            Operator::Caret => "^",
            Operator::Tilde => "~",
        }
    }

    /// Whether a bound produced by this token includes the version itself
    pub fn is_inclusive(&self) -> bool {
        !matches!(self, Operator::LessThan | Operator::GreaterThan)
    }

    /// All recognized tokens
    pub fn supported_tokens() -> &'static [&'static str] {
        &["=", "<", ">", "<=", ">=", "^", "~"]
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
