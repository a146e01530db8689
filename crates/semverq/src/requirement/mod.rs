//! Version requirements: bound pairs, matching and formatting

mod bound;
mod operator;
mod parser;

pub use bound::Bound;
pub use operator::{InvalidOperatorError, Operator};

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::version_parser::ParseError;
use crate::{Comparator, Version};

/// Error type for requirement parsing and construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequirementError {
    /// Input was empty or contained only separators.
    #[error("empty requirement string")]
    EndOfInput,
    /// A part's version literal failed the version parser.
    #[error("invalid version in requirement part: {0}")]
    InvalidVersion(#[from] ParseError),
    /// A comparator run is not a recognized token, or a token only valid as
    /// the sole part appeared in a two-part input.
    #[error("invalid comparator \"{0}\"")]
    InvalidComparator(String),
    /// More than two comparator/version parts.
    #[error("expected at most two comparator/version parts")]
    TooManyParts,
    /// Two parts constrain the same side of the range.
    #[error("both parts constrain the same bound")]
    DuplicateBound,
    /// The resolved lower bound is greater than the upper bound.
    #[error("lower bound {lower} is greater than upper bound {upper}")]
    MisorderedBounds { lower: Version, upper: Version },
    /// Equal bounds with both sides exclusive; no version can match.
    #[error("empty range: bounds are equal but both exclusive")]
    EmptyRange,
}

/// A version requirement: an optional lower and an optional upper [`Bound`].
///
/// Invariants are enforced at construction: when both bounds are present the
/// lower is at most the upper, and equal bounds require at least one
/// inclusive side. A requirement without any bound matches every version and
/// can only be built via [`Requirement::new`] (or [`Requirement::any`]);
/// string parsing always yields at least one bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    lower: Option<Bound>,
    upper: Option<Bound>,
}

impl Requirement {
    /// Create a requirement from explicit bounds, validating the range.
    pub fn new(lower: Option<Bound>, upper: Option<Bound>) -> Result<Self, RequirementError> {
        if let (Some(lo), Some(up)) = (&lower, &upper) {
            match Comparator::compare(lo.version(), up.version()) {
                Ordering::Greater => {
                    return Err(RequirementError::MisorderedBounds {
                        lower: lo.version().clone(),
                        upper: up.version().clone(),
                    });
                }
                Ordering::Equal if !lo.is_inclusive() && !up.is_inclusive() => {
                    return Err(RequirementError::EmptyRange);
                }
                _ => {}
            }
        }
        Ok(Requirement { lower, upper })
    }

    /// The unbounded requirement; matches every version.
    pub fn any() -> Self {
        Requirement {
            lower: None,
            upper: None,
        }
    }

    /// Parse a requirement string, e.g. `">=1.0.5 <2.0.0"` or `"~1.4.3"`.
    pub fn parse(input: &str) -> Result<Self, RequirementError> {
        parser::parse(input)
    }

    pub fn lower(&self) -> Option<&Bound> {
        self.lower.as_ref()
    }

    pub fn upper(&self) -> Option<&Bound> {
        self.upper.as_ref()
    }

    /// Check whether a version lies within the range.
    pub fn matches(&self, version: &Version) -> bool {
        let lower_ok = match &self.lower {
            None => true,
            Some(bound) => match Comparator::compare(version, bound.version()) {
                Ordering::Greater => true,
                Ordering::Equal => bound.is_inclusive(),
                Ordering::Less => false,
            },
        };
        if !lower_ok {
            return false;
        }
        match &self.upper {
            None => true,
            Some(bound) => match Comparator::compare(version, bound.version()) {
                Ordering::Less => true,
                Ordering::Equal => bound.is_inclusive(),
                Ordering::Greater => false,
            },
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.lower, &self.upper) {
            (None, None) => Ok(()),
            (Some(lo), None) => write!(f, "{}{}", lower_token(lo), lo.version()),
            (None, Some(up)) => write!(f, "{}{}", upper_token(up), up.version()),
            (Some(lo), Some(up)) => {
                if lo.is_inclusive()
                    && up.is_inclusive()
                    && Comparator::equal_to(lo.version(), up.version())
                {
                    return write!(f, "={}", lo.version());
                }
                write!(
                    f,
                    "{}{} {}{}",
                    lower_token(lo),
                    lo.version(),
                    upper_token(up),
                    up.version()
                )
            }
        }
    }
}

fn lower_token(bound: &Bound) -> &'static str {
    if bound.is_inclusive() {
        ">="
    } else {
        ">"
    }
}

fn upper_token(bound: &Bound) -> &'static str {
    if bound.is_inclusive() {
        "<="
    } else {
        "<"
    }
}

impl FromStr for Requirement {
    type Err = RequirementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Requirement::parse(s)
    }
}
