//! Semantic versioning library: strict parsing, precedence comparison and
//! requirement matching per semver 2.0.0
//!
//! This crate parses version strings into [`Version`] records, compares them
//! by the semver precedence rules (see <https://semver.org/spec/v2.0.0.html>)
//! and matches versions against [`Requirement`] ranges built from comparator
//! tokens (`=`, `<`, `>`, `<=`, `>=`) and the `^`/`~` shorthand operators.

pub mod requirement;

mod comparator;
mod version;
mod version_parser;

use std::cmp::Ordering;

use thiserror::Error;

pub use comparator::Comparator;
pub use requirement::{Bound, Operator, Requirement, RequirementError};
pub use version::Version;
pub use version_parser::{ParseError, MAX_VERSION_LEN};

/// Error type for the composite string-level entry points
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Version(#[from] ParseError),
    #[error(transparent)]
    Requirement(#[from] RequirementError),
}

/// Check whether a version string satisfies a requirement string.
///
/// Parses the version first, then the requirement, then matches; the first
/// failure short-circuits, so a bad version string is reported even when the
/// requirement string is also invalid.
pub fn satisfies(version: &str, requirement: &str) -> Result<bool, Error> {
    let version = Version::parse(version)?;
    let requirement = Requirement::parse(requirement)?;
    Ok(requirement.matches(&version))
}

/// Compare two version strings by precedence.
pub fn compare(a: &str, b: &str) -> Result<Ordering, ParseError> {
    Ok(Comparator::compare(&Version::parse(a)?, &Version::parse(b)?))
}
