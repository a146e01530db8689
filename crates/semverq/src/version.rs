//! Semver version record

use std::fmt;
use std::str::FromStr;

use crate::version_parser::{self, ParseError};

/// A semantic version according to semver 2.0.0.
///
/// Equality covers all five fields, including build metadata. Precedence
/// comparison ignores build metadata, so `Version` deliberately does not
/// implement `Ord`; use [`Comparator`](crate::Comparator) instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: Option<String>,
    build: Option<String>,
}

impl Version {
    /// Create a release version from the three numeric fields.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease: None,
            build: None,
        }
    }

    /// Create a version from all five fields. Empty prerelease or build
    /// strings are treated as absent. Identifier grammar is not re-validated.
    pub fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        prerelease: Option<&str>,
        build: Option<&str>,
    ) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease: prerelease.filter(|s| !s.is_empty()).map(str::to_string),
            build: build.filter(|s| !s.is_empty()).map(str::to_string),
        }
    }

    pub(crate) fn from_raw(
        major: u64,
        minor: u64,
        patch: u64,
        prerelease: Option<String>,
        build: Option<String>,
    ) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease,
            build,
        }
    }

    /// Parse a version string against the strict semver grammar.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        version_parser::parse(input)
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// The prerelease field, if any (identifiers joined by dots).
    pub fn prerelease(&self) -> Option<&str> {
        self.prerelease.as_deref()
    }

    /// The build metadata field, if any. Never participates in ordering.
    pub fn build(&self) -> Option<&str> {
        self.build.as_deref()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(ref prerelease) = self.prerelease {
            write!(f, "-{}", prerelease)?;
        }
        if let Some(ref build) = self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}
