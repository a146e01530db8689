//! Bound type for requirement boundaries

use std::fmt;

use crate::Version;

/// One end of a version requirement: a version plus an inclusivity flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bound {
    version: Version,
    inclusive: bool,
}

impl Bound {
    /// Create a new bound
    pub fn new(version: Version, inclusive: bool) -> Self {
        Bound { version, inclusive }
    }

    /// Bound that includes its version (`>=` / `<=`)
    pub fn inclusive(version: Version) -> Self {
        Bound::new(version, true)
    }

    /// Bound that excludes its version (`>` / `<`)
    pub fn exclusive(version: Version) -> Self {
        Bound::new(version, false)
    }

    /// Get the boundary version
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Check if the boundary version itself counts as a match
    pub fn is_inclusive(&self) -> bool {
        self.inclusive
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}]",
            self.version,
            if self.inclusive {
                "inclusive"
            } else {
                "exclusive"
            }
        )
    }
}
