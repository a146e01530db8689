//! Precedence comparison between version records

use std::cmp::Ordering;

use crate::Version;

/// Comparator implementing the semver 2.0.0 precedence rules.
///
/// Precedence is decided by `major`, `minor`, `patch` in that order, then by
/// the prerelease field. Build metadata is never compared.
pub struct Comparator;

impl Comparator {
    /// Compare two versions by precedence.
    pub fn compare(a: &Version, b: &Version) -> Ordering {
        a.major()
            .cmp(&b.major())
            .then_with(|| a.minor().cmp(&b.minor()))
            .then_with(|| a.patch().cmp(&b.patch()))
            .then_with(|| prerelease_cmp(a.prerelease(), b.prerelease()))
    }

    /// Check if a > b
    pub fn greater_than(a: &Version, b: &Version) -> bool {
        Self::compare(a, b) == Ordering::Greater
    }

    /// Check if a >= b
    pub fn greater_than_or_equal_to(a: &Version, b: &Version) -> bool {
        Self::compare(a, b) != Ordering::Less
    }

    /// Check if a < b
    pub fn less_than(a: &Version, b: &Version) -> bool {
        Self::compare(a, b) == Ordering::Less
    }

    /// Check if a <= b
    pub fn less_than_or_equal_to(a: &Version, b: &Version) -> bool {
        Self::compare(a, b) != Ordering::Greater
    }

    /// Check if a and b have equal precedence (build metadata ignored)
    pub fn equal_to(a: &Version, b: &Version) -> bool {
        Self::compare(a, b) == Ordering::Equal
    }
}

/// Prerelease precedence: a release (no prerelease) outranks any prerelease
/// version. Two prerelease fields are compared identifier by identifier; if
/// all shared identifiers are equal, the side with more identifiers ranks
/// higher.
fn prerelease_cmp(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let mut lhs = a.split('.');
            let mut rhs = b.split('.');
            loop {
                match (lhs.next(), rhs.next()) {
                    (None, None) => return Ordering::Equal,
                    (None, Some(_)) => return Ordering::Less,
                    (Some(_), None) => return Ordering::Greater,
                    (Some(x), Some(y)) => match identifier_cmp(x, y) {
                        Ordering::Equal => continue,
                        decided => return decided,
                    },
                }
            }
        }
    }
}

/// A pair of all-digit identifiers compares numerically, anything else as
/// raw byte sequences.
fn identifier_cmp(a: &str, b: &str) -> Ordering {
    if is_numeric(a) && is_numeric(b) {
        numeric_cmp(a, b)
    } else {
        a.as_bytes().cmp(b.as_bytes())
    }
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Numeric comparison of digit runs without integer conversion, so absurdly
/// long identifiers cannot overflow.
fn numeric_cmp(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_compare_fields() {
        let tests: &[(&str, &str, Ordering)] = &[
            ("1.0.0", "2.0.0", Ordering::Less),
            ("2.0.0", "1.0.0", Ordering::Greater),
            ("1.1.0", "1.2.0", Ordering::Less),
            ("1.2.0", "1.1.0", Ordering::Greater),
            ("1.1.1", "1.1.2", Ordering::Less),
            ("1.1.2", "1.1.1", Ordering::Greater),
            ("1.1.2", "1.1.1-alpha.1", Ordering::Greater),
            ("1.1.2-alpha.1", "1.1.1", Ordering::Greater),
            ("1.1.2-alpha.1", "1.1.1-alpha.1", Ordering::Greater),
            ("1.1.2-alpha.1", "1.1.2-alpha.2", Ordering::Less),
            ("1.1.2-alpha.1", "1.1.2-alpha.1.longer", Ordering::Less),
        ];

        for &(a, b, expected) in tests {
            let (a, b) = (v(a), v(b));
            assert_eq!(Comparator::compare(&a, &b), expected, "{} vs {}", a, b);
            assert_eq!(
                Comparator::compare(&b, &a),
                expected.reverse(),
                "{} vs {} reversed",
                b,
                a
            );
            assert_eq!(Comparator::compare(&a, &a), Ordering::Equal);
            assert_eq!(Comparator::compare(&b, &b), Ordering::Equal);
        }
    }

    #[test]
    fn test_semver_spec_prerelease_chain() {
        // https://semver.org/spec/v2.0.0.html item 11.4
        let chain = [
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0",
        ];
        for pair in chain.windows(2) {
            assert!(
                Comparator::less_than(&v(pair[0]), &v(pair[1])),
                "{} < {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_total_order_over_sorted_chain() {
        let chain = [
            "0.0.0",
            "0.0.1",
            "0.0.2",
            "0.1.0",
            "0.1.1-alpha",
            "0.1.1",
            "0.9.0",
            "0.9.9-beta",
            "0.9.9",
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0",
            "1.0.1-alpha",
            "1.0.1",
            "1.0.2",
            "1.1.0",
            "1.1.1",
            "1.9.0",
            "2.0.0",
            "99.99.99",
        ];
        // every pair (i < j) must compare Less; transitivity follows from
        // exercising all pairs, not just neighbors
        for i in 0..chain.len() {
            for j in (i + 1)..chain.len() {
                let (a, b) = (v(chain[i]), v(chain[j]));
                assert_eq!(Comparator::compare(&a, &b), Ordering::Less, "{} < {}", a, b);
                assert_eq!(
                    Comparator::compare(&b, &a),
                    Ordering::Greater,
                    "{} > {}",
                    b,
                    a
                );
            }
            let a = v(chain[i]);
            assert_eq!(Comparator::compare(&a, &a), Ordering::Equal);
        }
    }

    #[test]
    fn test_build_metadata_ignored() {
        assert!(Comparator::equal_to(&v("1.2.3+build.1"), &v("1.2.3+build.2")));
        assert!(Comparator::equal_to(&v("1.2.3-rc.1+a"), &v("1.2.3-rc.1+b")));
        assert!(Comparator::less_than(&v("1.2.3-rc.1+zzz"), &v("1.2.3")));
    }

    #[test]
    fn test_prerelease_cmp() {
        let tests: &[(&str, &str, Ordering)] = &[
            ("alpha", "alpha", Ordering::Equal),
            ("alpha.1", "alpha.1", Ordering::Equal),
            ("alpha.some.more.parts", "alpha.some.more.parts", Ordering::Equal),
            ("alpha", "beta", Ordering::Less),
            ("alpha.1", "beta.1", Ordering::Less),
            ("alpha.1", "alpha.2", Ordering::Less),
            ("alpha.1", "alpha.1.some", Ordering::Less),
            ("alpha.1.2", "alpha.1.10", Ordering::Less),
            ("alpha.1.10", "alpha.1.11", Ordering::Less),
            ("alpha.1.10", "alpha.1.10.some", Ordering::Less),
        ];
        for &(a, b, expected) in tests {
            assert_eq!(prerelease_cmp(Some(a), Some(b)), expected, "{} vs {}", a, b);
            assert_eq!(prerelease_cmp(Some(b), Some(a)), expected.reverse());
        }

        assert_eq!(prerelease_cmp(None, None), Ordering::Equal);
        assert_eq!(prerelease_cmp(None, Some("alpha")), Ordering::Greater);
        assert_eq!(prerelease_cmp(Some("alpha"), None), Ordering::Less);
    }

    #[test]
    fn test_numeric_identifiers_beyond_u64() {
        let a = "1.0.0-99999999999999999999998";
        let b = "1.0.0-99999999999999999999999";
        assert!(Comparator::less_than(&v(a), &v(b)));
    }
}
