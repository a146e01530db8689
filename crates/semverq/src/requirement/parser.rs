//! Parser for requirement strings
//!
//! A requirement string holds one or two comparator/version parts, separated
//! by whitespace, `,` or `;`. Shorthand operators (`^`, `~`) and `=` resolve
//! to a bound pair here; the resulting [`Requirement`] only ever carries
//! plain inclusive/exclusive bounds.

use lazy_static::lazy_static;
use regex::Regex;

use super::{Bound, Operator, Requirement, RequirementError};
use crate::Version;

lazy_static! {
    static ref SEPARATOR_RE: Regex = Regex::new(r"[\s,;]+").unwrap();
}

fn is_comparator_char(c: char) -> bool {
    matches!(c, '<' | '>' | '=' | '^' | '~')
}

/// One tokenized comparator/version pair.
struct Part {
    operator: Operator,
    version: Version,
}

pub(super) fn parse(input: &str) -> Result<Requirement, RequirementError> {
    let parts = split_parts(input)?;

    if parts.len() == 1 {
        return resolve_single(parse_part(&parts[0])?);
    }

    let first = parse_part(&parts[0])?;
    let second = parse_part(&parts[1])?;
    resolve_pair(first, second)
}

/// Split the input on separators. A fragment consisting solely of comparator
/// characters belongs to the following fragment (handles ">= 1.2.3").
fn split_parts(input: &str) -> Result<Vec<String>, RequirementError> {
    let mut parts: Vec<String> = Vec::new();
    let mut dangling = String::new();

    for fragment in SEPARATOR_RE.split(input) {
        if fragment.is_empty() {
            continue;
        }
        if fragment.chars().all(is_comparator_char) {
            dangling.push_str(fragment);
            continue;
        }
        dangling.push_str(fragment);
        parts.push(std::mem::take(&mut dangling));
    }
    if !dangling.is_empty() {
        // comparator with no version literal; reported as an invalid
        // (empty) version by parse_part
        parts.push(dangling);
    }

    if parts.is_empty() {
        return Err(RequirementError::EndOfInput);
    }
    if parts.len() > 2 {
        return Err(RequirementError::TooManyParts);
    }
    Ok(parts)
}

/// Split a part into its comparator run and version literal. A missing
/// comparator defaults to `=`. The version is validated before the
/// comparator, matching the error priority of the requirement grammar.
fn parse_part(part: &str) -> Result<Part, RequirementError> {
    let literal_start = part
        .find(|c| !is_comparator_char(c))
        .unwrap_or(part.len());
    let (token, literal) = part.split_at(literal_start);

    let version = Version::parse(literal)?;
    let operator = if token.is_empty() {
        Operator::Equal
    } else {
        Operator::from_token(token)
            .map_err(|e| RequirementError::InvalidComparator(e.0))?
    };

    Ok(Part { operator, version })
}

fn resolve_single(part: Part) -> Result<Requirement, RequirementError> {
    let Part { operator, version } = part;
    match operator {
        Operator::Equal => {
            let upper = Bound::inclusive(version.clone());
            Requirement::new(Some(Bound::inclusive(version)), Some(upper))
        }
        Operator::GreaterThan | Operator::GreaterThanOrEqual => Requirement::new(
            Some(Bound::new(version, operator.is_inclusive())),
            None,
        ),
        Operator::LessThan | Operator::LessThanOrEqual => Requirement::new(
            None,
            Some(Bound::new(version, operator.is_inclusive())),
        ),
        Operator::Tilde => {
            // patch-level drift within the given minor
            let upper = Version::new(version.major(), version.minor().saturating_add(1), 0);
            Requirement::new(
                Some(Bound::inclusive(version)),
                Some(Bound::exclusive(upper)),
            )
        }
        Operator::Caret => resolve_caret(version),
    }
}

/// Caret expansion: drift below the leftmost non-zero core field. With both
/// major and minor zero the range degenerates to an exact match on the given
/// version; no drift is permitted.
fn resolve_caret(version: Version) -> Result<Requirement, RequirementError> {
    if version.major() == 0 && version.minor() == 0 {
        let upper = Bound::inclusive(version.clone());
        return Requirement::new(Some(Bound::inclusive(version)), Some(upper));
    }

    let upper = if version.major() > 0 {
        Version::new(version.major().saturating_add(1), 0, 0)
    } else {
        Version::new(0, version.minor().saturating_add(1), 0)
    };
    Requirement::new(
        Some(Bound::inclusive(version)),
        Some(Bound::exclusive(upper)),
    )
}

/// Two-part resolution: the `>`/`>=` part is the lower bound and the
/// `<`/`<=` part the upper bound, regardless of the order they appeared in.
/// `=` and the shorthand operators are only valid as the sole part.
fn resolve_pair(first: Part, second: Part) -> Result<Requirement, RequirementError> {
    let mut lower: Option<Bound> = None;
    let mut upper: Option<Bound> = None;

    for part in [first, second] {
        let Part { operator, version } = part;
        let slot = match operator {
            Operator::GreaterThan | Operator::GreaterThanOrEqual => &mut lower,
            Operator::LessThan | Operator::LessThanOrEqual => &mut upper,
            Operator::Equal | Operator::Caret | Operator::Tilde => {
                return Err(RequirementError::InvalidComparator(
                    operator.as_str().to_string(),
                ));
            }
        };
        if slot.is_some() {
            return Err(RequirementError::DuplicateBound);
        }
        *slot = Some(Bound::new(version, operator.is_inclusive()));
    }

    Requirement::new(lower, upper)
}
