//! Strict semver 2.0.0 grammar scanner
//!
//! Single pass, left to right, no backtracking. Each field is isolated
//! before conversion; no field scanner consumes characters belonging to the
//! next field.

use thiserror::Error;

use crate::Version;

/// Longest accepted input in bytes. Longer strings are rejected up front.
pub const MAX_VERSION_LEN: usize = 255;

/// Error type for version parsing
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Input is `MAX_VERSION_LEN` bytes or longer.
    #[error("version string too long (limit is {} bytes)", MAX_VERSION_LEN)]
    TooLong,
    /// Input ended while a required field was still incomplete, e.g. `"1"`
    /// or `"1.2."`.
    #[error("unexpected end of input")]
    PrematureEndOfInput,
    /// A character outside the permitted class at the current position, a
    /// leading zero on a numeric field, or an empty dot-separated identifier.
    #[error("character not allowed at this position")]
    DisallowedCharacter,
    /// Scanning finished but input was not fully consumed. Unreachable under
    /// a correct scanner; kept as a distinct code.
    #[error("unconsumed trailing input")]
    Structure,
}

/// How a numeric core field may legally end.
enum FieldEnd {
    /// Field is followed by a literal `.` (major, minor).
    Dot,
    /// Field is followed by end of input, `-` or `+` (patch).
    Tail,
}

pub(crate) fn parse(input: &str) -> Result<Version, ParseError> {
    if input.len() >= MAX_VERSION_LEN {
        return Err(ParseError::TooLong);
    }

    let bytes = input.as_bytes();
    let mut pos = 0usize;

    let major = numeric_field(bytes, &mut pos, FieldEnd::Dot)?;
    let minor = numeric_field(bytes, &mut pos, FieldEnd::Dot)?;
    let patch = numeric_field(bytes, &mut pos, FieldEnd::Tail)?;

    let mut prerelease = None;
    if bytes.get(pos) == Some(&b'-') {
        pos += 1;
        prerelease = Some(identifiers(input, &mut pos, true)?);
    }

    let mut build = None;
    if bytes.get(pos) == Some(&b'+') {
        pos += 1;
        build = Some(identifiers(input, &mut pos, false)?);
    }

    if pos != bytes.len() {
        return Err(ParseError::Structure);
    }

    Ok(Version::from_raw(major, minor, patch, prerelease, build))
}

/// Consume one digit run, validate the leading-zero rule and the field
/// terminator, convert. Shared by all three numeric core fields.
fn numeric_field(bytes: &[u8], pos: &mut usize, end: FieldEnd) -> Result<u64, ParseError> {
    let start = *pos;
    while *pos < bytes.len() && bytes[*pos].is_ascii_digit() {
        *pos += 1;
    }
    let digits = &bytes[start..*pos];
    let at_end = *pos == bytes.len();

    let terminated = match end {
        FieldEnd::Dot => {
            if at_end {
                return Err(ParseError::PrematureEndOfInput);
            }
            bytes[*pos] == b'.'
        }
        FieldEnd::Tail => at_end || bytes[*pos] == b'-' || bytes[*pos] == b'+',
    };
    if !terminated {
        return Err(ParseError::DisallowedCharacter);
    }
    if digits.is_empty() {
        // the separator arrived before any digit, e.g. "1..3" or "1.2."
        return Err(if at_end {
            ParseError::PrematureEndOfInput
        } else {
            ParseError::DisallowedCharacter
        });
    }
    if digits.len() > 1 && digits[0] == b'0' {
        return Err(ParseError::DisallowedCharacter);
    }
    if let FieldEnd::Dot = end {
        *pos += 1;
    }
    Ok(fold_digits(digits))
}

/// Convert a validated digit run. Saturates instead of overflowing.
fn fold_digits(digits: &[u8]) -> u64 {
    digits.iter().fold(0u64, |acc, &b| {
        acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
    })
}

/// Scan a run of dot-separated identifiers over `[0-9A-Za-z-]`.
///
/// For the prerelease field the run ends at `+` and purely numeric
/// identifiers longer than one character must not start with `0`. Build
/// metadata runs to the end of the input and carries no leading-zero rule.
fn identifiers(input: &str, pos: &mut usize, is_prerelease: bool) -> Result<String, ParseError> {
    let bytes = input.as_bytes();
    let start = *pos;
    let mut ident_len = 0usize;
    let mut ident_numeric = true;
    let mut ident_first = 0u8;

    loop {
        let next = bytes.get(*pos).copied();
        let end_of_run = match next {
            None => true,
            Some(b'+') if is_prerelease => true,
            _ => false,
        };

        if end_of_run || next == Some(b'.') {
            if ident_len == 0 {
                return Err(if next.is_none() {
                    ParseError::PrematureEndOfInput
                } else {
                    ParseError::DisallowedCharacter
                });
            }
            if is_prerelease && ident_numeric && ident_len > 1 && ident_first == b'0' {
                return Err(ParseError::DisallowedCharacter);
            }
            if end_of_run {
                break;
            }
            *pos += 1;
            ident_len = 0;
            ident_numeric = true;
            continue;
        }

        let b = next.unwrap_or_default();
        match b {
            b'0'..=b'9' => {}
            b'A'..=b'Z' | b'a'..=b'z' | b'-' => ident_numeric = false,
            _ => return Err(ParseError::DisallowedCharacter),
        }
        if ident_len == 0 {
            ident_first = b;
        }
        ident_len += 1;
        *pos += 1;
    }

    Ok(input[start..*pos].to_string())
}
