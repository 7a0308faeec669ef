//! Compact duration strings for cache-policy values.
//!
//! A duration is a sequence of `<digits><unit>` pairs, e.g. `"3d12h"` or
//! `"30m"`. Recognized units:
//!
//! | Unit | Milliseconds |
//! |------|--------------|
//! | `d`  | 86 400 000   |
//! | `h`  | 3 600 000    |
//! | `m`  | 60 000       |
//! | `s`  | 1 000        |
//! | `u`  | 1            |
//!
//! Text before the first digit and a trailing digit run with no unit are
//! ignored, so a string with no pairs at all parses to zero.

const MS_PER_DAY: u64 = 86_400_000;
const MS_PER_HOUR: u64 = 3_600_000;
const MS_PER_MINUTE: u64 = 60_000;
const MS_PER_SECOND: u64 = 1_000;

/// A duration string contained a `<digits><unit>` pair that could not be
/// converted to milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a valid duration: '{token}' in '{input}'")]
pub struct MalformedDuration {
    /// The full duration string being parsed.
    pub input: String,
    /// The offending `<digits><unit>` token.
    pub token: String,
}

/// Parses a compact duration string into milliseconds.
///
/// Fails when a unit is not exactly one of `d`, `h`, `m`, `s`, `u` (so
/// `"5x"`, `"1dh"` and `"1d 2h"` are rejected), or when the result does not
/// fit in a `u64`.
///
/// ```
/// use precache_common::parse_duration_ms;
///
/// assert_eq!(parse_duration_ms("1d12h").unwrap(), 129_600_000);
/// assert!(parse_duration_ms("5x").is_err());
/// ```
pub fn parse_duration_ms(input: &str) -> Result<u64, MalformedDuration> {
    let mut total: u64 = 0;
    let mut rest = input;

    while let Some(start) = rest.find(|c: char| c.is_ascii_digit()) {
        let pair = &rest[start..];
        let digits_end = pair
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(pair.len());
        if digits_end == pair.len() {
            // Trailing magnitude with no unit.
            break;
        }
        let unit_len = pair[digits_end..]
            .find(|c: char| c.is_ascii_digit())
            .unwrap_or(pair.len() - digits_end);
        let token = &pair[..digits_end + unit_len];

        let malformed = || MalformedDuration {
            input: input.to_string(),
            token: token.to_string(),
        };

        let magnitude: u64 = pair[..digits_end].parse().map_err(|_| malformed())?;
        let factor = unit_factor(&pair[digits_end..digits_end + unit_len]).ok_or_else(malformed)?;
        total = magnitude
            .checked_mul(factor)
            .and_then(|ms| total.checked_add(ms))
            .ok_or_else(malformed)?;

        rest = &pair[digits_end + unit_len..];
    }

    Ok(total)
}

/// Milliseconds per unit, or `None` for anything but a single known unit.
fn unit_factor(unit: &str) -> Option<u64> {
    match unit {
        "d" => Some(MS_PER_DAY),
        "h" => Some(MS_PER_HOUR),
        "m" => Some(MS_PER_MINUTE),
        "s" => Some(MS_PER_SECOND),
        "u" => Some(1),
        _ => None,
    }
}
