//! Duration strings in the `24h` / `1h30m` / `500ms` form used by `JWT_EXPIRATION`

use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationParseError {
    #[error("empty duration")]
    Empty,

    #[error("missing unit after {value}")]
    MissingUnit { value: String },

    #[error("missing number before unit {unit:?}")]
    MissingNumber { unit: String },

    #[error("unknown unit {unit:?}")]
    UnknownUnit { unit: String },

    #[error("duration overflows")]
    Overflow,
}

/// Parses a duration made of one or more `<integer><unit>` groups.
///
/// Supported units are `ms`, `s`, `m`, `h` and `d`. Groups are summed, so
/// `1h30m` is ninety minutes.
pub fn parse_duration(input: &str) -> Result<Duration, DurationParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(DurationParseError::Empty);
    }

    let mut total_ms: u64 = 0;
    let mut rest = input;

    while !rest.is_empty() {
        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let (number, tail) = rest.split_at(digits_end);

        let unit_end = tail
            .find(|c: char| c.is_ascii_digit())
            .unwrap_or(tail.len());
        let (unit, next) = tail.split_at(unit_end);

        if number.is_empty() {
            return Err(DurationParseError::MissingNumber {
                unit: unit.to_string(),
            });
        }
        if unit.is_empty() {
            return Err(DurationParseError::MissingUnit {
                value: number.to_string(),
            });
        }

        let value: u64 = number.parse().map_err(|_| DurationParseError::Overflow)?;
        let factor: u64 = match unit {
            "ms" => 1,
            "s" => 1_000,
            "m" => 60 * 1_000,
            "h" => 60 * 60 * 1_000,
            "d" => 24 * 60 * 60 * 1_000,
            other => {
                return Err(DurationParseError::UnknownUnit {
                    unit: other.to_string(),
                })
            }
        };

        total_ms = value
            .checked_mul(factor)
            .and_then(|ms| total_ms.checked_add(ms))
            .ok_or(DurationParseError::Overflow)?;
        rest = next;
    }

    Ok(Duration::from_millis(total_ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_units() {
        assert_eq!(parse_duration("24h").unwrap(), Duration::from_secs(24 * 3600));
        assert_eq!(parse_duration("90m").unwrap(), Duration::from_secs(90 * 60));
        assert_eq!(parse_duration("1s").unwrap(), Duration::from_secs(1));
        assert_eq!(parse_duration("500ms").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_duration("7d").unwrap(), Duration::from_secs(7 * 86400));
    }

    #[test]
    fn test_compound_duration() {
        assert_eq!(parse_duration("1h30m").unwrap(), Duration::from_secs(5400));
        assert_eq!(parse_duration(" 2m10s ").unwrap(), Duration::from_secs(130));
    }

    #[test]
    fn test_invalid_durations() {
        assert_eq!(parse_duration(""), Err(DurationParseError::Empty));
        assert_eq!(
            parse_duration("42"),
            Err(DurationParseError::MissingUnit { value: "42".to_string() })
        );
        assert_eq!(
            parse_duration("h"),
            Err(DurationParseError::MissingNumber { unit: "h".to_string() })
        );
        assert_eq!(
            parse_duration("3w"),
            Err(DurationParseError::UnknownUnit { unit: "w".to_string() })
        );
        assert_eq!(
            parse_duration("99999999999999999999h"),
            Err(DurationParseError::Overflow)
        );
    }
}
