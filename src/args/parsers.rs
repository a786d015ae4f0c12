use std::str::FromStr;
use std::time::Duration;

use tracing::warn;
use url::Url;

use crate::error::{AppError, AppResult, ValidationError};

/// Parses the target address. Only absolute URIs are accepted.
///
/// # Errors
///
/// Returns an error when the value is not an absolute URI.
pub fn parse_target(value: &str) -> Result<Url, ValidationError> {
    let trimmed = value.trim();
    let url = Url::parse(trimmed).map_err(|err| ValidationError::InvalidTarget {
        value: trimmed.to_owned(),
        source: err,
    })?;
    if url.cannot_be_a_base() {
        return Err(ValidationError::TargetNotAbsolute {
            value: trimmed.to_owned(),
        });
    }
    if !matches!(url.scheme(), "http" | "https") {
        warn!(
            "Target scheme '{}' is not http(s); every request will likely fail.",
            url.scheme()
        );
    }
    Ok(url)
}

/// Parses a positional count, returning `None` for missing input. Unparsable
/// or non-positive input is discarded with a warning.
pub fn parse_count_lenient<T>(raw: Option<&str>, name: &str) -> Option<T>
where
    T: FromStr<Err = ValidationError>,
{
    let raw = raw?;
    match raw.parse::<T>() {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("Ignoring {} '{}': {}", name, raw, err);
            None
        }
    }
}

/// Parses a duration with an optional ms/s/m/h suffix (seconds when omitted).
///
/// # Errors
///
/// Returns an error for empty input, unknown units, overflow, or zero.
pub fn parse_duration_arg(s: &str) -> AppResult<Duration> {
    parse_duration_value(s).map_err(AppError::validation)
}

pub(crate) fn parse_duration_value(s: &str) -> Result<Duration, ValidationError> {
    let value = s.trim();
    if value.is_empty() {
        return Err(ValidationError::DurationEmpty);
    }

    let digits_len = value.chars().take_while(char::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(ValidationError::InvalidDurationFormat {
            value: value.to_owned(),
        });
    }
    let (num_part, unit_part) = value.split_at(digits_len);
    let number: u64 = num_part
        .parse()
        .map_err(|err| ValidationError::InvalidDurationNumber {
            value: value.to_owned(),
            source: err,
        })?;

    let unit = if unit_part.is_empty() { "s" } else { unit_part };
    let duration = match unit {
        "ms" => Duration::from_millis(number),
        "s" => Duration::from_secs(number),
        "m" => {
            let secs = number
                .checked_mul(60)
                .ok_or(ValidationError::DurationOverflow)?;
            Duration::from_secs(secs)
        }
        "h" => {
            let secs = number
                .checked_mul(60)
                .and_then(|seconds| seconds.checked_mul(60))
                .ok_or(ValidationError::DurationOverflow)?;
            Duration::from_secs(secs)
        }
        _ => {
            return Err(ValidationError::InvalidDurationUnit {
                unit: unit.to_owned(),
            });
        }
    };

    if duration.is_zero() {
        return Err(ValidationError::DurationZero);
    }

    Ok(duration)
}
