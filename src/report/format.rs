use std::fmt::Write as _;
use std::time::Duration;

use crate::error::{AppError, AppResult, ReportError};

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 3_600;
/// One tick is 100ns; seven fractional digits.
const NANOS_PER_TICK: u32 = 100;

pub(super) fn write_line(output: &mut String, line: &str) -> AppResult<()> {
    writeln!(output, "{}", line)
        .map_err(|err| AppError::report(ReportError::WriteLine { source: err }))
}

/// Formats a wall time as `hh:mm:ss.fffffff`.
#[must_use]
pub fn format_total_time(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let hours = total_secs / SECS_PER_HOUR;
    let minutes = (total_secs % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let seconds = total_secs % SECS_PER_MINUTE;
    let ticks = duration.subsec_nanos() / NANOS_PER_TICK;
    format!("{:02}:{:02}:{:02}.{:07}", hours, minutes, seconds, ticks)
}

pub(super) fn format_optional<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "n/a".to_owned(), |value| value.to_string())
}

pub(super) fn format_throughput(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_owned(), |qps| format!("{:.2}", qps))
}
