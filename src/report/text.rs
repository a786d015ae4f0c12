use crate::error::AppResult;
use crate::metrics::AggregateReport;

use super::format::{format_optional, format_throughput, format_total_time, write_line};

pub const SEPARATOR: &str = "--------------------------------------------------";

/// Renders the fixed-label report bracketed by separator lines.
///
/// # Errors
///
/// Returns an error if writing into the output buffer fails.
pub fn render_text(report: &AggregateReport) -> AppResult<String> {
    let mut output = String::new();
    write_line(&mut output, SEPARATOR)?;
    write_line(
        &mut output,
        &format!(
            "Total time taken:    {}",
            format_total_time(report.total_wall_time)
        ),
    )?;
    write_line(
        &mut output,
        &format!("Total requests:      {}", report.total_requests),
    )?;
    write_line(
        &mut output,
        &format!("Total errors:        {}", report.error_count),
    )?;
    write_line(
        &mut output,
        &format!(
            "Throughput QPS:      {}",
            format_throughput(report.throughput_qps)
        ),
    )?;
    write_line(
        &mut output,
        &format!("Parallel count:      {}", report.worker_count),
    )?;
    write_line(
        &mut output,
        &format!("50th percentile:     {}", format_optional(report.p50_ms)),
    )?;
    write_line(
        &mut output,
        &format!("85th percentile:     {}", format_optional(report.p85_ms)),
    )?;
    write_line(
        &mut output,
        &format!("95th percentile:     {}", format_optional(report.p95_ms)),
    )?;
    write_line(&mut output, SEPARATOR)?;
    Ok(output)
}
