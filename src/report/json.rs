use serde::Serialize;

use crate::error::{AppError, AppResult, ReportError};
use crate::metrics::{AggregateReport, ErrorBreakdown};

use super::format::format_total_time;

#[derive(Debug, Serialize)]
struct JsonReport<'report> {
    total_time: String,
    total_time_ms: u64,
    total_requests: u64,
    error_count: u64,
    throughput_qps: Option<f64>,
    worker_count: usize,
    p50_ms: Option<u64>,
    p85_ms: Option<u64>,
    p95_ms: Option<u64>,
    errors_by_kind: &'report ErrorBreakdown,
}

/// Renders the report as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(report: &AggregateReport) -> AppResult<String> {
    let payload = JsonReport {
        total_time: format_total_time(report.total_wall_time),
        total_time_ms: u64::try_from(report.total_wall_time.as_millis()).unwrap_or(u64::MAX),
        total_requests: report.total_requests,
        error_count: report.error_count,
        throughput_qps: report.throughput_qps,
        worker_count: report.worker_count,
        p50_ms: report.p50_ms,
        p85_ms: report.p85_ms,
        p95_ms: report.p95_ms,
        errors_by_kind: &report.errors_by_kind,
    };
    let mut rendered = serde_json::to_string_pretty(&payload)
        .map_err(|err| AppError::report(ReportError::Serialize { source: err }))?;
    rendered.push('\n');
    Ok(rendered)
}
