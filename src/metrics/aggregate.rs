use std::time::Duration;

use super::types::{AggregateReport, ErrorBreakdown, HttpResult};

/// Percentile ranks are expressed in twentieths of the sorted result set.
const TWENTIETHS: usize = 20;
pub const P50_TWENTIETHS: usize = 10;
pub const P85_TWENTIETHS: usize = 17;
pub const P95_TWENTIETHS: usize = 19;

/// Summarizes every result of a run.
///
/// Failed requests count toward the totals and the percentiles with their
/// measured elapsed time.
#[must_use]
pub fn aggregate(
    results: &[HttpResult],
    total_wall_time: Duration,
    worker_count: usize,
) -> AggregateReport {
    let mut latencies: Vec<u64> = results.iter().map(HttpResult::elapsed_ms).collect();
    latencies.sort_unstable();

    let mut errors_by_kind = ErrorBreakdown::default();
    for kind in results.iter().filter_map(HttpResult::error_kind) {
        errors_by_kind.record(kind);
    }

    let total_requests = u64::try_from(results.len()).unwrap_or(u64::MAX);
    let error_count = u64::try_from(results.iter().filter(|result| result.is_error()).count())
        .unwrap_or(u64::MAX);

    AggregateReport {
        total_wall_time,
        total_requests,
        error_count,
        throughput_qps: throughput(total_requests, total_wall_time),
        worker_count,
        p50_ms: percentile(&latencies, P50_TWENTIETHS),
        p85_ms: percentile(&latencies, P85_TWENTIETHS),
        p95_ms: percentile(&latencies, P95_TWENTIETHS),
        errors_by_kind,
    }
}

/// Nearest-rank index `floor(count * twentieths / 20)`.
#[must_use]
pub fn percentile_index(count: usize, twentieths: usize) -> usize {
    count
        .saturating_mul(twentieths)
        .checked_div(TWENTIETHS)
        .unwrap_or(0)
}

fn percentile(sorted: &[u64], twentieths: usize) -> Option<u64> {
    sorted
        .get(percentile_index(sorted.len(), twentieths))
        .copied()
}

#[expect(
    clippy::float_arithmetic,
    reason = "throughput is reported as a fractional rate"
)]
fn throughput(total_requests: u64, total_wall_time: Duration) -> Option<f64> {
    if total_wall_time.is_zero() {
        return None;
    }
    Some(total_requests as f64 / total_wall_time.as_secs_f64())
}
