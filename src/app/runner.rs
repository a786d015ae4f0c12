use std::sync::Arc;

use tracing::{info, warn};

use crate::config::RunConfig;
use crate::error::AppResult;
use crate::http::{WorkDistributor, reqwest_transport_factory};
use crate::metrics::{AggregateReport, aggregate};

/// Runs every worker against the target and aggregates the combined results.
pub(crate) async fn run_bench(config: RunConfig) -> AppResult<AggregateReport> {
    info!(
        url = %config.target,
        requests_per_worker = config.requests_per_worker,
        workers = config.worker_count,
        "Starting run."
    );

    let config = Arc::new(config);
    let factory = reqwest_transport_factory(config.transport);
    let run = WorkDistributor::new(Arc::clone(&config)).run(factory).await?;

    let wall_time = run.wall_time;
    let results = run.into_results();
    let produced = u64::try_from(results.len()).unwrap_or(u64::MAX);
    if produced != config.expected_requests() {
        warn!(
            expected = config.expected_requests(),
            produced, "Result count does not match the configured workload."
        );
    }

    let report = aggregate(&results, wall_time, config.worker_count);
    info!(
        total = report.total_requests,
        errors = report.error_count,
        wall_ms = u64::try_from(wall_time.as_millis()).unwrap_or(u64::MAX),
        "Run finished."
    );
    Ok(report)
}
