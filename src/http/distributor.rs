use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, error};

use crate::args::MAX_COUNT;
use crate::config::RunConfig;
use crate::error::{AppError, AppResult, HttpError, ValidationError};
use crate::metrics::HttpResult;

use super::runner::{RequestRunner, reserve_hint};
use super::transport::Transport;

/// Results produced by one worker, tagged with its index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerBatch {
    pub worker: usize,
    pub results: Vec<HttpResult>,
}

/// All worker batches plus the wall time spanning the first spawn to the last join.
#[derive(Debug, Clone)]
pub struct DistributedRun {
    pub batches: Vec<WorkerBatch>,
    pub wall_time: Duration,
}

impl DistributedRun {
    /// Concatenates every worker's results.
    #[must_use]
    pub fn into_results(self) -> Vec<HttpResult> {
        self.batches
            .into_iter()
            .flat_map(|batch| batch.results)
            .collect()
    }
}

/// Fans a run out to `worker_count` independent workers and waits for all of them.
pub struct WorkDistributor {
    config: Arc<RunConfig>,
}

impl WorkDistributor {
    #[must_use]
    pub const fn new(config: Arc<RunConfig>) -> Self {
        Self { config }
    }

    /// Spawns one task per worker. Each task builds its own transport through
    /// `make_transport` and runs a full batch. Workers share nothing but the
    /// read-only config.
    ///
    /// # Errors
    ///
    /// Returns an error when either count exceeds [`MAX_COUNT`], when a worker
    /// cannot build its transport, or when its task fails to complete.
    /// Per-request failures are never errors here.
    pub async fn run<T, F>(&self, make_transport: F) -> AppResult<DistributedRun>
    where
        T: Transport + 'static,
        F: Fn(usize) -> Result<T, HttpError> + Send + Sync + 'static,
    {
        let make_transport = Arc::new(make_transport);
        let target = Arc::new(self.config.target.clone());
        let requests = self.config.requests_per_worker;
        let worker_count = self.config.worker_count;
        check_counts(requests, worker_count)?;
        let reserved = reserve_hint(u64::try_from(worker_count).unwrap_or(u64::MAX));

        let mut handles: Vec<JoinHandle<Result<Vec<HttpResult>, HttpError>>> =
            Vec::with_capacity(reserved);

        let start = Instant::now();
        for worker in 0..worker_count {
            let make_transport = Arc::clone(&make_transport);
            let target = Arc::clone(&target);
            handles.push(tokio::spawn(async move {
                let transport = make_transport(worker)?;
                Ok(RequestRunner::new(worker, transport, target)
                    .run(requests)
                    .await)
            }));
        }

        let mut outcomes = Vec::with_capacity(reserved);
        for handle in handles {
            outcomes.push(handle.await);
        }
        let wall_time = start.elapsed();

        let mut batches = Vec::with_capacity(reserved);
        for (worker, outcome) in outcomes.into_iter().enumerate() {
            match outcome {
                Ok(Ok(results)) => {
                    debug!(worker, requests = results.len(), "Worker finished.");
                    batches.push(WorkerBatch { worker, results });
                }
                Ok(Err(err)) => {
                    error!(worker, "Worker could not be started: {}", err);
                    return Err(AppError::http(HttpError::WorkerStartFailed {
                        worker,
                        source: Box::new(err),
                    }));
                }
                Err(err) => {
                    error!(worker, "Worker task failed: {}", err);
                    return Err(AppError::http(HttpError::WorkerJoin {
                        worker,
                        source: err,
                    }));
                }
            }
        }

        Ok(DistributedRun { batches, wall_time })
    }
}

fn check_counts(requests: u64, worker_count: usize) -> AppResult<()> {
    let workers_in_range = u64::try_from(worker_count).is_ok_and(|workers| workers <= MAX_COUNT);
    if requests > MAX_COUNT || !workers_in_range {
        return Err(AppError::validation(ValidationError::ValueTooLarge {
            max: MAX_COUNT,
        }));
    }
    Ok(())
}
