use std::sync::Arc;

use tokio::time::Instant;
use tracing::debug;
use url::Url;

use crate::metrics::HttpResult;

use super::transport::Transport;

/// Upper bound on result slots reserved before a batch starts.
const RESERVE_LIMIT: usize = 1024;

/// Initial capacity for `count` results; buffers grow past it on demand.
pub(super) fn reserve_hint(count: u64) -> usize {
    usize::try_from(count).map_or(RESERVE_LIMIT, |slots| slots.min(RESERVE_LIMIT))
}

/// Executes one worker's batch: `count` strictly sequential GETs through a
/// single transport.
pub struct RequestRunner<T> {
    worker: usize,
    transport: T,
    target: Arc<Url>,
}

impl<T: Transport> RequestRunner<T> {
    #[must_use]
    pub const fn new(worker: usize, transport: T, target: Arc<Url>) -> Self {
        Self {
            worker,
            transport,
            target,
        }
    }

    /// Runs the batch to completion. Always yields exactly `count` results in
    /// issue order; failures are recorded, never retried or propagated.
    pub async fn run(self, count: u64) -> Vec<HttpResult> {
        let mut results = Vec::with_capacity(reserve_hint(count));

        for seq in 0..count {
            let start = Instant::now();
            let outcome = self.transport.get(&self.target).await;
            let elapsed = start.elapsed();

            let result = HttpResult::from_elapsed(elapsed, outcome.err());
            if let Some(kind) = result.error_kind() {
                debug!(
                    worker = self.worker,
                    seq,
                    kind = kind.as_str(),
                    elapsed_ms = result.elapsed_ms(),
                    "Request failed."
                );
            }
            results.push(result);
        }

        results
    }
}
