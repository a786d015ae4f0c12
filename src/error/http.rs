use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Worker {worker} could not be started: {source}")]
    WorkerStartFailed {
        worker: usize,
        #[source]
        source: Box<HttpError>,
    },
    #[error("Worker {worker} did not complete: {source}")]
    WorkerJoin {
        worker: usize,
        #[source]
        source: tokio::task::JoinError,
    },
}
