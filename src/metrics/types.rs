use std::time::Duration;

use serde::Serialize;

/// Transport-level reason a request failed. Only used for diagnostics; every
/// kind counts the same toward the error total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestErrorKind {
    Timeout,
    Connect,
    Other,
}

impl RequestErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::Connect => "connect",
            Self::Other => "other",
        }
    }
}

/// Outcome of a single request attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpResult {
    elapsed_ms: u64,
    error: Option<RequestErrorKind>,
}

impl HttpResult {
    #[must_use]
    pub const fn success(elapsed_ms: u64) -> Self {
        Self {
            elapsed_ms,
            error: None,
        }
    }

    #[must_use]
    pub const fn failure(elapsed_ms: u64, kind: RequestErrorKind) -> Self {
        Self {
            elapsed_ms,
            error: Some(kind),
        }
    }

    /// Builds a result from a measured duration, truncated to whole milliseconds.
    #[must_use]
    pub fn from_elapsed(elapsed: Duration, error: Option<RequestErrorKind>) -> Self {
        Self {
            elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            error,
        }
    }

    #[must_use]
    pub const fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }

    #[must_use]
    pub const fn error_kind(&self) -> Option<RequestErrorKind> {
        self.error
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ErrorBreakdown {
    pub timeout: u64,
    pub connect: u64,
    pub other: u64,
}

impl ErrorBreakdown {
    pub(super) const fn record(&mut self, kind: RequestErrorKind) {
        match kind {
            RequestErrorKind::Timeout => self.timeout = self.timeout.saturating_add(1),
            RequestErrorKind::Connect => self.connect = self.connect.saturating_add(1),
            RequestErrorKind::Other => self.other = self.other.saturating_add(1),
        }
    }
}

/// Summary of a finished run. Percentiles and throughput are `None` when
/// there was nothing to compute them from.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateReport {
    pub total_wall_time: Duration,
    pub total_requests: u64,
    pub error_count: u64,
    pub throughput_qps: Option<f64>,
    pub worker_count: usize,
    pub p50_ms: Option<u64>,
    pub p85_ms: Option<u64>,
    pub p95_ms: Option<u64>,
    pub errors_by_kind: ErrorBreakdown,
}
