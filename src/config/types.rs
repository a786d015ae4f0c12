use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::args::OutputFormat;
use crate::args::parsers::parse_duration_value;
use crate::error::ValidationError;
use crate::http::TransportSettings;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(alias = "url")]
    pub target: Option<String>,
    #[serde(alias = "requests_per_worker")]
    pub requests: Option<u64>,
    #[serde(alias = "parallel", alias = "worker_count")]
    pub workers: Option<usize>,
    pub timeout: Option<DurationValue>,
    pub connect_timeout: Option<DurationValue>,
    pub output_format: Option<OutputFormat>,
    pub output: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(secs) => {
                if *secs == 0 {
                    Err(ValidationError::DurationZero)
                } else {
                    Ok(Duration::from_secs(*secs))
                }
            }
            DurationValue::Text(text) => parse_duration_value(text),
        }
    }
}

/// Immutable parameters shared read-only by every worker of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub target: Url,
    pub requests_per_worker: u64,
    pub worker_count: usize,
    pub transport: TransportSettings,
}

impl RunConfig {
    /// Number of results a run produces when every worker completes.
    #[must_use]
    pub const fn expected_requests(&self) -> u64 {
        self.requests_per_worker
            .saturating_mul(self.worker_count as u64)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub path: Option<PathBuf>,
}

/// Everything needed to execute and report a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub run: RunConfig,
    pub output: OutputSettings,
}
