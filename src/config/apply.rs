use std::path::PathBuf;
use std::time::Duration;

use tracing::debug;

use crate::args::{
    BenchArgs, DEFAULT_REQUESTS_PER_WORKER, DEFAULT_WORKER_COUNT, PositiveU64, PositiveUsize,
    parse_count_lenient, parse_target,
};
use crate::error::{AppError, AppResult, ConfigError, ValidationError};
use crate::http::TransportSettings;

use super::types::{ConfigFile, DurationValue, OutputSettings, RunConfig, RunSettings};

/// Merges CLI arguments over config file values and defaults.
///
/// Command-line values win; a positional count that cannot be parsed falls
/// through to the config file and then to the default of 1.
///
/// # Errors
///
/// Returns an error when the target is missing or invalid, or when a config
/// value is out of range.
pub fn resolve_settings(args: &BenchArgs, config: Option<&ConfigFile>) -> AppResult<RunSettings> {
    let empty = ConfigFile::default();
    let config = config.unwrap_or(&empty);

    let raw_target = args
        .target
        .as_deref()
        .or(config.target.as_deref())
        .ok_or_else(|| AppError::validation(ValidationError::MissingTarget))?;
    let target = parse_target(raw_target).map_err(AppError::validation)?;

    let requests = match parse_count_lenient::<PositiveU64>(args.requests.as_deref(), "request count")
    {
        Some(value) => value,
        None => match config.requests {
            Some(value) => ensure_positive_u64(value, "requests")?,
            None => DEFAULT_REQUESTS_PER_WORKER,
        },
    };

    let workers =
        match parse_count_lenient::<PositiveUsize>(args.workers.as_deref(), "worker count") {
            Some(value) => value,
            None => match config.workers {
                Some(value) => ensure_positive_usize(value, "workers")?,
                None => DEFAULT_WORKER_COUNT,
            },
        };

    let request_timeout = match args.timeout {
        Some(timeout) => Some(timeout),
        None => config_duration(config.timeout.as_ref(), "timeout")?,
    };
    let connect_timeout = match args.connect_timeout {
        Some(timeout) => Some(timeout),
        None => config_duration(config.connect_timeout.as_ref(), "connect_timeout")?,
    };

    let output = OutputSettings {
        format: args
            .output_format
            .or(config.output_format)
            .unwrap_or_default(),
        path: args
            .output
            .as_deref()
            .or(config.output.as_deref())
            .map(PathBuf::from),
    };

    let run = RunConfig {
        target,
        requests_per_worker: requests.get(),
        worker_count: workers.get(),
        transport: TransportSettings {
            request_timeout,
            connect_timeout,
        },
    };
    debug!(?run, ?output, "Resolved run settings.");

    Ok(RunSettings { run, output })
}

fn ensure_positive_u64(value: u64, field: &'static str) -> AppResult<PositiveU64> {
    PositiveU64::try_from(value)
        .map_err(|err| AppError::config(ConfigError::FieldOutOfRange { field, source: err }))
}

fn ensure_positive_usize(value: usize, field: &'static str) -> AppResult<PositiveUsize> {
    PositiveUsize::try_from(value)
        .map_err(|err| AppError::config(ConfigError::FieldOutOfRange { field, source: err }))
}

fn config_duration(
    value: Option<&DurationValue>,
    field: &'static str,
) -> AppResult<Option<Duration>> {
    value
        .map(|value| {
            value
                .to_duration()
                .map_err(|err| AppError::config(ConfigError::InvalidDuration { field, source: err }))
        })
        .transpose()
}
