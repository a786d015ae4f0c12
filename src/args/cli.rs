use clap::Parser;
use std::time::Duration;

use super::parsers::parse_duration_arg;
use super::types::OutputFormat;

#[derive(Debug, Parser, Clone)]
#[command(
    version,
    allow_negative_numbers = true,
    about = "Issue repeated HTTP GET requests from concurrent workers and report throughput and latency percentiles."
)]
pub struct BenchArgs {
    /// Absolute URI to request
    #[arg(value_name = "TARGET")]
    pub target: Option<String>,

    /// Requests issued sequentially by each worker (missing or invalid values fall back to 1)
    #[arg(value_name = "REQUESTS")]
    pub requests: Option<String>,

    /// Number of concurrent workers (missing or invalid values fall back to 1)
    #[arg(value_name = "WORKERS")]
    pub workers: Option<String>,

    /// Per-request timeout (supports ms/s/m/h); requests never time out when unset
    #[arg(long, short = 't', value_parser = parse_duration_arg)]
    pub timeout: Option<Duration>,

    /// Connect timeout (supports ms/s/m/h)
    #[arg(long = "connect-timeout", value_parser = parse_duration_arg)]
    pub connect_timeout: Option<Duration>,

    /// Report format
    #[arg(long = "output-format", value_enum, ignore_case = true)]
    pub output_format: Option<OutputFormat>,

    /// Write the report to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// Path to a TOML or JSON config file (defaults to ./getbench.toml or ./getbench.json)
    #[arg(long, short = 'c')]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Disable colored log output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
