//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;


pub use cli::BenchArgs;
pub(crate) use defaults::DEFAULT_CONFIG_FILES;
pub use defaults::{DEFAULT_REQUESTS_PER_WORKER, DEFAULT_WORKER_COUNT, MAX_COUNT};
pub use parsers::{parse_count_lenient, parse_duration_arg, parse_target};
pub use types::{OutputFormat, PositiveU64, PositiveUsize};
