use super::types::{PositiveU64, PositiveUsize};

pub const DEFAULT_REQUESTS_PER_WORKER: PositiveU64 = PositiveU64::ONE;
pub const DEFAULT_WORKER_COUNT: PositiveUsize = PositiveUsize::ONE;

/// Config filenames checked in the working directory when `--config` is absent.
pub(crate) const DEFAULT_CONFIG_FILES: [&str; 2] = ["getbench.toml", "getbench.json"];

/// Largest accepted request or worker count. Larger values are treated like
/// any other out-of-range input.
pub const MAX_COUNT: u64 = 2_147_483_647;
