use tracing::info;

use crate::app::run_bench;
use crate::args::BenchArgs;
use crate::config::{RunSettings, load_config, resolve_settings};
use crate::error::AppResult;

pub(super) fn build_plan(args: &BenchArgs) -> AppResult<RunSettings> {
    let config = load_config(args.config.as_deref())?;
    if config.is_some() {
        info!("Loaded configuration file.");
    }
    resolve_settings(args, config.as_ref())
}

pub(super) async fn execute_plan(plan: RunSettings) -> AppResult<()> {
    let report = run_bench(plan.run).await?;
    crate::report::write_report(&report, &plan.output).await
}
