mod plan;

use std::ffi::OsString;
use std::path::Path;

use clap::{CommandFactory, FromArgMatches};

use crate::args::{BenchArgs, DEFAULT_CONFIG_FILES};
use crate::error::AppResult;
use plan::{build_plan, execute_plan};

/// Printed when the run is rejected before any request is issued.
const INVALID_TARGET_MESSAGE: &str = "Unspecified or invalid URI address";

/// Parses the command line, runs the benchmark and prints the report.
///
/// # Errors
///
/// Returns an error when the configuration is unusable, a worker cannot be
/// started, or the report cannot be written. An invalid target is reported on
/// stdout and is not an error.
pub fn run() -> AppResult<()> {
    let Some(args) = parse_args()? else {
        return Ok(());
    };

    crate::system::logger::init_logging(args.verbose, args.no_color);

    let plan = match build_plan(&args) {
        Ok(plan) => plan,
        Err(err) if err.is_target_error() => {
            println!("{}", INVALID_TARGET_MESSAGE);
            tracing::error!("{}", err);
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(execute_plan(plan))
}

fn parse_args() -> AppResult<Option<BenchArgs>> {
    let mut cmd = BenchArgs::command();
    let raw_args: Vec<OsString> = std::env::args_os().collect();

    if should_show_help(&raw_args) {
        println!("{}", INVALID_TARGET_MESSAGE);
        cmd.print_help()?;
        println!();
        return Ok(None);
    }

    let matches = cmd.get_matches_from(raw_args);
    let args = BenchArgs::from_arg_matches(&matches)?;

    Ok(Some(args))
}

fn should_show_help(raw_args: &[OsString]) -> bool {
    let treat_as_empty =
        matches!(raw_args, [] | [_]) || matches!(raw_args, [_, second] if second == "--");
    if !treat_as_empty {
        return false;
    }

    !has_default_config()
}

fn has_default_config() -> bool {
    DEFAULT_CONFIG_FILES
        .iter()
        .any(|path| Path::new(path).exists())
}
