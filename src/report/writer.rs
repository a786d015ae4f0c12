use std::io::Write as _;

use tracing::info;

use crate::args::OutputFormat;
use crate::config::OutputSettings;
use crate::error::{AppError, AppResult, ReportError};
use crate::metrics::AggregateReport;

use super::json::render_json;
use super::text::render_text;

/// Renders the report in the requested format.
///
/// # Errors
///
/// Returns an error if the report cannot be rendered.
pub fn render(report: &AggregateReport, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => render_text(report),
        OutputFormat::Json => render_json(report),
    }
}

/// Renders the whole report first, then writes it to the configured file or stdout.
///
/// # Errors
///
/// Returns an error if rendering or writing fails.
pub async fn write_report(report: &AggregateReport, output: &OutputSettings) -> AppResult<()> {
    let rendered = render(report, output.format)?;

    if let Some(path) = output.path.as_ref() {
        tokio::fs::write(path, rendered.as_bytes())
            .await
            .map_err(|err| {
                AppError::report(ReportError::WriteFile {
                    path: path.clone(),
                    source: err,
                })
            })?;
        info!("Report written to {}", path.display());
        return Ok(());
    }

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|err| AppError::report(ReportError::WriteStdout { source: err }))
}
