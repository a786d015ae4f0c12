use super::*;
use crate::args::OutputFormat;
use crate::config::OutputSettings;
use crate::metrics::{AggregateReport, ErrorBreakdown, HttpResult, RequestErrorKind, aggregate};
use std::time::Duration;
use tempfile::tempdir;

fn sample_report() -> AggregateReport {
    let results = vec![
        HttpResult::success(10),
        HttpResult::success(20),
        HttpResult::success(30),
        HttpResult::failure(40, RequestErrorKind::Connect),
        HttpResult::success(50),
    ];
    aggregate(&results, Duration::from_millis(150), 1)
}

#[test]
fn total_time_uses_tick_precision() -> Result<(), String> {
    let cases = [
        (Duration::from_millis(150), "00:00:00.1500000"),
        (Duration::from_nanos(1_234_567_890), "00:00:01.2345678"),
        (Duration::from_secs(3_723), "01:02:03.0000000"),
        (Duration::ZERO, "00:00:00.0000000"),
    ];
    for (duration, expected) in cases {
        let formatted = format_total_time(duration);
        if formatted != expected {
            return Err(format!("{:?}: expected {}, got {}", duration, expected, formatted));
        }
    }
    Ok(())
}

#[test]
fn text_report_has_fixed_labels_in_order() -> Result<(), String> {
    let rendered = render_text(&sample_report()).map_err(|err| err.to_string())?;
    let lines: Vec<&str> = rendered.lines().collect();
    let expected = [
        SEPARATOR,
        "Total time taken:    00:00:00.1500000",
        "Total requests:      5",
        "Total errors:        1",
        "Throughput QPS:      33.33",
        "Parallel count:      1",
        "50th percentile:     30",
        "85th percentile:     50",
        "95th percentile:     50",
        SEPARATOR,
    ];
    if lines != expected {
        return Err(format!("Unexpected report:\n{}", rendered));
    }
    Ok(())
}

#[test]
fn text_report_marks_uncomputed_values() -> Result<(), String> {
    let report = AggregateReport {
        total_wall_time: Duration::ZERO,
        total_requests: 0,
        error_count: 0,
        throughput_qps: None,
        worker_count: 2,
        p50_ms: None,
        p85_ms: None,
        p95_ms: None,
        errors_by_kind: ErrorBreakdown::default(),
    };
    let rendered = render_text(&report).map_err(|err| err.to_string())?;
    for label in ["Throughput QPS:      n/a", "50th percentile:     n/a", "95th percentile:     n/a"] {
        if !rendered.contains(label) {
            return Err(format!("Missing '{}' in:\n{}", label, rendered));
        }
    }
    Ok(())
}

#[test]
fn json_report_contains_all_metrics() -> Result<(), String> {
    let rendered = render(&sample_report(), OutputFormat::Json).map_err(|err| err.to_string())?;
    let value: serde_json::Value =
        serde_json::from_str(&rendered).map_err(|err| format!("invalid json: {}", err))?;
    let expect_u64 = |key: &str, expected: u64| -> Result<(), String> {
        match value.get(key).and_then(serde_json::Value::as_u64) {
            Some(actual) if actual == expected => Ok(()),
            other => Err(format!("{}: expected {}, got {:?}", key, expected, other)),
        }
    };
    expect_u64("total_requests", 5)?;
    expect_u64("error_count", 1)?;
    expect_u64("worker_count", 1)?;
    expect_u64("total_time_ms", 150)?;
    expect_u64("p50_ms", 30)?;
    expect_u64("p85_ms", 50)?;
    expect_u64("p95_ms", 50)?;
    let connect = value
        .get("errors_by_kind")
        .and_then(|kinds| kinds.get("connect"))
        .and_then(serde_json::Value::as_u64);
    if connect != Some(1) {
        return Err(format!("Unexpected connect errors: {:?}", connect));
    }
    if value.get("throughput_qps").and_then(serde_json::Value::as_f64).is_none() {
        return Err("Expected numeric throughput".to_owned());
    }
    Ok(())
}

#[test]
fn write_report_to_file() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("report.txt");
    let output = OutputSettings {
        format: OutputFormat::Text,
        path: Some(path.clone()),
    };
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| format!("Failed to build runtime: {}", err))?;
    runtime
        .block_on(write_report(&sample_report(), &output))
        .map_err(|err| err.to_string())?;

    let written = std::fs::read_to_string(&path).map_err(|err| format!("read failed: {}", err))?;
    if !written.starts_with(SEPARATOR) || !written.contains("Total errors:        1") {
        return Err(format!("Unexpected file contents:\n{}", written));
    }
    Ok(())
}
