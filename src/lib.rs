//! Core library for the `getbench` CLI.
//!
//! `getbench` issues repeated HTTP GET requests from a fixed number of
//! concurrent workers, records the elapsed time and outcome of every request,
//! and reports throughput plus 50th/85th/95th percentile latencies. The
//! binary only calls [`run`]; the public modules are its building blocks:
//! argument and config parsing, the per-worker request runner and work
//! distributor, result aggregation, and report rendering.
mod app;
pub mod args;
pub mod config;
mod entry;
pub mod error;
pub mod http;
pub mod metrics;
pub mod report;
mod system;

pub use entry::run;
