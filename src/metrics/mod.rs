//! Per-request results and run-level aggregation.
mod aggregate;
mod types;


pub use aggregate::{
    P50_TWENTIETHS, P85_TWENTIETHS, P95_TWENTIETHS, aggregate, percentile_index,
};
pub use types::{AggregateReport, ErrorBreakdown, HttpResult, RequestErrorKind};
