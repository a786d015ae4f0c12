//! Rendering and writing of the final run report.
mod format;
mod json;
mod text;
mod writer;

#[cfg(test)]
mod tests;

pub use format::format_total_time;
pub use json::render_json;
pub use text::{SEPARATOR, render_text};
pub use writer::{render, write_report};
