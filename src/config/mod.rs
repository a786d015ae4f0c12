//! Configuration loading and merging into an immutable run configuration.
mod apply;
mod loader;
pub mod types;


pub use apply::resolve_settings;
pub use loader::{load_config, load_config_file};
pub use types::{ConfigFile, DurationValue, OutputSettings, RunConfig, RunSettings};
