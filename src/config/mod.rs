//! Configuration module for nrel.
//!
//! Handles loading and merging configuration from multiple sources:
//! - CLI arguments (highest priority)
//! - `--config <path>`
//! - Project-level `.releaserc.toml`
//! - User-level `~/.config/nrel/config.toml`

pub mod file;
mod types;

pub use file::{generate_example_config, load_config, PROJECT_CONFIG_FILE};
pub use types::{Config, ReleaseConfig};
