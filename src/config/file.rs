//! Configuration file loading and parsing.

use std::fs;
use std::path::Path;

use crate::error::{ReleaseError, Result};

use super::types::Config;

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = ".releaserc.toml";

/// Load configuration from the specified path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|source| ReleaseError::IoWithContext {
        operation: "read config file".to_string(),
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|e| ReleaseError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })
}

/// Load configuration with proper priority and merging.
///
/// Searches for config files in order of priority (lowest to highest):
/// 1. `~/.config/nrel/config.toml` (user-level, lowest priority)
/// 2. `.releaserc.toml` in project root (project-level)
/// 3. CLI argument `--config <path>` (highest priority)
///
/// Missing default config files are handled gracefully; broken ones are
/// logged and skipped.
///
/// # Errors
///
/// Returns an error if the CLI-specified config file cannot be read or parsed.
pub fn load_config(cli_config_path: Option<&Path>, project_dir: &Path) -> Result<Config> {
    let mut config = Config::default();

    if let Some(user_config_path) = Config::user_config_path() {
        merge_optional(&mut config, &user_config_path, "user");
    }

    if let Some(project_config_path) = crate::utils::local_config_file(project_dir) {
        merge_optional(&mut config, &project_config_path, "project");
    }

    if let Some(cli_path) = cli_config_path {
        config.merge(load_config_from_path(cli_path)?);
    }

    Ok(config)
}

fn merge_optional(config: &mut Config, path: &Path, level: &str) {
    if !path.exists() {
        return;
    }

    match load_config_from_path(path) {
        Ok(loaded) => {
            log::debug!("Loaded {level} config from {}", path.display());
            config.merge(loaded);
        }
        Err(e) => {
            log::warn!(
                "Failed to load {level} config at {}: {e}",
                path.display()
            );
        }
    }
}

/// Generate an example configuration file with all options documented.
pub fn generate_example_config() -> String {
    r#"# nrel Configuration File
# Place this file at ~/.config/nrel/config.toml for global settings
# or .releaserc.toml in your project directory for project-specific settings.
# Command-line flags always win.

[release]
# Build script run before tagging (npm run <build> / pnpm <build>)
build = "build"

# Access level for `npm publish`: "public" or "restricted"
access = "public"

# Remote to push the version tag to (default: the remote HEAD tracks)
# origin = "origin"

# Publish to npm after pushing the tag
npm = false

# Print a JSON summary after a successful release
verbose = false
"#
    .to_string()
}
