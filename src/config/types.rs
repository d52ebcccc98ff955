//! Configuration type definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Defaults for `nrel release`, overridden by CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseConfig {
    /// Build script to run before tagging.
    #[serde(default)]
    pub build: Option<String>,
    /// npm publish access level.
    #[serde(default)]
    pub access: Option<String>,
    /// Remote to push the tag to.
    #[serde(default)]
    pub origin: Option<String>,
    /// Publish to npm after pushing the tag.
    #[serde(default)]
    pub npm: Option<bool>,
    /// Print a summary when the release completes.
    #[serde(default)]
    pub verbose: Option<bool>,
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Release defaults.
    #[serde(default)]
    pub release: ReleaseConfig,
}

impl Config {
    /// Get the config file path for the user's home directory.
    pub fn user_config_path() -> Option<PathBuf> {
        crate::utils::global_config_file()
    }

    /// Merge another config into this one (other takes precedence for set values).
    pub fn merge(&mut self, other: Config) {
        let release = other.release;
        if release.build.is_some() {
            self.release.build = release.build;
        }
        if release.access.is_some() {
            self.release.access = release.access;
        }
        if release.origin.is_some() {
            self.release.origin = release.origin;
        }
        if release.npm.is_some() {
            self.release.npm = release.npm;
        }
        if release.verbose.is_some() {
            self.release.verbose = release.verbose;
        }
    }
}
