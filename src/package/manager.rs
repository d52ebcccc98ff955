//! Build runner selection and command building.
//!
//! pnpm is used when it is installed globally; otherwise npm. A failed
//! check is not fatal and falls back to npm.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::installed::is_package_installed;
use super::types::Scope;
use crate::runner::CommandRunner;

/// Package manager used to run the build script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Runner {
    /// Node Package Manager (npm)
    #[default]
    Npm,
    /// pnpm - Fast, disk space efficient package manager
    Pnpm,
}

impl Runner {
    /// Get the executable name for this runner.
    pub fn executable(&self) -> &'static str {
        match self {
            Runner::Npm => "npm",
            Runner::Pnpm => "pnpm",
        }
    }

    /// Get the base run command (without script name).
    ///
    /// - npm: "npm run"
    /// - pnpm: "pnpm"
    pub fn run_prefix(&self) -> &'static str {
        match self {
            Runner::Npm => "npm run",
            Runner::Pnpm => "pnpm",
        }
    }

    /// Format the command that runs `script`.
    ///
    /// # Examples
    ///
    /// ```
    /// use npm_release_scripts::package::Runner;
    ///
    /// assert_eq!(Runner::Npm.build_command("build"), "npm run build");
    /// assert_eq!(Runner::Pnpm.build_command("build"), "pnpm build");
    /// ```
    pub fn build_command(&self, script: &str) -> String {
        format!("{} {}", self.run_prefix(), script)
    }
}

impl fmt::Display for Runner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.executable())
    }
}

/// Pick the build runner: pnpm if installed globally, npm otherwise.
///
/// Errors while checking are logged and resolve to npm.
pub fn detect_build_runner(runner: &dyn CommandRunner) -> Runner {
    match is_package_installed(runner, "pnpm", Scope::Global) {
        Ok(true) => Runner::Pnpm,
        Ok(false) => Runner::Npm,
        Err(e) => {
            log::warn!("Couldn't check if `pnpm` is installed. Using `npm` instead. ({e})");
            Runner::Npm
        }
    }
}
