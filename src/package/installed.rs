//! Installed-package lookup through `npm list --json`.

use super::types::{DependencyTree, Scope};
use crate::error::{ReleaseError, Result};
use crate::runner::CommandRunner;

/// The `npm list` command for a scope.
pub fn list_command(scope: Scope) -> &'static str {
    match scope {
        Scope::Local => "npm list --json",
        Scope::Global => "npm list --json -g",
    }
}

/// Get the dependency tree npm reports for `scope`.
///
/// # Errors
///
/// Returns an error if `npm list` fails or prints something other than JSON.
pub fn list_packages(runner: &dyn CommandRunner, scope: Scope) -> Result<DependencyTree> {
    let command = list_command(scope);
    let output = runner.output(command)?;

    serde_json::from_str(&output).map_err(|source| ReleaseError::InvalidCommandOutput {
        command: command.to_string(),
        source,
    })
}

/// Check whether `name` is installed in `scope`.
///
/// # Errors
///
/// Returns an error if the dependency tree cannot be obtained.
pub fn is_package_installed(runner: &dyn CommandRunner, name: &str, scope: Scope) -> Result<bool> {
    Ok(list_packages(runner, scope)?.contains(name))
}
