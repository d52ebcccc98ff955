//! Path utilities.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::PROJECT_CONFIG_FILE;

/// Resolve the project root.
///
/// Priority: an explicit path, then `INIT_CWD` (set by npm/pnpm for
/// lifecycle scripts), then `cwd`.
pub fn resolve_project_root(
    explicit: Option<&Path>,
    init_cwd: Option<OsString>,
    cwd: &Path,
) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    match init_cwd {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => cwd.to_path_buf(),
    }
}

/// Get the config directory for nrel.
///
/// Returns `~/.config/nrel` on Unix-like systems.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("nrel"))
}

/// Get the global config file path.
///
/// Returns `~/.config/nrel/config.toml`.
pub fn global_config_file() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

/// Find local config file in project directory.
pub fn local_config_file(project_dir: &Path) -> Option<PathBuf> {
    let config_file = project_dir.join(PROJECT_CONFIG_FILE);
    if config_file.exists() {
        Some(config_file)
    } else {
        None
    }
}
