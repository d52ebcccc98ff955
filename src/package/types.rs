//! Type definitions for package.json and `npm list --json` output.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The subset of package.json a release reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageJson {
    /// Package name.
    #[serde(default)]
    pub name: Option<String>,

    /// Package version, kept raw so a non-string value can be rejected.
    #[serde(default)]
    pub version: Option<serde_json::Value>,
}

impl PackageJson {
    /// Get the version when it is a non-empty string.
    pub fn version_str(&self) -> Option<&str> {
        self.version
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .filter(|v| !v.is_empty())
    }
}

/// Where `npm list` looks for packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    /// The current project's `node_modules`.
    #[default]
    Local,
    /// Globally installed packages (`-g`).
    Global,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Local => f.write_str("local"),
            Scope::Global => f.write_str("global"),
        }
    }
}

/// An installed package as reported by `npm list --json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Installed version.
    #[serde(default)]
    pub version: Option<String>,

    /// Whether an `overrides` entry replaced it.
    #[serde(default)]
    pub overridden: bool,

    /// Resolution source, present for local trees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved: Option<String>,
}

/// Top-level `npm list --json` document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyTree {
    /// Project name (or `lib` for the global prefix).
    #[serde(default)]
    pub name: Option<String>,

    /// Project version; absent for global trees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Installed packages by name.
    #[serde(default)]
    pub dependencies: BTreeMap<String, Dependency>,
}

impl DependencyTree {
    /// Check if `name` appears among the top-level dependencies.
    pub fn contains(&self, name: &str) -> bool {
        self.dependencies.contains_key(name)
    }
}
