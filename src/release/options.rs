//! Typed release options.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::ReleaseConfig;
use crate::error::ReleaseError;

/// Build script run when none is configured.
pub const DEFAULT_BUILD_SCRIPT: &str = "build";

/// Remote used when none is given and none can be detected.
pub const DEFAULT_ORIGIN: &str = "origin";

/// Message of the stash a release creates and later restores.
pub const STASH_NAME: &str = "pre-release";

/// `npm publish --access` level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Access {
    /// Visible to everyone.
    #[default]
    Public,
    /// Scoped package visible to the owning org only.
    Restricted,
}

impl Access {
    /// The value passed to `--access`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Access::Public => "public",
            Access::Restricted => "restricted",
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Access {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Access::Public),
            "restricted" => Ok(Access::Restricted),
            other => Err(ReleaseError::InvalidAccess {
                value: other.to_string(),
            }),
        }
    }
}

/// Options for one release, resolved from CLI flags and config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseOptions {
    /// Print a summary when done.
    pub verbose: bool,
    /// Version to release; falls back to package.json.
    pub version: Option<String>,
    /// Remote to push the tag to; falls back to the default remote.
    pub origin: Option<String>,
    /// Publish to npm after pushing.
    pub npm: bool,
    /// Raw `--access` value, validated only when publishing.
    pub access: Option<String>,
    /// Build script; defaults to `build`.
    pub build: Option<String>,
}

impl ReleaseOptions {
    /// Fill unset or empty string options from config defaults.
    ///
    /// `npm` and `verbose` are left alone; callers resolve those switches
    /// against the config themselves.
    pub fn with_defaults(mut self, config: &ReleaseConfig) -> Self {
        if non_empty(&self.origin).is_none() {
            self.origin = config.origin.clone();
        }
        if non_empty(&self.access).is_none() {
            self.access = config.access.clone();
        }
        if non_empty(&self.build).is_none() {
            self.build = config.build.clone();
        }
        self
    }

    /// The version asked for, if any.
    pub fn requested_version(&self) -> Option<&str> {
        non_empty(&self.version)
    }

    /// The remote asked for, if any.
    pub fn requested_origin(&self) -> Option<&str> {
        non_empty(&self.origin)
    }

    /// The build script to run.
    pub fn build_script(&self) -> &str {
        non_empty(&self.build).unwrap_or(DEFAULT_BUILD_SCRIPT)
    }

    /// Parse the access level, defaulting to public.
    ///
    /// # Errors
    ///
    /// Returns [`ReleaseError::InvalidAccess`] for anything other than
    /// `public` or `restricted`.
    pub fn access(&self) -> Result<Access, ReleaseError> {
        non_empty(&self.access).map_or(Ok(Access::default()), str::parse)
    }
}

// An empty value counts as unset.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Snapshot of the process environment a release runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    /// Directory holding package.json.
    pub root: PathBuf,
}

impl Environment {
    /// Create an environment rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}
