//! Custom error types for nrel.
//!
//! Uses thiserror for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// Exit codes for nrel.
pub mod exit_code {
    /// Success.
    pub const SUCCESS: i32 = 0;
    /// General error (validation or release failure).
    pub const GENERAL_ERROR: i32 = 1;
    /// Invalid configuration.
    pub const INVALID_CONFIG: i32 = 5;
}

/// Main error type for nrel.
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// No package.json at the project root.
    #[error("No package.json found at {path}")]
    NoPackageJson { path: PathBuf },

    /// Failed to parse package.json with location details.
    #[error("Failed to parse package.json at {path}:\n  {message}")]
    ParseErrorWithContext { path: PathBuf, message: String },

    /// Neither `--version` nor a string `version` in package.json.
    #[error("No `version` found in `package.json`\n\nTip: Pass the version explicitly with --version <VERSION>.")]
    MissingVersion,

    /// `--access` value other than `public` or `restricted`.
    #[error("Invalid `--access` option '{value}'. `public` or `restricted` accepted.")]
    InvalidAccess { value: String },

    /// A command could not be started.
    #[error("Failed to execute: {command}: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// A command exited with a non-zero status.
    #[error("Command failed{}: {command}{}", code.map(|c| format!(" with exit code {c}")).unwrap_or_default(), stderr_suffix(stderr))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// A command produced output that could not be decoded.
    #[error("Unexpected output from `{command}`: {source}")]
    InvalidCommandOutput {
        command: String,
        #[source]
        source: serde_json::Error,
    },

    /// A step of the stash/build/tag/push/publish sequence failed.
    #[error("Error during release process: {source}\n\nTip: The \"pre-release\" stash was left in place. Restore it with `git stash list` and `git stash pop --index <N>`.")]
    ReleaseFailed {
        #[source]
        source: Box<ReleaseError>,
    },

    /// Invalid configuration file.
    #[error("Invalid config at {path}:\n  {message}\n\nTip: Check the config file syntax and ensure all values are valid.")]
    InvalidConfig { path: PathBuf, message: String },

    /// IO error with path context.
    #[error("Failed to {operation} '{path}': {source}")]
    IoWithContext {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn stderr_suffix(stderr: &str) -> String {
    let stderr = stderr.trim();
    if stderr.is_empty() {
        String::new()
    } else {
        format!("\n  {stderr}")
    }
}

impl ReleaseError {
    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ReleaseError::InvalidConfig { .. } => exit_code::INVALID_CONFIG,
            ReleaseError::NoPackageJson { .. }
            | ReleaseError::ParseErrorWithContext { .. }
            | ReleaseError::MissingVersion
            | ReleaseError::InvalidAccess { .. }
            | ReleaseError::CommandSpawn { .. }
            | ReleaseError::CommandFailed { .. }
            | ReleaseError::InvalidCommandOutput { .. }
            | ReleaseError::ReleaseFailed { .. }
            | ReleaseError::IoWithContext { .. }
            | ReleaseError::Io(_) => exit_code::GENERAL_ERROR,
        }
    }

    /// Wrap an error raised by the mutating release sequence.
    pub fn release_failed(source: ReleaseError) -> Self {
        ReleaseError::ReleaseFailed {
            source: Box::new(source),
        }
    }
}

/// Result type alias for nrel operations.
pub type Result<T> = std::result::Result<T, ReleaseError>;
