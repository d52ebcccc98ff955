//! package.json reading and pre-release tag extraction.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::types::PackageJson;
use crate::error::{ReleaseError, Result};

static PRE_RELEASE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    // `-<word>.<number>` as in 1.0.0-beta.1
    Regex::new(r"-(\w+)\.\d+").expect("pre-release pattern is valid")
});

/// Read `package.json` from `root`.
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable or not valid JSON.
pub fn read_package_json(root: &Path) -> Result<PackageJson> {
    let path = root.join("package.json");
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ReleaseError::NoPackageJson { path });
        }
        Err(source) => {
            return Err(ReleaseError::IoWithContext {
                operation: "read".to_string(),
                path,
                source,
            });
        }
    };

    parse_package_json(&content).map_err(|message| ReleaseError::ParseErrorWithContext {
        path,
        message,
    })
}

/// Parse package.json content.
///
/// # Errors
///
/// Returns a formatted message pointing at the offending line on failure.
pub fn parse_package_json(content: &str) -> std::result::Result<PackageJson, String> {
    serde_json::from_str(content).map_err(|e| format_json_error(content, &e))
}

/// Extract the pre-release identifier from a version.
///
/// # Examples
///
/// ```
/// use npm_release_scripts::package::pre_release_tag;
///
/// assert_eq!(pre_release_tag("1.0.0-beta.1").as_deref(), Some("beta"));
/// assert_eq!(pre_release_tag("1.0.0"), None);
/// ```
pub fn pre_release_tag(version: &str) -> Option<String> {
    PRE_RELEASE_TAG
        .captures(version)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Format a JSON parsing error with context.
fn format_json_error(content: &str, error: &serde_json::Error) -> String {
    let line = error.line();
    let column = error.column();

    if let Some(error_line) = content.lines().nth(line.saturating_sub(1)) {
        let pointer = " ".repeat(column.saturating_sub(1)) + "^";
        format!(
            "{}\n  at line {}, column {}:\n    {}\n    {}",
            error, line, column, error_line, pointer
        )
    } else {
        format!("{} at line {}, column {}", error, line, column)
    }
}
