//! Test fixtures for integration tests.
//!
//! Provides a scripted [`CommandRunner`] and helpers for temporary projects.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

use npm_release_scripts::error::{ReleaseError, Result};
use npm_release_scripts::runner::{CommandRunner, Stdio};

/// Response of a scripted command.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Succeed with this stdout.
    Output(String),
    /// Exit with a non-zero status.
    Fail,
}

/// A [`CommandRunner`] that answers from a script and records every call.
///
/// Unscripted inherited commands succeed silently; unscripted captured
/// commands fail as if the command did not exist.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    replies: HashMap<String, Reply>,
    calls: RefCell<Vec<(String, Stdio)>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `command` with `lines` joined by newlines.
    pub fn reply(mut self, command: &str, lines: &[&str]) -> Self {
        let mut output = lines.join("\n");
        output.push('\n');
        self.replies
            .insert(command.to_string(), Reply::Output(output));
        self
    }

    /// Make `command` exit with an error.
    pub fn fail(mut self, command: &str) -> Self {
        self.replies.insert(command.to_string(), Reply::Fail);
        self
    }

    /// All commands run so far, in order.
    pub fn commands(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(c, _)| c.clone()).collect()
    }

    /// Commands run with inherited stdio, in order.
    pub fn executed(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter(|(_, stdio)| *stdio == Stdio::Inherit)
            .map(|(c, _)| c.clone())
            .collect()
    }

    /// Check whether `command` ran.
    pub fn ran(&self, command: &str) -> bool {
        self.calls.borrow().iter().any(|(c, _)| c == command)
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, command: &str, stdio: Stdio) -> Result<String> {
        self.calls.borrow_mut().push((command.to_string(), stdio));

        match (self.replies.get(command), stdio) {
            (Some(Reply::Output(out)), _) => Ok(out.clone()),
            (Some(Reply::Fail), _) => Err(ReleaseError::CommandFailed {
                command: command.to_string(),
                code: Some(1),
                stderr: "mock failure".to_string(),
            }),
            (None, Stdio::Inherit) => Ok(String::new()),
            (None, Stdio::Capture) => Err(ReleaseError::CommandFailed {
                command: command.to_string(),
                code: Some(127),
                stderr: format!("command not found: {command}"),
            }),
        }
    }
}

/// Standard `git remote -v` output with three remotes.
pub fn standard_remotes() -> Vec<&'static str> {
    vec![
        "another-remote\tgit@github.com:username/another-remote.git (fetch)",
        "another-remote\tgit@github.com:username/another-remote.git (push)",
        "origin\tgit@github.com:username/project-name.git (fetch)",
        "origin\tgit@github.com:username/project-name.git (push)",
        "project-2\tgit@github.com:username/project-name-2.git (fetch)",
        "project-2\tgit@github.com:username/project-name-2.git (push)",
    ]
}

/// Standard `git stash list` output with three stashes.
pub fn standard_stashes() -> Vec<&'static str> {
    vec![
        "stash@{0}: On master: stash-1",
        "stash@{1}: On master: stash-2",
        "stash@{2}: On another-branch: stash-3",
    ]
}

/// `npm list --json -g` output without pnpm.
pub const GLOBAL_PACKAGES: &str = r#"{
  "name": "lib",
  "dependencies": {
    "npm-check-updates": { "version": "17.1.11", "overridden": false },
    "typescript": { "version": "5.7.2", "overridden": false }
  }
}"#;

/// `npm list --json -g` output with pnpm.
pub const GLOBAL_PACKAGES_WITH_PNPM: &str = r#"{
  "name": "lib",
  "dependencies": {
    "npm-check-updates": { "version": "17.1.11", "overridden": false },
    "pnpm": { "version": "9.15.2", "overridden": false },
    "typescript": { "version": "5.7.2", "overridden": false }
  }
}"#;

/// Create a temporary project with the given package.json content.
pub fn create_project(package_json: &str) -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp directory");
    fs::write(temp.path().join("package.json"), package_json)
        .expect("Failed to write package.json");
    temp
}

/// Create a temporary project without package.json.
pub fn create_empty_project() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Run git in `dir` with a throwaway identity.
pub fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args([
            "-c",
            "user.name=nrel",
            "-c",
            "user.email=nrel@example.com",
            "-c",
            "commit.gpgsign=false",
        ])
        .args(args)
        .current_dir(dir)
        .status()
        .expect("Failed to run git");
    assert!(status.success(), "git {args:?} failed");
}

/// Create a temporary git repository with the given package.json content and
/// an `origin` remote.
pub fn create_git_project(package_json: &str) -> TempDir {
    let temp = create_project(package_json);
    git(temp.path(), &["init", "-q"]);
    git(
        temp.path(),
        &[
            "remote",
            "add",
            "origin",
            "git@github.com:username/project-name.git",
        ],
    );
    temp
}
