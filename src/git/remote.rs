//! Git remote parsing and default-remote resolution.

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::runner::CommandRunner;

/// Command listing remotes with their URLs.
pub const REMOTE_LIST_COMMAND: &str = "git remote -v";

/// Command listing the remote-tracking ref `HEAD` points at.
pub const REMOTE_HEAD_COMMAND: &str = "git branch -rl '*/HEAD'";

/// The kind of URL a remote entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlType {
    /// URL used by `git fetch`.
    Fetch,
    /// URL used by `git push`.
    Push,
}

impl UrlType {
    /// Parse the label found between parentheses in `git remote -v` output.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "fetch" => Some(UrlType::Fetch),
            "push" => Some(UrlType::Push),
            _ => None,
        }
    }
}

impl fmt::Display for UrlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlType::Fetch => f.write_str("fetch"),
            UrlType::Push => f.write_str("push"),
        }
    }
}

/// Fetch and push URLs of a remote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RemoteUrls {
    #[serde(skip_serializing_if = "Option::is_none")]
    fetch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    push: Option<String>,
}

impl RemoteUrls {
    /// Get the URL of the given type.
    pub fn get(&self, kind: UrlType) -> Option<&str> {
        match kind {
            UrlType::Fetch => self.fetch.as_deref(),
            UrlType::Push => self.push.as_deref(),
        }
    }

    /// Number of URLs recorded (at most two).
    pub fn len(&self) -> usize {
        usize::from(self.fetch.is_some()) + usize::from(self.push.is_some())
    }

    /// Check if no URL is recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn set(&mut self, kind: UrlType, url: String) {
        match kind {
            UrlType::Fetch => self.fetch = Some(url),
            UrlType::Push => self.push = Some(url),
        }
    }
}

/// A Git remote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Remote {
    name: String,
    urls: RemoteUrls,
}

impl Remote {
    /// Get the remote name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the remote URLs.
    pub fn urls(&self) -> &RemoteUrls {
        &self.urls
    }

    /// Shorthand for `urls().get(UrlType::Fetch)`.
    pub fn fetch_url(&self) -> Option<&str> {
        self.urls.get(UrlType::Fetch)
    }

    /// Shorthand for `urls().get(UrlType::Push)`.
    pub fn push_url(&self) -> Option<&str> {
        self.urls.get(UrlType::Push)
    }
}

/// Remotes in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Remotes {
    remotes: Vec<Remote>,
}

impl Remotes {
    /// Get a remote by name.
    pub fn get(&self, name: &str) -> Option<&Remote> {
        self.remotes.iter().find(|r| r.name == name)
    }

    /// Check whether a remote exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The first remote listed.
    pub fn first(&self) -> Option<&Remote> {
        self.remotes.first()
    }

    /// Get the number of remotes.
    pub fn len(&self) -> usize {
        self.remotes.len()
    }

    /// Check if there are no remotes.
    pub fn is_empty(&self) -> bool {
        self.remotes.is_empty()
    }

    /// Iterate over remotes in order.
    pub fn iter(&self) -> impl Iterator<Item = &Remote> {
        self.remotes.iter()
    }

    fn entry(&mut self, name: &str) -> &mut Remote {
        let pos = match self.remotes.iter().position(|r| r.name == name) {
            Some(pos) => pos,
            None => {
                self.remotes.push(Remote {
                    name: name.to_string(),
                    urls: RemoteUrls::default(),
                });
                self.remotes.len() - 1
            }
        };
        &mut self.remotes[pos]
    }
}

impl IntoIterator for Remotes {
    type Item = Remote;
    type IntoIter = std::vec::IntoIter<Remote>;

    fn into_iter(self) -> Self::IntoIter {
        self.remotes.into_iter()
    }
}

/// Split `url (type)` into the URL and its optional label.
fn split_url_and_label(rest: &str) -> (&str, Option<&str>) {
    match rest.rsplit_once(' ') {
        Some((url, suffix)) => match suffix.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
            Some(label) => (url.trim(), Some(label)),
            None => (rest.trim(), None),
        },
        None => (rest.trim(), None),
    }
}

/// Parse `git remote -v` output.
///
/// Each line is `name<TAB>url (type)` or `name<TAB>url`. Lines missing a name
/// or a URL are skipped. An unlabeled URL fills the fetch slot first and the
/// push slot after that.
///
/// # Examples
///
/// ```
/// use npm_release_scripts::git::{parse_remotes, UrlType};
///
/// let remotes = parse_remotes("origin\tgit@host:a.git (fetch)\norigin\tgit@host:a.git (push)\n");
/// let origin = remotes.get("origin").unwrap();
/// assert_eq!(origin.urls().get(UrlType::Push), Some("git@host:a.git"));
/// ```
pub fn parse_remotes(output: &str) -> Remotes {
    let mut remotes = Remotes::default();

    for line in output.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }

        let Some((name, rest)) = line.split_once('\t') else {
            continue;
        };
        let name = name.trim();
        let (url, label) = split_url_and_label(rest);

        if name.is_empty() || url.is_empty() {
            continue;
        }

        let remote = remotes.entry(name);
        let kind = match label.and_then(UrlType::from_label) {
            Some(kind) => kind,
            None if remote.urls.fetch.is_none() => UrlType::Fetch,
            None => UrlType::Push,
        };
        remote.urls.set(kind, url.to_string());
    }

    remotes
}

/// The remote and branch `HEAD` tracks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpstreamHead {
    /// Remote name, e.g. `origin`.
    pub remote: String,
    /// Branch name on that remote, e.g. `main`.
    pub branch: String,
}

/// Parse `git branch -rl '*/HEAD'` output (`  origin/HEAD -> origin/main`).
///
/// Returns `None` when there is no output or the `->` separator is missing.
pub fn parse_default_remote_and_branch(output: &str) -> Option<UpstreamHead> {
    let line = output.lines().find(|line| !line.trim().is_empty())?;
    let (_, target) = line.split_once("->")?;
    let (remote, branch) = target.trim().split_once('/')?;

    if remote.is_empty() || branch.is_empty() {
        return None;
    }

    Some(UpstreamHead {
        remote: remote.to_string(),
        branch: branch.to_string(),
    })
}

/// Get the remotes of the current repository.
///
/// # Errors
///
/// Returns an error if `git remote -v` fails.
pub fn get_remotes(runner: &dyn CommandRunner) -> Result<Remotes> {
    let output = runner.output(REMOTE_LIST_COMMAND)?;
    Ok(parse_remotes(&output))
}

/// Get the remote and branch that `HEAD` tracks, if any.
///
/// # Errors
///
/// Returns an error if `git branch` fails.
pub fn get_default_remote_and_branch(runner: &dyn CommandRunner) -> Result<Option<UpstreamHead>> {
    let output = runner.output(REMOTE_HEAD_COMMAND)?;
    Ok(parse_default_remote_and_branch(&output))
}

/// Get the default remote.
///
/// Uses the remote `HEAD` tracks when known, otherwise the first remote
/// listed. Returns `None` when the repository has no usable remote.
///
/// # Errors
///
/// Returns an error if one of the underlying git commands fails.
pub fn get_default_remote(runner: &dyn CommandRunner) -> Result<Option<Remote>> {
    let head = get_default_remote_and_branch(runner)?;
    let remotes = get_remotes(runner)?;

    let remote = match head {
        Some(head) => remotes.get(&head.remote).cloned(),
        None => remotes.first().cloned(),
    };

    Ok(remote)
}
