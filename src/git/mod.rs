//! Git module for nrel.
//!
//! Parses `git remote -v`, `git branch -rl '*/HEAD'` and `git stash list`
//! output and wraps the git commands a release runs.

mod remote;
mod stash;

pub use remote::{
    get_default_remote, get_default_remote_and_branch, get_remotes,
    parse_default_remote_and_branch, parse_remotes, Remote, RemoteUrls, Remotes, UpstreamHead,
    UrlType, REMOTE_HEAD_COMMAND, REMOTE_LIST_COMMAND,
};
pub use stash::{
    find_stash, format_stash, format_stash_list, get_stash_by, get_stash_list, parse_stash_list,
    pop_stash_by_index, save_stash, Stash, StashSelector, DEFAULT_STASH_BRANCH,
    STASH_LIST_COMMAND,
};

use crate::error::Result;
use crate::runner::CommandRunner;

/// Create a lightweight tag.
///
/// # Errors
///
/// Returns an error if `git tag` fails.
pub fn create_tag(runner: &dyn CommandRunner, tag: &str) -> Result<()> {
    runner.exec(&format!("git tag {tag}"))
}

/// Push a single tag to `origin`.
///
/// # Errors
///
/// Returns an error if `git push` fails.
pub fn push_tag(runner: &dyn CommandRunner, origin: &str, tag: &str) -> Result<()> {
    runner.exec(&format!("git push {origin} tag {tag}"))
}
