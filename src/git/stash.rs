//! Git stash listing, lookup and restore.

use serde::Serialize;

use crate::error::Result;
use crate::runner::CommandRunner;

/// Command listing stash entries.
pub const STASH_LIST_COMMAND: &str = "git stash list";

/// Branch assumed when a stash line does not name one.
pub const DEFAULT_STASH_BRANCH: &str = "main";

/// A `git stash list` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stash {
    /// Position in the stash list, 0 being the most recent.
    pub index: usize,
    /// Branch the stash was created on.
    pub branch: String,
    /// Stash message, if any.
    pub name: Option<String>,
}

/// How to look up a stash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StashSelector {
    /// Match `stash@{N}`.
    Index(usize),
    /// Match the stash message exactly.
    Name(String),
}

impl StashSelector {
    /// Select by message.
    pub fn name(name: impl Into<String>) -> Self {
        StashSelector::Name(name.into())
    }

    fn matches(&self, stash: &Stash) -> bool {
        match self {
            StashSelector::Index(index) => stash.index == *index,
            StashSelector::Name(name) => stash.name.as_deref() == Some(name.as_str()),
        }
    }
}

fn last_word(chunk: &str) -> Option<&str> {
    chunk.split(' ').next_back().filter(|word| !word.is_empty())
}

/// Parse one `git stash list` line.
///
/// Lines look like `stash@{N}: WIP on <branch>: <name>`; the label and name
/// segments may be missing. Returns `None` when `N` is not a valid index.
///
/// # Examples
///
/// ```
/// use npm_release_scripts::git::format_stash;
///
/// let stash = format_stash("stash@{0}: WIP on main: 1234567 Commit message").unwrap();
/// assert_eq!(stash.index, 0);
/// assert_eq!(stash.branch, "main");
/// assert_eq!(stash.name.as_deref(), Some("1234567 Commit message"));
/// ```
pub fn format_stash(line: &str) -> Option<Stash> {
    let line = line.trim_end();
    let mut chunks = line.splitn(3, ": ");

    let reference = chunks.next()?;
    let label = chunks.next();
    let message = chunks.next();

    let (_, after) = reference.split_once("@{")?;
    let (digits, _) = after.split_once('}')?;
    let index = digits.parse::<usize>().ok()?;

    let branch = match (label, message) {
        (Some(label), Some(_)) => last_word(label).unwrap_or(DEFAULT_STASH_BRANCH),
        _ => DEFAULT_STASH_BRANCH,
    };

    let name = match (label, message) {
        (_, Some(message)) => Some(message),
        (Some(label), None) => last_word(label),
        (None, None) => None,
    };

    Some(Stash {
        index,
        branch: branch.to_string(),
        name: name.map(str::to_string),
    })
}

/// Parse each line, keeping `None` for lines that are not stash entries.
pub fn format_stash_list<S: AsRef<str>>(lines: &[S]) -> Vec<Option<Stash>> {
    lines.iter().map(|line| format_stash(line.as_ref())).collect()
}

/// Parse `git stash list` output, dropping lines that do not parse.
pub fn parse_stash_list(output: &str) -> Vec<Stash> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(format_stash)
        .collect()
}

/// Find the first stash matching `selector`.
pub fn find_stash<'a>(stashes: &'a [Stash], selector: &StashSelector) -> Option<&'a Stash> {
    stashes.iter().find(|stash| selector.matches(stash))
}

/// Get the stash list of the current repository.
///
/// # Errors
///
/// Returns an error if `git stash list` fails.
pub fn get_stash_list(runner: &dyn CommandRunner) -> Result<Vec<Stash>> {
    let output = runner.output(STASH_LIST_COMMAND)?;
    Ok(parse_stash_list(&output))
}

/// Look up a stash by index or name.
///
/// # Errors
///
/// Returns an error if `git stash list` fails.
pub fn get_stash_by(runner: &dyn CommandRunner, selector: &StashSelector) -> Result<Option<Stash>> {
    let stashes = get_stash_list(runner)?;
    Ok(find_stash(&stashes, selector).cloned())
}

/// Stash tracked and untracked changes under `message`.
///
/// # Errors
///
/// Returns an error if `git stash save` fails.
pub fn save_stash(runner: &dyn CommandRunner, message: &str) -> Result<()> {
    runner.exec(&format!("git stash save -u -m \"{message}\""))
}

/// Restore the stash at `index` rather than the top of the stack.
///
/// # Errors
///
/// Returns an error if `git stash pop` fails.
pub fn pop_stash_by_index(runner: &dyn CommandRunner, index: usize) -> Result<()> {
    runner.exec(&format!("git stash pop --index {index}"))
}
