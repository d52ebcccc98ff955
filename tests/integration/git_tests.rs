//! Git query tests against scripted command output.

use npm_release_scripts::git::{
    get_default_remote, get_default_remote_and_branch, get_remotes, get_stash_by, get_stash_list,
    pop_stash_by_index, save_stash, StashSelector, UrlType, REMOTE_HEAD_COMMAND,
    REMOTE_LIST_COMMAND, STASH_LIST_COMMAND,
};

use crate::integration::fixtures::{standard_remotes, standard_stashes, ScriptedRunner};

fn standard_runner() -> ScriptedRunner {
    ScriptedRunner::new()
        .reply(REMOTE_HEAD_COMMAND, &["\torigin/HEAD -> origin/master"])
        .reply(REMOTE_LIST_COMMAND, &standard_remotes())
        .reply(STASH_LIST_COMMAND, &standard_stashes())
}

// ==================== Remotes ====================

#[test]
fn test_get_remotes() {
    let runner = standard_runner();
    let remotes = get_remotes(&runner).unwrap();

    assert_eq!(remotes.len(), 3);
    assert_eq!(
        remotes.get("origin").unwrap().urls().get(UrlType::Fetch),
        Some("git@github.com:username/project-name.git")
    );
    assert_eq!(runner.commands(), vec!["git remote -v"]);
}

#[test]
fn test_get_remotes_infers_url_types() {
    let runner = ScriptedRunner::new().reply(
        REMOTE_LIST_COMMAND,
        &[
            "another-remote\tgit@github.com:username/another-remote-fetch.git",
            "another-remote\tgit@github.com:username/another-remote-push.git",
            "origin\tgit@github.com:username/project-name-fetch.git",
            "origin\tgit@github.com:username/project-name-push.git",
        ],
    );

    let remotes = get_remotes(&runner).unwrap();
    let origin = remotes.get("origin").unwrap();

    assert_eq!(
        origin.fetch_url(),
        Some("git@github.com:username/project-name-fetch.git")
    );
    assert_eq!(
        origin.push_url(),
        Some("git@github.com:username/project-name-push.git")
    );
}

#[test]
fn test_get_remotes_propagates_command_failure() {
    let runner = ScriptedRunner::new().fail(REMOTE_LIST_COMMAND);
    assert!(get_remotes(&runner).is_err());
}

// ==================== Default remote ====================

#[test]
fn test_get_default_remote_and_branch() {
    let runner = standard_runner();
    let head = get_default_remote_and_branch(&runner).unwrap().unwrap();

    assert_eq!(head.remote, "origin");
    assert_eq!(head.branch, "master");
    assert_eq!(runner.commands(), vec!["git branch -rl '*/HEAD'"]);
}

#[test]
fn test_get_default_remote_and_branch_without_arrow() {
    let runner = ScriptedRunner::new().reply(REMOTE_HEAD_COMMAND, &["\torigin/HEAD origin/master"]);
    assert_eq!(get_default_remote_and_branch(&runner).unwrap(), None);
}

#[test]
fn test_get_default_remote() {
    let runner = standard_runner();
    let remote = get_default_remote(&runner).unwrap().unwrap();

    assert_eq!(remote.name(), "origin");
    assert_eq!(
        remote.fetch_url(),
        Some("git@github.com:username/project-name.git")
    );
    assert_eq!(
        remote.push_url(),
        Some("git@github.com:username/project-name.git")
    );
}

#[test]
fn test_get_default_remote_falls_back_to_first() {
    let runner = ScriptedRunner::new()
        .reply(REMOTE_HEAD_COMMAND, &["\torigin/HEAD origin/master"])
        .reply(REMOTE_LIST_COMMAND, &standard_remotes());

    let remote = get_default_remote(&runner).unwrap().unwrap();
    assert_eq!(remote.name(), "another-remote");
}

#[test]
fn test_get_default_remote_none_without_remotes() {
    let runner = ScriptedRunner::new()
        .reply(REMOTE_HEAD_COMMAND, &["\torigin/HEAD origin/master"])
        .reply(REMOTE_LIST_COMMAND, &[]);

    assert!(get_default_remote(&runner).unwrap().is_none());
}

#[test]
fn test_get_default_remote_unknown_head_remote() {
    let runner = ScriptedRunner::new()
        .reply(REMOTE_HEAD_COMMAND, &["\tgone/HEAD -> gone/main"])
        .reply(REMOTE_LIST_COMMAND, &standard_remotes());

    assert!(get_default_remote(&runner).unwrap().is_none());
}

// ==================== Stashes ====================

#[test]
fn test_get_stash_list() {
    let runner = standard_runner();
    let stashes = get_stash_list(&runner).unwrap();

    assert_eq!(stashes.len(), 3);
    assert_eq!(stashes[0].index, 0);
    assert_eq!(stashes[0].name.as_deref(), Some("stash-1"));
}

#[test]
fn test_get_stash_list_empty() {
    let runner = ScriptedRunner::new().reply(STASH_LIST_COMMAND, &[]);
    assert!(get_stash_list(&runner).unwrap().is_empty());
}

#[test]
fn test_stash_branch_defaults_to_main() {
    let runner = ScriptedRunner::new().reply(
        STASH_LIST_COMMAND,
        &["stash@{0}: : stash-1", "stash@{1}: stash-2", "stash@{2}"],
    );

    let stashes = get_stash_list(&runner).unwrap();
    assert_eq!(stashes.len(), 3);
    assert!(stashes.iter().all(|s| s.branch == "main"));
}

#[test]
fn test_get_stash_by_index() {
    let runner = standard_runner();
    let stash = get_stash_by(&runner, &StashSelector::Index(2)).unwrap().unwrap();

    assert_eq!(stash.name.as_deref(), Some("stash-3"));
    assert_eq!(stash.branch, "another-branch");
}

#[test]
fn test_get_stash_by_name() {
    let runner = standard_runner();
    let stash = get_stash_by(&runner, &StashSelector::name("stash-2"))
        .unwrap()
        .unwrap();

    assert_eq!(stash.index, 1);
    assert_eq!(stash.branch, "master");
}

#[test]
fn test_stash_commands() {
    let runner = ScriptedRunner::new();

    save_stash(&runner, "pre-release").unwrap();
    pop_stash_by_index(&runner, 3).unwrap();

    assert_eq!(
        runner.executed(),
        vec![
            "git stash save -u -m \"pre-release\"",
            "git stash pop --index 3"
        ]
    );
}
