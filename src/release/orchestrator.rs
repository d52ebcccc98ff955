//! The release sequence.
//!
//! Inputs are validated before anything mutates the repository. The
//! stash/build/tag/push/publish/restore steps then run as one unit: the
//! first failure stops the sequence and leaves the `pre-release` stash in
//! place for manual recovery.

use serde::Serialize;

use super::options::{Access, Environment, ReleaseOptions, DEFAULT_ORIGIN, STASH_NAME};
use crate::error::{ReleaseError, Result};
use crate::git::{self, StashSelector};
use crate::package::{self, PackageJson, Runner};
use crate::runner::CommandRunner;

/// Summary of a completed release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseSummary {
    /// Package name from package.json.
    pub package: Option<String>,
    /// Human-readable outcome.
    pub message: String,
    /// Remote the tag was pushed to.
    pub origin: String,
    /// The pushed tag.
    pub tag: String,
    /// Whether `npm publish` ran.
    pub npm_publish: bool,
}

/// Everything a release needs once inputs are validated.
#[derive(Debug, Clone)]
struct Plan {
    project: Option<PackageJson>,
    version: String,
    origin: String,
    runner: Runner,
    build: String,
    publish: Option<Access>,
}

impl Plan {
    fn tag(&self) -> String {
        format!("v{}", self.version)
    }
}

/// Run a release.
///
/// # Errors
///
/// - [`ReleaseError::MissingVersion`] when no version can be resolved
/// - [`ReleaseError::InvalidAccess`] when publishing with a bad `--access`
/// - lookup failures from git while resolving the origin
/// - [`ReleaseError::ReleaseFailed`] when any step of the sequence fails
pub fn release(
    runner: &dyn CommandRunner,
    env: &Environment,
    options: &ReleaseOptions,
) -> Result<ReleaseSummary> {
    let plan = prepare(runner, env, options)?;
    execute(runner, &plan).map_err(ReleaseError::release_failed)?;

    let tag = plan.tag();
    log::info!("Released {} to {}", tag, plan.origin);

    Ok(ReleaseSummary {
        package: plan.project.and_then(|p| p.name),
        message: format!("Released version {}", plan.version),
        origin: plan.origin,
        tag,
        npm_publish: plan.publish.is_some(),
    })
}

fn prepare(runner: &dyn CommandRunner, env: &Environment, options: &ReleaseOptions) -> Result<Plan> {
    let project = match package::read_package_json(&env.root) {
        Ok(project) => Some(project),
        Err(e) => {
            log::debug!("Continuing without package.json: {e}");
            None
        }
    };

    let build_runner = package::detect_build_runner(runner);

    let version = options
        .requested_version()
        .or_else(|| project.as_ref().and_then(PackageJson::version_str))
        .map(str::to_string)
        .ok_or(ReleaseError::MissingVersion)?;

    let publish = if options.npm {
        Some(options.access()?)
    } else {
        None
    };

    let origin = match options.requested_origin() {
        Some(origin) => origin.to_string(),
        None => git::get_default_remote(runner)?
            .map(|remote| remote.name().to_string())
            .unwrap_or_else(|| DEFAULT_ORIGIN.to_string()),
    };

    Ok(Plan {
        project,
        version,
        origin,
        runner: build_runner,
        build: options.build_script().to_string(),
        publish,
    })
}

fn execute(runner: &dyn CommandRunner, plan: &Plan) -> Result<()> {
    let tag = plan.tag();

    git::save_stash(runner, STASH_NAME)?;
    runner.exec(&plan.runner.build_command(&plan.build))?;
    git::create_tag(runner, &tag)?;
    git::push_tag(runner, &plan.origin, &tag)?;

    if let Some(access) = plan.publish {
        runner.exec(&publish_command(access, &plan.version))?;
    }

    match git::get_stash_by(runner, &StashSelector::name(STASH_NAME))? {
        Some(stash) => git::pop_stash_by_index(runner, stash.index)?,
        None => log::debug!("No \"{STASH_NAME}\" stash to restore"),
    }

    Ok(())
}

/// Build the `npm publish` command for `version`.
///
/// Pre-release versions are published under their pre-release tag.
///
/// # Examples
///
/// ```
/// use npm_release_scripts::release::{publish_command, Access};
///
/// assert_eq!(publish_command(Access::Public, "1.0.0"), "npm publish --access public");
/// assert_eq!(
///     publish_command(Access::Restricted, "2.0.0-rc.1"),
///     "npm publish --access restricted --tag rc"
/// );
/// ```
pub fn publish_command(access: Access, version: &str) -> String {
    match package::pre_release_tag(version) {
        Some(tag) => format!("npm publish --access {access} --tag {tag}"),
        None => format!("npm publish --access {access}"),
    }
}
