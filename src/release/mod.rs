//! Release module for nrel.
//!
//! Resolves release inputs and runs the stash, build, tag, push, publish and
//! restore sequence.

mod options;
mod orchestrator;

pub use options::{
    Access, Environment, ReleaseOptions, DEFAULT_BUILD_SCRIPT, DEFAULT_ORIGIN, STASH_NAME,
};
pub use orchestrator::{publish_command, release, ReleaseSummary};
