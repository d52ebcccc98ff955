//! Runner module for nrel.
//!
//! The command-runner capability every git/npm query and release step goes
//! through, plus the shell-backed implementation used by the binary.

mod executor;

pub use executor::{CommandRunner, ShellRunner, Stdio};
