//! nrel - npm release scripts
//!
//! Automates releasing an npm package from a Git repository: stash local
//! changes, build, tag, push the tag, optionally publish to npm, then restore
//! exactly the stash the release created.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface argument parsing
//! - [`config`] - Configuration file loading and types
//! - [`error`] - Error types and exit codes
//! - [`git`] - Remote and stash parsing, git commands
//! - [`package`] - package.json reading, installed-package checks, build runner
//! - [`release`] - The release sequence
//! - [`runner`] - Command execution
//! - [`utils`] - Path utilities
//!
//! # Example
//!
//! ```no_run
//! use npm_release_scripts::release::{release, Environment, ReleaseOptions};
//! use npm_release_scripts::runner::ShellRunner;
//!
//! let runner = ShellRunner::new("./my-package");
//! let env = Environment::new("./my-package");
//! let options = ReleaseOptions {
//!     npm: true,
//!     ..Default::default()
//! };
//!
//! let summary = release(&runner, &env, &options).expect("release failed");
//! println!("{}", summary.message);
//! ```

/// CLI argument definitions.
pub mod cli;

/// Configuration system for loading and merging settings.
pub mod config;

/// Error types and result helpers.
pub mod error;

/// Git output parsing and commands.
pub mod git;

/// package.json and npm queries.
pub mod package;

/// Release orchestration.
pub mod release;

/// Command execution.
pub mod runner;

/// Path utilities.
pub mod utils;

// Re-export commonly used types
pub use cli::Cli;
pub use config::Config;
pub use error::{ReleaseError, Result};
pub use package::Runner;
pub use release::{ReleaseOptions, ReleaseSummary};
pub use runner::{CommandRunner, ShellRunner};
