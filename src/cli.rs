//! CLI argument definitions for nrel.
//!
//! Uses clap with derive macros for argument parsing.
//!
//! # Example
//!
//! ```no_run
//! use npm_release_scripts::cli::Cli;
//!
//! let cli = Cli::parse_args();
//! println!("Debug: {}", cli.debug);
//! ```

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};

use crate::config::ReleaseConfig;
use crate::release::ReleaseOptions;

/// Release automation for npm packages.
#[derive(Parser, Debug)]
#[command(name = "nrel")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Project directory (default: $INIT_CWD, then the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub cwd: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<CliShell>,
}

/// nrel subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Stash changes, build, tag, push the tag and optionally publish to npm
    #[command(visible_alias = "publish")]
    Release(ReleaseArgs),

    /// Print the repository's remotes and the default remote as JSON
    Remotes,

    /// Print the stash list as JSON
    Stashes,

    /// Check whether a package is installed
    Installed {
        /// Package name
        name: String,

        /// Look in global packages instead of the project's
        #[arg(short, long)]
        global: bool,
    },

    /// Print an example configuration file
    InitConfig,
}

/// Flags accepted by `nrel release`.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseArgs {
    /// Print a JSON summary when the release completes
    #[arg(long, overrides_with = "no_verbose")]
    pub verbose: bool,

    /// Don't print the summary, even if the config enables it
    #[arg(long, overrides_with = "verbose")]
    pub no_verbose: bool,

    /// Version to release (default: package.json version)
    #[arg(long = "version", visible_alias = "v", value_name = "VERSION")]
    pub version: Option<String>,

    /// Remote to push the tag to (default: the remote HEAD tracks)
    #[arg(long, visible_alias = "o", value_name = "REMOTE")]
    pub origin: Option<String>,

    /// Publish the package to npm after pushing the tag
    #[arg(long, overrides_with = "no_npm")]
    pub npm: bool,

    /// Don't publish, even if the config enables it
    #[arg(long, overrides_with = "npm")]
    pub no_npm: bool,

    /// npm publish access level: public or restricted
    #[arg(long, value_name = "ACCESS")]
    pub access: Option<String>,

    /// Build script to run (default: build)
    #[arg(long, value_name = "SCRIPT")]
    pub build: Option<String>,

    /// Show mutating commands without executing them
    #[arg(short, long)]
    pub dry_run: bool,
}

impl ReleaseArgs {
    /// Resolve these flags against config defaults.
    ///
    /// Flags win over the config; `--no-npm` and `--no-verbose` switch off
    /// a configured default.
    pub fn into_options(self, config: &ReleaseConfig) -> ReleaseOptions {
        let npm = switch(self.npm, self.no_npm).or(config.npm).unwrap_or(false);
        let verbose = switch(self.verbose, self.no_verbose)
            .or(config.verbose)
            .unwrap_or(false);

        ReleaseOptions {
            verbose,
            version: self.version,
            origin: self.origin,
            npm,
            access: self.access,
            build: self.build,
        }
        .with_defaults(config)
    }
}

fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliShell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    Powershell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Generate shell completions and write to stdout.
    pub fn generate_completions(shell: CliShell) {
        let mut cmd = Cli::command();
        let shell = match shell {
            CliShell::Bash => Shell::Bash,
            CliShell::Zsh => Shell::Zsh,
            CliShell::Fish => Shell::Fish,
            CliShell::Powershell => Shell::PowerShell,
            CliShell::Elvish => Shell::Elvish,
        };
        generate(shell, &mut cmd, "nrel", &mut std::io::stdout());
    }
}
