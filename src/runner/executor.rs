//! Command execution.
//!
//! Commands are passed to the platform shell as whole strings, so the exact
//! text (quotes included) is what git and npm receive.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use crate::error::{ReleaseError, Result};

/// How a command's standard streams are wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stdio {
    /// Capture stdout and return it; used for read-only queries.
    Capture,
    /// Inherit the parent's stdio; used for mutating release steps.
    Inherit,
}

/// Capability to run an external command synchronously.
///
/// Implementations block until the command completes and return its captured
/// stdout (empty for [`Stdio::Inherit`]). A non-zero exit is an error.
pub trait CommandRunner {
    /// Run `command` and wait for it to finish.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be spawned or exits unsuccessfully.
    fn run(&self, command: &str, stdio: Stdio) -> Result<String>;

    /// Run a read-only query and return its stdout.
    fn output(&self, command: &str) -> Result<String> {
        self.run(command, Stdio::Capture)
    }

    /// Run a command with inherited stdio.
    fn exec(&self, command: &str) -> Result<()> {
        self.run(command, Stdio::Inherit).map(|_| ())
    }
}

/// Runs commands through `sh -c` (or `cmd /C` on Windows).
#[derive(Debug, Clone)]
pub struct ShellRunner {
    cwd: PathBuf,
    dry_run: bool,
}

impl ShellRunner {
    /// Create a runner that executes commands in `cwd`.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            dry_run: false,
        }
    }

    /// Print mutating commands instead of running them.
    ///
    /// Captured queries still execute so the release can resolve its inputs.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// The working directory commands run in.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    fn shell(&self, command: &str) -> Command {
        let mut cmd = if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(command);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(command);
            cmd
        };
        cmd.current_dir(&self.cwd);
        cmd
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str, stdio: Stdio) -> Result<String> {
        match stdio {
            Stdio::Capture => {
                log::debug!("Capturing: {command}");
                let output = self
                    .shell(command)
                    .stdin(std::process::Stdio::null())
                    .output()
                    .map_err(|source| ReleaseError::CommandSpawn {
                        command: command.to_string(),
                        source,
                    })?;
                check_output(command, output)
            }
            Stdio::Inherit => {
                if self.dry_run {
                    println!("Would run: {command}");
                    io::stdout().flush().ok();
                    return Ok(String::new());
                }

                log::debug!("Running: {command}");
                let status = self
                    .shell(command)
                    .stdin(std::process::Stdio::inherit())
                    .stdout(std::process::Stdio::inherit())
                    .stderr(std::process::Stdio::inherit())
                    .status()
                    .map_err(|source| ReleaseError::CommandSpawn {
                        command: command.to_string(),
                        source,
                    })?;

                if status.success() {
                    Ok(String::new())
                } else {
                    Err(ReleaseError::CommandFailed {
                        command: command.to_string(),
                        code: status.code(),
                        stderr: String::new(),
                    })
                }
            }
        }
    }
}

fn check_output(command: &str, output: Output) -> Result<String> {
    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    } else {
        Err(ReleaseError::CommandFailed {
            command: command.to_string(),
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
