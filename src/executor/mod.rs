//! Command execution abstraction for openshift-modules.
//!
//! This module provides:
//! - [`CommandSpec`]: Specification for commands to execute
//! - [`ExecutionResult`]: Exit status and captured output of a finished command
//! - [`CommandExecutor`]: Trait for command execution strategies
//! - [`RealCommandExecutor`]: Production implementation using `std::process::Command`

mod pipe;
mod real;

use std::ffi::OsString;
use std::process::ExitStatus;

use anyhow::Result;

pub use real::RealCommandExecutor;

/// Formats arguments into a space-separated, debug-quoted string.
///
/// Used by error messages and log output to consistently format
/// command arguments (e.g., `"--output" "out.ign" "config.bu"`).
pub(crate) fn format_command_args(args: &[OsString]) -> String {
    args.iter()
        .map(|a| format!("{:?}", a))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Specification for a command to be executed
#[derive(Debug, Clone)]
pub struct CommandSpec {
    /// The command to execute (e.g., "butane")
    pub command: String,
    /// Command arguments, excluding the command itself
    pub args: Vec<OsString>,
}

impl CommandSpec {
    /// Creates a new CommandSpec with command and args
    #[must_use]
    pub fn new(command: impl Into<String>, args: Vec<OsString>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }

    /// Returns the full argument vector, command name first.
    pub fn argv(&self) -> Vec<OsString> {
        std::iter::once(OsString::from(&self.command))
            .chain(self.args.iter().cloned())
            .collect()
    }
}

/// Result of a command that ran to completion.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Exit status of the command
    pub status: ExitStatus,
    /// Everything the command wrote to stdout
    pub stdout: Vec<u8>,
    /// Everything the command wrote to stderr
    pub stderr: Vec<u8>,
}

impl ExecutionResult {
    /// Returns true if the command exited with status zero.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Returns the exit code.
    ///
    /// A process killed by a signal has no exit code; on Unix it is
    /// reported as the negated signal number, matching what Ansible's
    /// `run_command` returns.
    pub fn code(&self) -> Option<i32> {
        if let Some(code) = self.status.code() {
            return Some(code);
        }
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            self.status.signal().map(|sig| -sig)
        }
        #[cfg(not(unix))]
        {
            None
        }
    }
}

/// Trait for command execution.
///
/// Implementations must be `Send + Sync` so an executor can be shared
/// behind `Arc<dyn CommandExecutor>`.
pub trait CommandExecutor: Send + Sync {
    /// Executes a command and waits for it to finish.
    ///
    /// A non-zero exit status is returned as `Ok`; only failures to launch
    /// or drive the process are errors.
    fn execute(&self, spec: &CommandSpec) -> Result<ExecutionResult>;
}
