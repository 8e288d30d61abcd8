//! git::binary
//!
//! The invoker: runs commands built from a fixed base.
//!
//! # Design
//!
//! A [`Binary`] owns the base [`Command`] (program, working directory,
//! environment) and a shared [`Processes`] handle. Facades ask it for a
//! fresh copy of the base, append their arguments, and hand the result back
//! to [`Binary::invoke`]. Each invocation spawns exactly one process and
//! blocks until it exits. Failures are returned, never retried.

use std::sync::Arc;

use tracing::debug;

use super::command::Command;
use super::error::{GitError, Result};
use super::process::{Output, Processes};

/// Shared handle to the binary and the processes that run it.
#[derive(Clone)]
pub struct Binary {
    processes: Arc<dyn Processes>,
    command: Command,
}

impl Binary {
    pub fn new(processes: Arc<dyn Processes>, command: Command) -> Self {
        Self { processes, command }
    }

    /// A copy of the base command, ready for arguments.
    pub fn command(&self) -> Command {
        self.command.clone()
    }

    /// Same binary, different base command (e.g. another working directory).
    pub fn with_command(&self, command: Command) -> Self {
        Self {
            processes: Arc::clone(&self.processes),
            command,
        }
    }

    /// Run `command` and return its output.
    ///
    /// # Errors
    ///
    /// Returns `GitError::CommandFailed` if the process cannot be spawned or
    /// exits unsuccessfully.
    pub fn invoke(&self, command: Command) -> Result<Output> {
        let line = command.to_string();
        debug!(command = %line, dir = ?command.working_directory(), "invoking");

        match self.processes.execute(&command) {
            Ok(output) => {
                debug!(command = %line, "succeeded");
                Ok(output)
            }
            Err(failure) => {
                debug!(command = %line, reason = failure.reason(), "failed");
                Err(GitError::CommandFailed {
                    command: line,
                    reason: failure.reason().to_string(),
                    output: failure.into_output(),
                })
            }
        }
    }

    /// Run `command` and decode its stdout with `parse`.
    ///
    /// # Errors
    ///
    /// - `GitError::CommandFailed` as for [`Binary::invoke`]
    /// - `GitError::UnexpectedOutput` if `parse` returns `None`
    pub fn invoke_and_parse<T>(
        &self,
        command: Command,
        parse: impl FnOnce(&str) -> Option<T>,
    ) -> Result<T> {
        let line = command.to_string();
        let output = self.invoke(command)?;

        parse(output.stdout()).ok_or_else(|| {
            debug!(command = %line, "output not understood");
            GitError::UnexpectedOutput {
                command: line,
                output: output.stdout().to_string(),
            }
        })
    }
}

impl std::fmt::Debug for Binary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binary")
            .field("command", &self.command)
            .finish_non_exhaustive()
    }
}
