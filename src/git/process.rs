//! git::process
//!
//! Process-control seam.
//!
//! # Design
//!
//! The [`Processes`] trait is the only place a child process is spawned.
//! An implementation runs one [`Command`] to completion and reports either
//! the captured [`Output`] or a [`ProcessFailure`]. Callers only ever see
//! that discriminant; raw exit codes are carried for messages, never
//! branched on.
//!
//! Implementations:
//! - [`SystemProcesses`]: spawns through `std::process`
//! - [`MockProcesses`](super::MockProcesses): scripted, for tests
//!
//! Implementations must be `Send + Sync`; a single instance is shared by
//! every facade created from one [`Git`](super::Git).

use std::process::Stdio;

use super::command::Command;

/// Text captured from a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    stdout: String,
    stderr: String,
}

impl Output {
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}

/// Why a process did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessFailure {
    /// The process could not be started at all.
    Spawn {
        /// Description of the spawn error
        reason: String,
    },
    /// The process ran and reported failure.
    Exit {
        /// Human-readable exit status
        status: String,
        /// Whatever was captured before exit
        output: Output,
    },
}

impl ProcessFailure {
    /// Short description for error messages.
    pub fn reason(&self) -> &str {
        match self {
            ProcessFailure::Spawn { reason } => reason,
            ProcessFailure::Exit { status, .. } => status,
        }
    }

    /// Output captured before the failure (empty on spawn errors).
    pub fn into_output(self) -> Output {
        match self {
            ProcessFailure::Spawn { .. } => Output::default(),
            ProcessFailure::Exit { output, .. } => output,
        }
    }
}

/// Runs commands to completion.
pub trait Processes: Send + Sync {
    /// Execute `command`, block until it exits, and return its output.
    ///
    /// Returns `Err` if the process cannot be spawned or exits
    /// unsuccessfully.
    fn execute(&self, command: &Command) -> Result<Output, ProcessFailure>;
}

/// Spawns real processes through `std::process`.
///
/// Stdin is closed, stdout and stderr are captured in full.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcesses;

impl Processes for SystemProcesses {
    fn execute(&self, command: &Command) -> Result<Output, ProcessFailure> {
        let mut child = std::process::Command::new(command.program());
        child.args(command.arguments());
        if let Some(dir) = command.working_directory() {
            child.current_dir(dir);
        }
        for (key, value) in command.environment() {
            child.env(key, value);
        }

        let result = child
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| ProcessFailure::Spawn {
                reason: format!("failed to spawn {}: {}", command.program(), e),
            })?;

        let output = Output::new(
            String::from_utf8_lossy(&result.stdout),
            String::from_utf8_lossy(&result.stderr),
        );

        if result.status.success() {
            Ok(output)
        } else {
            Err(ProcessFailure::Exit {
                status: result.status.to_string(),
                output,
            })
        }
    }
}
