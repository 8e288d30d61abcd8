//! git::error
//!
//! Errors from facade operations.
//!
//! Every failure of the external binary is an ordinary value: a merge
//! conflict, a missing branch and an unreachable remote all surface as
//! [`GitError::CommandFailed`]. No attempt is made to tell them apart by
//! exit code; callers needing detail inspect the captured output.

use std::path::PathBuf;

use thiserror::Error;

use super::process::Output;

/// Errors from git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// The repository directory could not be created or used.
    #[error("path not usable as repository: {path}")]
    PathNotUsable {
        /// The directory that was requested
        path: PathBuf,
        /// Underlying filesystem error
        source: std::io::Error,
    },

    /// The binary could not be run or exited with failure.
    #[error("`{command}` failed: {reason}")]
    CommandFailed {
        /// The command line, shell-quoted
        command: String,
        /// Spawn error or exit status
        reason: String,
        /// Output captured before the failure
        output: Output,
    },

    /// The binary succeeded but printed something we cannot interpret.
    #[error("unexpected output from `{command}`: {output:?}")]
    UnexpectedOutput {
        /// The command line, shell-quoted
        command: String,
        /// The uninterpretable stdout
        output: String,
    },
}

impl GitError {
    /// Output captured from the failed command, if any.
    pub fn output(&self) -> Option<&Output> {
        match self {
            GitError::CommandFailed { output, .. } => Some(output),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GitError>;
