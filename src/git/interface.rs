//! git::interface
//!
//! Entry point to every git operation.
//!
//! # Architecture
//!
//! [`Git`] holds the base command (program and environment) and the
//! process handle. It answers binary-wide questions ([`Git::version`]) and
//! hands out [`Repository`] handles bound to a working directory. All
//! further operations hang off the repository.
//!
//! # Example
//!
//! ```no_run
//! use gitwrap::git::Git;
//! use gitwrap::core::types::Message;
//!
//! let git = Git::system();
//! println!("git {}", git.version()?);
//!
//! let repo = git.repository("/tmp/project")?;
//! repo.init()?;
//! repo.add("README.md")?;
//! repo.commit(&Message::new("initial commit").unwrap())?;
//! # Ok::<(), gitwrap::git::GitError>(())
//! ```

use std::path::Path;
use std::sync::Arc;

use super::binary::Binary;
use super::command::Command;
use super::error::Result;
use super::parse;
use super::process::{Processes, SystemProcesses};
use super::repository::Repository;
use crate::core::config::{Config, DEFAULT_BINARY};
use crate::core::types::Version;

/// Handle on the git binary.
///
/// Cheap to clone; clones share the same process handle.
#[derive(Debug, Clone)]
pub struct Git {
    binary: Binary,
}

impl Git {
    /// Run `git` from `PATH` through the given processes.
    pub fn new(processes: Arc<dyn Processes>) -> Self {
        Self::with_command(processes, Command::new(DEFAULT_BINARY))
    }

    /// Run `git` from `PATH` as real child processes.
    pub fn system() -> Self {
        Self::new(Arc::new(SystemProcesses))
    }

    /// Use an explicit base command (program and environment).
    ///
    /// The base must not carry arguments of its own; operations append
    /// theirs to it.
    pub fn with_command(processes: Arc<dyn Processes>, command: Command) -> Self {
        Self {
            binary: Binary::new(processes, command),
        }
    }

    /// Apply the configured binary and environment overrides.
    pub fn from_config(processes: Arc<dyn Processes>, config: &Config) -> Self {
        let command = config
            .environment()
            .into_iter()
            .fold(Command::new(config.binary()), |command, (key, value)| {
                command.with_environment(key, value)
            });
        Self::with_command(processes, command)
    }

    /// Version of the binary, from `git --version`.
    ///
    /// # Errors
    ///
    /// - `GitError::CommandFailed` if the binary cannot be run
    /// - `GitError::UnexpectedOutput` if the banner has no `version X.Y.Z`
    pub fn version(&self) -> Result<Version> {
        self.binary
            .invoke_and_parse(self.binary.command().with_option("version"), parse::version)
    }

    /// Repository handle for `path`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `GitError::PathNotUsable` if the directory cannot be created.
    pub fn repository(&self, path: impl AsRef<Path>) -> Result<Repository> {
        Repository::open(&self.binary, path.as_ref())
    }
}
