//! git::repository
//!
//! Operations on one working directory.
//!
//! A [`Repository`] is only constructed once its directory exists. Each
//! operation issues one command and resolves to a value or an error; no
//! state is kept between operations. Sub-facades ([`Branches`],
//! [`Remotes`], [`Checkout`], [`Tags`]) are built on demand and share the
//! repository's [`Binary`].

use std::path::{Path, PathBuf};

use tracing::debug;

use super::binary::Binary;
use super::branches::Branches;
use super::checkout::Checkout;
use super::command::Command;
use super::error::{GitError, Result};
use super::parse;
use super::remotes::Remotes;
use super::tags::Tags;
use crate::core::types::{Branch, Message, Revision};

/// A git working directory.
#[derive(Debug, Clone)]
pub struct Repository {
    path: PathBuf,
    binary: Binary,
}

impl Repository {
    /// Bind `binary` to `path`, creating the directory if needed.
    pub(crate) fn open(binary: &Binary, path: &Path) -> Result<Self> {
        std::fs::create_dir_all(path).map_err(|source| GitError::PathNotUsable {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "repository directory ready");

        Ok(Self {
            path: path.to_path_buf(),
            binary: binary.with_command(binary.command().with_working_directory(path)),
        })
    }

    /// Working directory of this repository.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create or reinitialize the repository (`git init`).
    ///
    /// Running it on an existing repository succeeds as well.
    ///
    /// # Errors
    ///
    /// - `GitError::CommandFailed` if `git init` fails
    /// - `GitError::UnexpectedOutput` if it succeeds without printing one of
    ///   the known banners (e.g. under a translated locale)
    pub fn init(&self) -> Result<()> {
        self.binary.invoke_and_parse(
            self.binary.command().with_argument("init"),
            |output| parse::is_init_banner(output).then_some(()),
        )
    }

    /// Currently checked-out revision: a branch, or a hash when detached.
    ///
    /// # Errors
    ///
    /// Returns `GitError::UnexpectedOutput` when nothing is checked out yet
    /// (e.g. before the first commit).
    pub fn head(&self) -> Result<Revision> {
        self.binary.invoke_and_parse(
            self.binary
                .command()
                .with_argument("branch")
                .with_option("no-color"),
            parse::head,
        )
    }

    pub fn branches(&self) -> Branches {
        Branches::new(self.binary.clone())
    }

    /// Push the current branch to its upstream (`git push`).
    pub fn push(&self) -> Result<()> {
        self.run(self.binary.command().with_argument("push"))
    }

    /// Pull the current branch from its upstream (`git pull`).
    pub fn pull(&self) -> Result<()> {
        self.run(self.binary.command().with_argument("pull"))
    }

    pub fn remotes(&self) -> Remotes {
        Remotes::new(self.binary.clone())
    }

    pub fn checkout(&self) -> Checkout {
        Checkout::new(self.binary.clone())
    }

    /// Stage a path (`git add -- <path>`).
    ///
    /// Relative paths are resolved against the repository directory. The
    /// path is passed as raw OS bytes and is never read as an option.
    pub fn add(&self, path: impl AsRef<Path>) -> Result<()> {
        self.run(
            self.binary
                .command()
                .with_argument("add")
                .with_argument("--")
                .with_argument(path.as_ref().as_os_str()),
        )
    }

    /// Record staged changes (`git commit -m <message>`).
    pub fn commit(&self, message: &Message) -> Result<()> {
        self.run(
            self.binary
                .command()
                .with_argument("commit")
                .with_short_option('m')
                .with_argument(message.as_str()),
        )
    }

    /// Merge a branch into the current one (`git merge <branch>`).
    ///
    /// A conflicting merge is reported as `GitError::CommandFailed`; the
    /// working tree is left as git left it.
    pub fn merge(&self, branch: &Branch) -> Result<()> {
        self.run(
            self.binary
                .command()
                .with_argument("merge")
                .with_argument(branch.as_str()),
        )
    }

    pub fn tags(&self) -> Tags {
        Tags::new(self.binary.clone())
    }

    fn run(&self, command: Command) -> Result<()> {
        self.binary.invoke(command).map(drop)
    }
}
