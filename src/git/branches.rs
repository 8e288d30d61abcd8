//! git::branches
//!
//! Listing, creating and deleting branches.

use super::binary::Binary;
use super::error::Result;
use super::parse;
use crate::core::types::{Branch, Revision};

/// Branch operations of a repository.
#[derive(Debug, Clone)]
pub struct Branches {
    binary: Binary,
}

impl Branches {
    pub(crate) fn new(binary: Binary) -> Self {
        Self { binary }
    }

    /// Local branches, in git's listing order.
    pub fn local(&self) -> Result<Vec<Branch>> {
        let output = self.binary.invoke(
            self.binary
                .command()
                .with_argument("branch")
                .with_option("no-color"),
        )?;
        Ok(parse::local_branches(output.stdout()))
    }

    /// Remote-tracking branches (`origin/master`, ...).
    pub fn remote(&self) -> Result<Vec<Branch>> {
        let output = self.binary.invoke(
            self.binary
                .command()
                .with_argument("branch")
                .with_short_option('r')
                .with_option("no-color"),
        )?;
        Ok(parse::remote_branches(output.stdout()))
    }

    /// Local branches followed by remote-tracking ones.
    pub fn all(&self) -> Result<Vec<Branch>> {
        let mut branches = self.local()?;
        branches.extend(self.remote()?);
        Ok(branches)
    }

    /// Create `name` at `off`, or at HEAD when `off` is `None`.
    pub fn create(&self, name: &Branch, off: Option<&Revision>) -> Result<()> {
        let mut command = self
            .binary
            .command()
            .with_argument("branch")
            .with_argument(name.as_str());
        if let Some(off) = off {
            command = command.with_argument(off.as_str());
        }
        self.binary.invoke(command).map(drop)
    }

    /// Create and switch to a branch with no history (`checkout --orphan`).
    pub fn create_orphan(&self, name: &Branch) -> Result<()> {
        self.binary
            .invoke(
                self.binary
                    .command()
                    .with_argument("checkout")
                    .with_option("orphan")
                    .with_argument(name.as_str()),
            )
            .map(drop)
    }

    /// Delete a fully merged branch (`branch -d`).
    pub fn delete(&self, name: &Branch) -> Result<()> {
        self.remove(name, 'd')
    }

    /// Delete a branch regardless of merge status (`branch -D`).
    pub fn force_delete(&self, name: &Branch) -> Result<()> {
        self.remove(name, 'D')
    }

    fn remove(&self, name: &Branch, flag: char) -> Result<()> {
        self.binary
            .invoke(
                self.binary
                    .command()
                    .with_argument("branch")
                    .with_short_option(flag)
                    .with_argument(name.as_str()),
            )
            .map(drop)
    }
}
