//! git::checkout
//!
//! Restoring files and switching revisions.

use std::path::Path;

use super::binary::Binary;
use super::error::Result;
use crate::core::types::Revision;

/// Checkout operations of a repository.
#[derive(Debug, Clone)]
pub struct Checkout {
    binary: Binary,
}

impl Checkout {
    pub(crate) fn new(binary: Binary) -> Self {
        Self { binary }
    }

    /// Discard working-tree changes to `path` (`checkout -- <path>`).
    ///
    /// The path is passed as raw OS bytes.
    pub fn file(&self, path: impl AsRef<Path>) -> Result<()> {
        self.binary
            .invoke(
                self.binary
                    .command()
                    .with_argument("checkout")
                    .with_argument("--")
                    .with_argument(path.as_ref().as_os_str()),
            )
            .map(drop)
    }

    /// Switch to a branch, or detach at a hash.
    pub fn revision(&self, revision: &Revision) -> Result<()> {
        self.binary
            .invoke(
                self.binary
                    .command()
                    .with_argument("checkout")
                    .with_argument(revision.as_str()),
            )
            .map(drop)
    }
}
