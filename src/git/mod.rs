//! git
//!
//! Typed facade over the `git` command-line program.
//!
//! # Architecture
//!
//! Every operation in this module becomes exactly one `git` invocation:
//!
//! - [`Command`] - Immutable program/arguments/directory/environment value
//! - [`Processes`] - Seam that runs a command ([`SystemProcesses`] for real,
//!   [`MockProcesses`] for tests)
//! - [`Binary`] - Base command plus processes; turns failures into [`GitError`]
//! - [`Git`] - Entry point: binary version and repositories
//! - [`Repository`] - Operations on one working directory, with the
//!   [`Branches`], [`Remotes`], [`Checkout`] and [`Tags`] sub-facades
//!
//! Output is decoded by the functions in [`parse`], which are pure and
//! tested on literal `git` output.
//!
//! # Invariants
//!
//! - No shell is involved; arguments reach `git` exactly as built
//! - A non-zero exit is always an error, and its output is kept on it
//! - Listings report failure instead of returning an empty list
//!
//! # Example
//!
//! ```no_run
//! use gitwrap::core::types::{Branch, Message};
//! use gitwrap::git::Git;
//!
//! let git = Git::system();
//! let repo = git.repository("/tmp/project")?;
//! repo.init()?;
//! repo.add("README.md")?;
//! repo.commit(&Message::new("initial commit")?)?;
//! repo.branches().create(&Branch::new("develop")?, None)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod binary;
mod branches;
mod checkout;
mod command;
mod error;
mod interface;
mod mock;
pub mod parse;
mod process;
mod remotes;
mod repository;
mod tags;

pub use binary::Binary;
pub use branches::Branches;
pub use checkout::Checkout;
pub use command::{quote, Command};
pub use error::{GitError, Result};
pub use interface::Git;
pub use mock::MockProcesses;
pub use process::{Output, ProcessFailure, Processes, SystemProcesses};
pub use remotes::{Remote, Remotes};
pub use repository::Repository;
pub use tags::{Tag, Tags};
