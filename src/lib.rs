//! gitwrap - A typed facade over the git command-line program
//!
//! gitwrap drives an installed `git` binary through strongly typed values:
//! branch names, hashes, remote URLs and messages are validated before they
//! reach the command line, and `git`'s textual output is decoded back into
//! the same types.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (`gw`; parses args, delegates to git)
//! - [`core`] - Value types and configuration
//! - [`git`] - Command builder, invoker, output parsers and facades
//! - [`ui`] - User-facing output
//!
//! # Correctness Invariants
//!
//! 1. Every facade operation spawns exactly one `git` process
//! 2. No argument passes through a shell
//! 3. Invalid values are rejected before any process runs
//! 4. Failures carry the command line and its captured output

pub mod cli;
pub mod core;
pub mod git;
pub mod ui;
