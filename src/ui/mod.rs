//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//!
//! # Design
//!
//! All terminal output of the CLI goes through this module so that quiet
//! and JSON modes are handled in one place.

pub mod output;
