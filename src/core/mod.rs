//! core
//!
//! Value types and configuration shared by the facade and the CLI.
//!
//! # Modules
//!
//! - [`types`] - Strong types: Branch, Hash, Revision, RemoteUrl, etc.
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Values are validated once, at construction
//! - Schemas are strict and self-describing

pub mod config;
pub mod types;
