//! cli
//!
//! Command-line interface layer for gitwrap.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load configuration and install logging
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It validates user input into [`crate::core::types`]
//! values and calls the [`crate::git`] facade; every command maps to one
//! facade operation.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::core::config::Config;
use crate::git::{Git, Repository, SystemProcesses};
use crate::ui::output::{self, Verbosity};

/// Execution context shared by all command handlers.
#[derive(Debug)]
pub struct Context {
    /// Directory the repository lives in
    pub cwd: PathBuf,
    pub debug: bool,
    pub quiet: bool,
    pub json: bool,
    /// Loaded configuration, with command-line overrides applied
    pub config: Config,
}

impl Context {
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    /// Git handle for the configured binary and environment.
    pub fn git(&self) -> Git {
        Git::from_config(Arc::new(SystemProcesses), &self.config)
    }

    /// Repository in the working directory.
    pub fn repository(&self) -> Result<Repository> {
        self.git()
            .repository(&self.cwd)
            .with_context(|| format!("Failed to open {}", self.cwd.display()))
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.debug);

    let cwd = match cli.cwd {
        Some(cwd) => cwd,
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };

    let mut config = Config::load(Some(&cwd)).context("Failed to load configuration")?;
    if let Some(binary) = cli.binary {
        config.global.binary = Some(binary);
        config.global.validate().context("Invalid --binary")?;
    }

    let ctx = Context {
        cwd,
        debug: cli.debug,
        quiet: cli.quiet,
        json: cli.json,
        config,
    };

    if let Some(path) = ctx.config.global_config_loaded_from() {
        output::debug(format!("global config: {}", path.display()), ctx.verbosity());
    }
    if let Some(path) = ctx.config.repo_config_loaded_from() {
        output::debug(format!("repo config: {}", path.display()), ctx.verbosity());
    }

    // Dispatch to command handler
    commands::dispatch(cli.command, &ctx)
}

/// Send `tracing` events to stderr.
///
/// `--debug` shows this crate's debug events; otherwise `RUST_LOG` decides,
/// defaulting to warnings only.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("gitwrap=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // Ignore failure: a subscriber may already be installed when embedded.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
