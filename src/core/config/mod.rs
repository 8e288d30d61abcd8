//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! gitwrap has two configuration scopes:
//! - **Global**: User-level settings (which binary to run, environment)
//! - **Repo**: Repository-level environment overrides
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Repo config file
//! 4. CLI flags (not handled here)
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$GITWRAP_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/gitwrap/config.toml`
//! 3. `~/.gitwrap/config.toml`
//!
//! # Repo Config Location
//!
//! `.git/gitwrap/config.toml` inside the repository.
//!
//! # Example
//!
//! ```no_run
//! use gitwrap::core::config::Config;
//! use std::path::Path;
//!
//! let config = Config::load(Some(Path::new("/path/to/repo"))).unwrap();
//!
//! println!("Binary: {}", config.binary());
//! for (key, value) in config.environment() {
//!     println!("{key}={value}");
//! }
//! ```

pub mod schema;

pub use schema::{GlobalConfig, RepoConfig};

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Binary used when nothing is configured.
pub const DEFAULT_BINARY: &str = "git";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Merged configuration from all sources.
///
/// Accessors apply precedence rules automatically: repo config overrides
/// global config, which overrides the defaults.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Repository configuration (if present)
    pub repo: Option<RepoConfig>,
    /// Path to the global config file (if loaded)
    global_path: Option<PathBuf>,
    /// Path to the repo config file (if loaded)
    repo_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// If `repo_path` is provided, also loads repo-specific config.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be parsed.
    /// Missing config files are not an error (defaults are used).
    pub fn load(repo_path: Option<&Path>) -> Result<Config, ConfigError> {
        let global_path = Self::find_global();
        let repo_config_path = repo_path
            .map(Self::repo_config_path)
            .filter(|path| path.exists());

        Self::load_from(global_path.as_deref(), repo_config_path.as_deref())
    }

    /// Load configuration from explicit file paths.
    ///
    /// # Errors
    ///
    /// Returns an error if a given file cannot be read, parsed or validated.
    pub fn load_from(global: Option<&Path>, repo: Option<&Path>) -> Result<Config, ConfigError> {
        let global_config = match global {
            Some(path) => read_config::<GlobalConfig>(path)?,
            None => GlobalConfig::default(),
        };
        let repo_config = repo.map(read_config::<RepoConfig>).transpose()?;

        global_config.validate()?;
        if let Some(ref r) = repo_config {
            r.validate()?;
        }

        Ok(Config {
            global: global_config,
            repo: repo_config,
            global_path: global.map(Path::to_path_buf),
            repo_path: repo.map(Path::to_path_buf),
        })
    }

    /// Find the global config file in the standard locations.
    fn find_global() -> Option<PathBuf> {
        // 1. Check $GITWRAP_CONFIG
        if let Ok(path) = std::env::var("GITWRAP_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. Check $XDG_CONFIG_HOME/gitwrap/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("gitwrap/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Check ~/.gitwrap/config.toml
        dirs::home_dir()
            .map(|home| home.join(".gitwrap/config.toml"))
            .filter(|path| path.exists())
    }

    /// Get the canonical path for repo config.
    ///
    /// Returns `.git/gitwrap/config.toml` relative to the given repo path.
    pub fn repo_config_path(repo_path: &Path) -> PathBuf {
        repo_path.join(".git/gitwrap/config.toml")
    }

    /// Program to run for every invocation.
    pub fn binary(&self) -> &str {
        self.global.binary.as_deref().unwrap_or(DEFAULT_BINARY)
    }

    /// Environment overrides, repo values replacing global ones per key.
    pub fn environment(&self) -> BTreeMap<String, String> {
        let mut env = self.global.env.clone().unwrap_or_default();
        if let Some(repo_env) = self.repo.as_ref().and_then(|r| r.env.as_ref()) {
            env.extend(repo_env.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        env
    }

    /// Get the path the global config was loaded from (if any).
    pub fn global_config_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Get the path the repo config was loaded from (if any).
    pub fn repo_config_loaded_from(&self) -> Option<&Path> {
        self.repo_path.as_deref()
    }
}

/// Read and parse a TOML config file.
fn read_config<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
