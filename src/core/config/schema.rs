//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$GITWRAP_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/gitwrap/config.toml`
//! 3. `~/.gitwrap/config.toml`
//!
//! # Repo Config
//!
//! Located at `.git/gitwrap/config.toml`.
//!
//! # Validation
//!
//! Config values are validated after parsing: the binary must be a single
//! word and environment keys must be usable as variable names.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// binary = "/usr/local/bin/git"
///
/// [env]
/// GIT_TERMINAL_PROMPT = "0"
/// LC_ALL = "C"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Program to run instead of `git`
    pub binary: Option<String>,

    /// Environment overrides applied to every invocation
    pub env: Option<BTreeMap<String, String>>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(binary) = &self.binary {
            if binary.is_empty() || binary.chars().any(char::is_whitespace) {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid binary '{}', must be a single non-empty word",
                    binary
                )));
            }
        }

        if let Some(env) = &self.env {
            validate_env(env)?;
        }

        Ok(())
    }
}

/// Repository configuration.
///
/// # Example
///
/// ```toml
/// [env]
/// GIT_AUTHOR_NAME = "Release Bot"
/// GIT_AUTHOR_EMAIL = "bot@example.com"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RepoConfig {
    /// Environment overrides, layered over the global ones
    pub env: Option<BTreeMap<String, String>>,
}

impl RepoConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(env) = &self.env {
            validate_env(env)?;
        }
        Ok(())
    }
}

fn validate_env(env: &BTreeMap<String, String>) -> Result<(), ConfigError> {
    for key in env.keys() {
        if key.is_empty() || key.contains('=') || key.contains('\0') {
            return Err(ConfigError::InvalidValue(format!(
                "invalid environment variable name '{}'",
                key
            )));
        }
    }
    Ok(())
}
