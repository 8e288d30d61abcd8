//! git::command
//!
//! Immutable description of one external invocation.
//!
//! # Design
//!
//! A [`Command`] is a program name plus an ordered argument vector, an
//! optional working directory and environment overrides. Builder methods
//! consume the value and return the extended one; since `Command` is
//! `Clone`, a base command (program + working directory) can seed any
//! number of sibling commands without being altered.
//!
//! Arguments are kept as a vector of [`OsString`]s and handed to the OS one
//! slot per argument, so paths that are not valid UTF-8 reach the child
//! unchanged. No shell is involved, so quotes and whitespace inside an
//! argument are never reinterpreted. The [`Display`](std::fmt::Display)
//! form renders POSIX single-quote escaping (lossily for non-UTF-8
//! arguments) and exists for logs and error messages only.
//!
//! # Example
//!
//! ```
//! use gitwrap::git::Command;
//!
//! let base = Command::new("git").with_working_directory("/tmp/repo");
//! let commit = base.clone().with_argument("commit").with_short_option('m').with_argument("it's done");
//!
//! assert_eq!(commit.to_string(), r#"git commit -m 'it'"'"'s done'"#);
//! assert!(base.arguments().is_empty());
//! ```

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// One external invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    program: String,
    arguments: Vec<OsString>,
    working_directory: Option<PathBuf>,
    environment: Vec<(String, String)>,
}

impl Command {
    /// Create a command running `program` with no arguments.
    ///
    /// # Panics
    ///
    /// Panics if `program` is empty.
    pub fn new(program: impl Into<String>) -> Self {
        let program = program.into();
        assert!(!program.is_empty(), "command program cannot be empty");

        Self {
            program,
            arguments: Vec::new(),
            working_directory: None,
            environment: Vec::new(),
        }
    }

    /// Run the command inside `path`.
    #[must_use]
    pub fn with_working_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.working_directory = Some(path.into());
        self
    }

    /// Set an environment variable for the child process.
    ///
    /// Setting the same key twice keeps the last value.
    #[must_use]
    pub fn with_environment(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        self.environment.retain(|(k, _)| *k != key);
        self.environment.push((key, value.into()));
        self
    }

    /// Append a positional argument.
    #[must_use]
    pub fn with_argument(mut self, argument: impl Into<OsString>) -> Self {
        self.arguments.push(argument.into());
        self
    }

    /// Append a long option (`--name`).
    #[must_use]
    pub fn with_option(self, name: &str) -> Self {
        self.with_argument(format!("--{name}"))
    }

    /// Append a long option with a value (`--name=value`).
    #[must_use]
    pub fn with_option_value(self, name: &str, value: impl AsRef<str>) -> Self {
        self.with_argument(format!("--{name}={}", value.as_ref()))
    }

    /// Append a short option (`-x`).
    #[must_use]
    pub fn with_short_option(self, flag: char) -> Self {
        self.with_argument(format!("-{flag}"))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[OsString] {
        &self.arguments
    }

    pub fn working_directory(&self) -> Option<&Path> {
        self.working_directory.as_deref()
    }

    pub fn environment(&self) -> &[(String, String)] {
        &self.environment
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&quote(&self.program))?;
        for argument in &self.arguments {
            write!(f, " {}", quote(&argument.to_string_lossy()))?;
        }
        Ok(())
    }
}

/// Quote a word for a POSIX shell.
///
/// Words made only of safe characters are returned as is. Anything else is
/// wrapped in single quotes, with each embedded `'` closed, emitted inside
/// double quotes, and reopened (`'"'"'`).
pub fn quote(word: &str) -> String {
    let is_safe = |c: char| c.is_ascii_alphanumeric() || "_-./:=@,+%^".contains(c);

    if !word.is_empty() && word.chars().all(is_safe) {
        return word.to_string();
    }

    let mut quoted = String::with_capacity(word.len() + 2);
    quoted.push('\'');
    for c in word.chars() {
        if c == '\'' {
            quoted.push_str(r#"'"'"'"#);
        } else {
            quoted.push(c);
        }
    }
    quoted.push('\'');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_does_not_alter_base() {
        let base = Command::new("git").with_working_directory("/tmp/foo");
        let local = base.clone().with_argument("branch").with_option("no-color");
        let remote = base
            .clone()
            .with_argument("branch")
            .with_short_option('r')
            .with_option("no-color");

        assert!(base.arguments().is_empty());
        assert_eq!(local.arguments(), ["branch", "--no-color"]);
        assert_eq!(remote.arguments(), ["branch", "-r", "--no-color"]);
        assert_eq!(remote.working_directory(), Some(Path::new("/tmp/foo")));
    }

    #[test]
    fn option_value_is_single_argument() {
        let command = Command::new("git")
            .with_argument("tag")
            .with_option_value("format", "%(refname:strip=2)|||%(subject)");

        assert_eq!(
            command.arguments(),
            ["tag", "--format=%(refname:strip=2)|||%(subject)"]
        );
    }

    #[test]
    fn message_with_quote_is_one_argument() {
        let command = Command::new("git")
            .with_argument("commit")
            .with_short_option('m')
            .with_argument("it's done");

        assert_eq!(command.arguments().len(), 3);
        assert_eq!(command.arguments()[2], "it's done");
    }

    #[test]
    fn display_quotes_only_when_needed() {
        let command = Command::new("git")
            .with_argument("tag")
            .with_short_option('a')
            .with_argument("1.0.0")
            .with_short_option('m')
            .with_argument("first release");

        assert_eq!(command.to_string(), "git tag -a 1.0.0 -m 'first release'");
    }

    #[test]
    fn quote_edge_cases() {
        assert_eq!(quote(""), "''");
        assert_eq!(quote("origin/master"), "origin/master");
        assert_eq!(quote("it's"), r#"'it'"'"'s'"#);
        assert_eq!(quote("$(rm -rf /)"), "'$(rm -rf /)'");
        assert_eq!(quote("a\nb"), "'a\nb'");
    }

    #[test]
    fn environment_last_value_wins() {
        let command = Command::new("git")
            .with_environment("LC_ALL", "fr_FR")
            .with_environment("GIT_TERMINAL_PROMPT", "0")
            .with_environment("LC_ALL", "C");

        assert_eq!(
            command.environment(),
            [
                ("GIT_TERMINAL_PROMPT".to_string(), "0".to_string()),
                ("LC_ALL".to_string(), "C".to_string()),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_argument_is_kept_verbatim() {
        use std::os::unix::ffi::OsStrExt;

        let name = std::ffi::OsStr::from_bytes(b"f\xff.txt");
        let command = Command::new("git").with_argument("add").with_argument(name);

        assert_eq!(command.arguments()[1].as_os_str(), name);
        assert_eq!(command.to_string(), "git add 'f\u{fffd}.txt'");
    }

    #[test]
    #[should_panic(expected = "cannot be empty")]
    fn empty_program_panics() {
        let _ = Command::new("");
    }
}
