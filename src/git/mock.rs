//! git::mock
//!
//! Scripted process implementation for deterministic testing.
//!
//! # Design
//!
//! `MockProcesses` never spawns anything. Every executed command is
//! recorded, and responses are replayed from a FIFO queue. When the queue
//! is empty the command succeeds with empty output.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use gitwrap::git::{Git, MockProcesses};
//!
//! let processes = MockProcesses::new();
//! processes.push_success("git version 2.39.1\n");
//!
//! let git = Git::new(Arc::new(processes.clone()));
//! let version = git.version().unwrap();
//!
//! assert_eq!(version.to_string(), "2.39.1");
//! assert_eq!(processes.executed()[0].to_string(), "git --version");
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::command::Command;
use super::process::{Output, ProcessFailure, Processes};

/// Scripted processes for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone, Default)]
pub struct MockProcesses {
    inner: Arc<Mutex<MockProcessesInner>>,
}

#[derive(Debug, Default)]
struct MockProcessesInner {
    /// Responses to replay, oldest first.
    responses: VecDeque<Result<Output, ProcessFailure>>,
    /// Every command executed so far.
    executed: Vec<Command>,
}

impl MockProcesses {
    /// Create a mock with no queued responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful run printing `stdout`.
    pub fn push_success(&self, stdout: impl Into<String>) {
        self.push(Ok(Output::new(stdout, "")));
    }

    /// Queue a run that exits with failure after printing `stderr`.
    pub fn push_failure(&self, stderr: impl Into<String>) {
        self.push(Err(ProcessFailure::Exit {
            status: "exit status: 1".to_string(),
            output: Output::new("", stderr),
        }));
    }

    /// Queue an arbitrary response.
    pub fn push(&self, response: Result<Output, ProcessFailure>) {
        let mut inner = self.inner.lock().unwrap();
        inner.responses.push_back(response);
    }

    /// Commands executed so far, oldest first.
    pub fn executed(&self) -> Vec<Command> {
        let inner = self.inner.lock().unwrap();
        inner.executed.clone()
    }

    /// Number of queued responses not consumed yet.
    pub fn pending(&self) -> usize {
        let inner = self.inner.lock().unwrap();
        inner.responses.len()
    }
}

impl Processes for MockProcesses {
    fn execute(&self, command: &Command) -> Result<Output, ProcessFailure> {
        let mut inner = self.inner.lock().unwrap();
        inner.executed.push(command.clone());
        inner
            .responses
            .pop_front()
            .unwrap_or_else(|| Ok(Output::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_in_order_then_defaults() {
        let mock = MockProcesses::new();
        mock.push_success("first");
        mock.push_failure("second");

        let command = Command::new("git");
        assert_eq!(mock.execute(&command).unwrap().stdout(), "first");
        assert!(mock.execute(&command).is_err());
        assert_eq!(mock.execute(&command).unwrap(), Output::default());
        assert_eq!(mock.executed().len(), 3);
        assert_eq!(mock.pending(), 0);
    }

    #[test]
    fn clones_share_state() {
        let mock = MockProcesses::new();
        let clone = mock.clone();
        clone.push_success("shared");

        assert_eq!(mock.pending(), 1);
        mock.execute(&Command::new("git")).unwrap();
        assert_eq!(clone.executed().len(), 1);
    }
}
