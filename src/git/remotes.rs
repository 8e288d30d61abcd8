//! git::remotes
//!
//! Remote management.
//!
//! [`Remotes`] lists, adds and removes remotes; [`Remote`] acts on one of
//! them (URLs, pruning, pushing and deleting branches on it).

use super::binary::Binary;
use super::command::Command;
use super::error::Result;
use super::parse;
use crate::core::types::{Branch, RemoteName, RemoteUrl};

/// Remote operations of a repository.
#[derive(Debug, Clone)]
pub struct Remotes {
    binary: Binary,
}

impl Remotes {
    pub(crate) fn new(binary: Binary) -> Self {
        Self { binary }
    }

    /// Every configured remote (`git remote`).
    pub fn all(&self) -> Result<Vec<Remote>> {
        let output = self
            .binary
            .invoke(self.binary.command().with_argument("remote"))?;

        Ok(parse::remotes(output.stdout())
            .into_iter()
            .map(|name| self.get(name))
            .collect())
    }

    /// Handle on a remote by name. Does not check that it exists.
    pub fn get(&self, name: RemoteName) -> Remote {
        Remote {
            binary: self.binary.clone(),
            name,
        }
    }

    /// Register a new remote (`git remote add <name> <url>`).
    pub fn add(&self, name: RemoteName, url: &RemoteUrl) -> Result<Remote> {
        self.binary.invoke(
            self.binary
                .command()
                .with_argument("remote")
                .with_argument("add")
                .with_argument(name.as_str())
                .with_argument(url.as_str()),
        )?;
        Ok(self.get(name))
    }

    /// Forget a remote (`git remote remove <name>`).
    pub fn remove(&self, name: &RemoteName) -> Result<()> {
        self.binary
            .invoke(
                self.binary
                    .command()
                    .with_argument("remote")
                    .with_argument("remove")
                    .with_argument(name.as_str()),
            )
            .map(drop)
    }
}

/// One configured remote.
#[derive(Debug, Clone)]
pub struct Remote {
    binary: Binary,
    name: RemoteName,
}

impl Remote {
    pub fn name(&self) -> &RemoteName {
        &self.name
    }

    /// Drop stale remote-tracking branches (`git remote prune <name>`).
    pub fn prune(&self) -> Result<()> {
        self.run(
            self.remote_command()
                .with_argument("prune")
                .with_argument(self.name.as_str()),
        )
    }

    /// Replace the remote's URL.
    pub fn set_url(&self, url: &RemoteUrl) -> Result<()> {
        self.run(self.set_url_command(None, url))
    }

    /// Add a push/fetch URL (`set-url --add`).
    pub fn add_url(&self, url: &RemoteUrl) -> Result<()> {
        self.run(self.set_url_command(Some("add"), url))
    }

    /// Remove a URL (`set-url --delete`).
    pub fn delete_url(&self, url: &RemoteUrl) -> Result<()> {
        self.run(self.set_url_command(Some("delete"), url))
    }

    /// Push `branch` and set it to track this remote (`push -u`).
    pub fn push(&self, branch: &Branch) -> Result<()> {
        self.run(
            self.binary
                .command()
                .with_argument("push")
                .with_short_option('u')
                .with_argument(self.name.as_str())
                .with_argument(branch.as_str()),
        )
    }

    /// Delete `branch` on this remote (`push <name> :<branch>`).
    pub fn delete(&self, branch: &Branch) -> Result<()> {
        self.run(
            self.binary
                .command()
                .with_argument("push")
                .with_argument(self.name.as_str())
                .with_argument(format!(":{}", branch)),
        )
    }

    fn remote_command(&self) -> Command {
        self.binary.command().with_argument("remote")
    }

    fn set_url_command(&self, mode: Option<&str>, url: &RemoteUrl) -> Command {
        let mut command = self.remote_command().with_argument("set-url");
        if let Some(mode) = mode {
            command = command.with_option(mode);
        }
        command
            .with_argument(self.name.as_str())
            .with_argument(url.as_str())
    }

    fn run(&self, command: Command) -> Result<()> {
        self.binary.invoke(command).map(drop)
    }
}
