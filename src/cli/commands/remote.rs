//! remote command - Manage remotes

use crate::cli::Context;
use crate::core::types::{Branch, RemoteName, RemoteUrl};
use crate::git::Remote;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// How `set-url` treats the given URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlMode {
    Replace,
    Add,
    Delete,
}

impl UrlMode {
    pub fn from_flags(add: bool, delete: bool) -> Self {
        match (add, delete) {
            (true, _) => UrlMode::Add,
            (_, true) => UrlMode::Delete,
            _ => UrlMode::Replace,
        }
    }
}

/// List configured remotes.
pub fn list(ctx: &Context) -> Result<()> {
    let names: Vec<RemoteName> = ctx
        .repository()?
        .remotes()
        .all()
        .context("Failed to list remotes")?
        .iter()
        .map(|remote| remote.name().clone())
        .collect();

    if ctx.json {
        output::json(&names)?;
    } else if !names.is_empty() {
        println!("{}", output::format_list(&names, ""));
    }
    Ok(())
}

/// Add a remote.
pub fn add(ctx: &Context, name: &str, url: &str) -> Result<()> {
    let name = RemoteName::new(name).context("Invalid remote name")?;
    let url = RemoteUrl::new(url).context("Invalid remote url")?;

    let remote = ctx
        .repository()?
        .remotes()
        .add(name, &url)
        .context("Failed to add remote")?;

    output::success(
        format!("Added remote '{}' ({})", remote.name(), url),
        ctx.verbosity(),
    );
    Ok(())
}

/// Remove a remote.
pub fn remove(ctx: &Context, name: &str) -> Result<()> {
    let name = RemoteName::new(name).context("Invalid remote name")?;

    ctx.repository()?
        .remotes()
        .remove(&name)
        .with_context(|| format!("Failed to remove remote '{}'", name))?;

    output::success(format!("Removed remote '{}'", name), ctx.verbosity());
    Ok(())
}

/// Drop stale remote-tracking branches.
pub fn prune(ctx: &Context, name: &str) -> Result<()> {
    let remote = remote(ctx, name)?;
    remote
        .prune()
        .with_context(|| format!("Failed to prune '{}'", remote.name()))?;

    output::success(format!("Pruned '{}'", remote.name()), ctx.verbosity());
    Ok(())
}

/// Replace, add, or delete a remote URL.
pub fn set_url(ctx: &Context, name: &str, url: &str, mode: UrlMode) -> Result<()> {
    let remote = remote(ctx, name)?;
    let url = RemoteUrl::new(url).context("Invalid remote url")?;

    let updated = match mode {
        UrlMode::Replace => remote.set_url(&url),
        UrlMode::Add => remote.add_url(&url),
        UrlMode::Delete => remote.delete_url(&url),
    };
    updated.with_context(|| format!("Failed to update urls of '{}'", remote.name()))?;

    output::success(
        format!("Updated urls of '{}'", remote.name()),
        ctx.verbosity(),
    );
    Ok(())
}

/// Push a branch and track it on the remote.
pub fn push(ctx: &Context, name: &str, branch: &str) -> Result<()> {
    let remote = remote(ctx, name)?;
    let branch = Branch::new(branch).context("Invalid branch name")?;

    remote
        .push(&branch)
        .with_context(|| format!("Failed to push '{}' to '{}'", branch, remote.name()))?;

    output::success(
        format!("Pushed '{}' to '{}'", branch, remote.name()),
        ctx.verbosity(),
    );
    Ok(())
}

/// Delete a branch on the remote.
pub fn delete_branch(ctx: &Context, name: &str, branch: &str) -> Result<()> {
    let remote = remote(ctx, name)?;
    let branch = Branch::new(branch).context("Invalid branch name")?;

    remote
        .delete(&branch)
        .with_context(|| format!("Failed to delete '{}' on '{}'", branch, remote.name()))?;

    output::success(
        format!("Deleted '{}' on '{}'", branch, remote.name()),
        ctx.verbosity(),
    );
    Ok(())
}

fn remote(ctx: &Context, name: &str) -> Result<Remote> {
    let name = RemoteName::new(name).context("Invalid remote name")?;
    Ok(ctx.repository()?.remotes().get(name))
}
