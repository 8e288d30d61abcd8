//! repository commands - version, init, head, add, commit, merge, push, pull

use std::path::Path;

use crate::cli::Context;
use crate::core::types::{Branch, Message, Revision};
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Show the version of the git binary.
pub fn version(ctx: &Context) -> Result<()> {
    let version = ctx
        .git()
        .version()
        .context("Failed to query git version")?;

    if ctx.json {
        output::json(&version)?;
    } else {
        println!("git {}", version);
    }
    Ok(())
}

/// Create or reinitialize the repository.
pub fn init(ctx: &Context) -> Result<()> {
    let repo = ctx.repository()?;
    repo.init().context("Failed to initialize repository")?;

    output::success(
        format!("Initialized repository in {}", repo.path().display()),
        ctx.verbosity(),
    );
    Ok(())
}

/// Show the checked-out branch, or the hash when detached.
pub fn head(ctx: &Context) -> Result<()> {
    let head = ctx
        .repository()?
        .head()
        .context("Failed to determine HEAD")?;

    if ctx.json {
        let detached = matches!(head, Revision::Hash(_));
        output::json(&serde_json::json!({
            "revision": head,
            "detached": detached,
        }))?;
    } else {
        println!("{}", head);
    }
    Ok(())
}

/// Stage a path.
pub fn add(ctx: &Context, path: &Path) -> Result<()> {
    ctx.repository()?
        .add(path)
        .with_context(|| format!("Failed to add {}", path.display()))?;

    output::success(format!("Staged {}", path.display()), ctx.verbosity());
    Ok(())
}

/// Record staged changes.
pub fn commit(ctx: &Context, message: &str) -> Result<()> {
    let message = Message::new(message).context("Invalid commit message")?;
    ctx.repository()?
        .commit(&message)
        .context("Failed to commit")?;

    output::success("Committed", ctx.verbosity());
    Ok(())
}

/// Merge a branch into the current one.
pub fn merge(ctx: &Context, branch: &str) -> Result<()> {
    let branch = Branch::new(branch).context("Invalid branch name")?;
    ctx.repository()?
        .merge(&branch)
        .with_context(|| format!("Failed to merge '{}'", branch))?;

    output::success(format!("Merged '{}'", branch), ctx.verbosity());
    Ok(())
}

/// Push the current branch to its upstream.
pub fn push(ctx: &Context) -> Result<()> {
    ctx.repository()?.push().context("Failed to push")?;

    output::success("Pushed", ctx.verbosity());
    Ok(())
}

/// Pull the current branch from its upstream.
pub fn pull(ctx: &Context) -> Result<()> {
    ctx.repository()?.pull().context("Failed to pull")?;

    output::success("Pulled", ctx.verbosity());
    Ok(())
}
