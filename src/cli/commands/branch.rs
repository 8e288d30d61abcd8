//! branch command - List, create, or delete branches

use crate::cli::Context;
use crate::core::types::{Branch, Revision};
use crate::ui::output;
use anyhow::{Context as _, Result};

/// List branches.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `remote` - Remote-tracking branches only
/// * `all` - Local then remote-tracking branches
pub fn list(ctx: &Context, remote: bool, all: bool) -> Result<()> {
    let branches = ctx.repository()?.branches();
    let listed = if all {
        branches.all()
    } else if remote {
        branches.remote()
    } else {
        branches.local()
    }
    .context("Failed to list branches")?;

    if ctx.json {
        output::json(&listed)?;
    } else if !listed.is_empty() {
        println!("{}", output::format_list(&listed, ""));
    }
    Ok(())
}

/// Create a branch at HEAD, or at `off` when given.
pub fn create(ctx: &Context, name: &str, off: Option<&str>) -> Result<()> {
    let name = Branch::new(name).context("Invalid branch name")?;
    let off = off
        .map(str::parse::<Revision>)
        .transpose()
        .context("Invalid revision")?;

    ctx.repository()?
        .branches()
        .create(&name, off.as_ref())
        .with_context(|| format!("Failed to create branch '{}'", name))?;

    output::success(format!("Created branch '{}'", name), ctx.verbosity());
    Ok(())
}

/// Create and switch to a branch with no history.
pub fn orphan(ctx: &Context, name: &str) -> Result<()> {
    let name = Branch::new(name).context("Invalid branch name")?;

    ctx.repository()?
        .branches()
        .create_orphan(&name)
        .with_context(|| format!("Failed to create orphan branch '{}'", name))?;

    output::success(
        format!("Switched to orphan branch '{}'", name),
        ctx.verbosity(),
    );
    Ok(())
}

/// Delete a branch.
pub fn delete(ctx: &Context, name: &str, force: bool) -> Result<()> {
    let name = Branch::new(name).context("Invalid branch name")?;
    let branches = ctx.repository()?.branches();

    let deleted = if force {
        branches.force_delete(&name)
    } else {
        branches.delete(&name)
    };
    deleted.with_context(|| format!("Failed to delete branch '{}'", name))?;

    output::success(format!("Deleted branch '{}'", name), ctx.verbosity());
    Ok(())
}
