//! checkout command - Restore a file or switch revisions

use std::path::Path;

use crate::cli::Context;
use crate::core::types::Revision;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Discard working-tree changes to `path`.
pub fn file(ctx: &Context, path: &Path) -> Result<()> {
    ctx.repository()?
        .checkout()
        .file(path)
        .with_context(|| format!("Failed to restore {}", path.display()))?;

    output::success(format!("Restored {}", path.display()), ctx.verbosity());
    Ok(())
}

/// Switch to a branch, or detach at a hash.
pub fn revision(ctx: &Context, revision: &str) -> Result<()> {
    let revision: Revision = revision.parse().context("Invalid revision")?;

    ctx.repository()?
        .checkout()
        .revision(&revision)
        .with_context(|| format!("Failed to check out '{}'", revision))?;

    match revision {
        Revision::Branch(branch) => {
            output::success(format!("Switched to '{}'", branch), ctx.verbosity())
        }
        Revision::Hash(hash) => output::success(
            format!("HEAD is now detached at {}", hash.short(7)),
            ctx.verbosity(),
        ),
    }
    Ok(())
}
