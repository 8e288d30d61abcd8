//! tag command - List, create, or push tags

use crate::cli::Context;
use crate::core::types::{Message, TagName};
use crate::git::Tag;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// List tags with their creation date and subject.
pub fn list(ctx: &Context) -> Result<()> {
    let tags = ctx
        .repository()?
        .tags()
        .all()
        .context("Failed to list tags")?;

    if ctx.json {
        output::json(&tags)?;
    } else {
        for tag in &tags {
            println!("{}", format_tag(tag));
        }
    }
    Ok(())
}

/// Create a tag at HEAD, annotated when a message is given.
pub fn add(ctx: &Context, name: &str, message: Option<&str>) -> Result<()> {
    let name = TagName::new(name).context("Invalid tag name")?;
    let message = message
        .map(Message::new)
        .transpose()
        .context("Invalid tag message")?;

    ctx.repository()?
        .tags()
        .add(&name, message.as_ref())
        .with_context(|| format!("Failed to create tag '{}'", name))?;

    output::success(format!("Created tag '{}'", name), ctx.verbosity());
    Ok(())
}

/// Create a signed annotated tag at HEAD.
pub fn sign(ctx: &Context, name: &str, message: &str) -> Result<()> {
    let name = TagName::new(name).context("Invalid tag name")?;
    let message = Message::new(message).context("Invalid tag message")?;

    ctx.repository()?
        .tags()
        .sign(&name, &message)
        .with_context(|| format!("Failed to sign tag '{}'", name))?;

    output::success(format!("Created signed tag '{}'", name), ctx.verbosity());
    Ok(())
}

/// Push all tags.
pub fn push(ctx: &Context) -> Result<()> {
    ctx.repository()?
        .tags()
        .push()
        .context("Failed to push tags")?;

    output::success("Pushed tags", ctx.verbosity());
    Ok(())
}

fn format_tag(tag: &Tag) -> String {
    format!(
        "{}\t{}\t{}",
        tag.name(),
        tag.created().format("%Y-%m-%d"),
        tag.message()
    )
}
