//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates its arguments into typed values
//! 2. Calls one facade operation
//! 3. Formats and displays the result
//!
//! Listings honor `--json`; confirmations honor `--quiet`.

mod branch;
mod checkout;
mod completion;
mod remote;
mod repo;
mod tag;

pub use completion::completion;
pub use remote::UrlMode;
pub use repo::{add, commit, head, init, merge, pull, push, version};

use crate::cli::args::{BranchAction, CheckoutAction, Command, RemoteAction, TagAction};
use crate::cli::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Version => repo::version(ctx),
        Command::Init => repo::init(ctx),
        Command::Head => repo::head(ctx),

        Command::Branch { action } => match action {
            BranchAction::List { remote, all } => branch::list(ctx, remote, all),
            BranchAction::Create { name, off } => branch::create(ctx, &name, off.as_deref()),
            BranchAction::Orphan { name } => branch::orphan(ctx, &name),
            BranchAction::Delete { name, force } => branch::delete(ctx, &name, force),
        },

        Command::Checkout { action } => match action {
            CheckoutAction::File { path } => checkout::file(ctx, &path),
            CheckoutAction::Revision { revision } => checkout::revision(ctx, &revision),
        },

        Command::Remote { action } => match action {
            RemoteAction::List => remote::list(ctx),
            RemoteAction::Add { name, url } => remote::add(ctx, &name, &url),
            RemoteAction::Remove { name } => remote::remove(ctx, &name),
            RemoteAction::Prune { name } => remote::prune(ctx, &name),
            RemoteAction::SetUrl {
                name,
                url,
                add,
                delete,
            } => remote::set_url(ctx, &name, &url, UrlMode::from_flags(add, delete)),
            RemoteAction::Push { name, branch } => remote::push(ctx, &name, &branch),
            RemoteAction::DeleteBranch { name, branch } => {
                remote::delete_branch(ctx, &name, &branch)
            }
        },

        Command::Tag { action } => match action {
            TagAction::List => tag::list(ctx),
            TagAction::Add { name, message } => tag::add(ctx, &name, message.as_deref()),
            TagAction::Sign { name, message } => tag::sign(ctx, &name, &message),
            TagAction::Push => tag::push(ctx),
        },

        Command::Add { path } => repo::add(ctx, &path),
        Command::Commit { message } => repo::commit(ctx, &message),
        Command::Merge { branch } => repo::merge(ctx, &branch),
        Command::Push => repo::push(ctx),
        Command::Pull => repo::pull(ctx),

        Command::Completion { shell } => completion::completion(shell),
    }
}
