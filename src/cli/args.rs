//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run against the repository in that directory
//! - `--debug`: Log every git invocation to stderr
//! - `--quiet` / `-q`: Minimal output
//! - `--json`: Machine-readable output for listings
//! - `--binary <program>`: Git program to run instead of the configured one

use clap::{builder::NonEmptyStringValueParser, Parser, Subcommand};
use std::path::PathBuf;

/// gw - Typed front end to the git command-line program
#[derive(Parser, Debug)]
#[command(name = "gw")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if gw was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Log every git invocation to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print listings as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Git program to run (overrides configuration)
    #[arg(long, global = true, value_parser = NonEmptyStringValueParser::new())]
    pub binary: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the version of the git binary
    Version,

    /// Create or reinitialize a repository
    #[command(
        long_about = "Create or reinitialize a repository.\n\n\
            The directory is created if it does not exist. Running init on an \
            existing repository is safe and succeeds.",
        after_help = "\
EXAMPLES:
    # Initialize the current directory
    gw init

    # Initialize a new directory
    gw --cwd /tmp/project init"
    )]
    Init,

    /// Show the checked-out branch, or the hash when detached
    Head,

    /// List, create, or delete branches
    Branch {
        #[command(subcommand)]
        action: BranchAction,
    },

    /// Restore files or switch revisions
    Checkout {
        #[command(subcommand)]
        action: CheckoutAction,
    },

    /// Manage remotes
    Remote {
        #[command(subcommand)]
        action: RemoteAction,
    },

    /// List, create, or push tags
    Tag {
        #[command(subcommand)]
        action: TagAction,
    },

    /// Stage a path
    Add {
        /// Path to stage, relative to the repository
        path: PathBuf,
    },

    /// Record staged changes
    Commit {
        /// Commit message
        #[arg(short, long)]
        message: String,
    },

    /// Merge a branch into the current one
    Merge {
        /// Branch to merge
        branch: String,
    },

    /// Push the current branch to its upstream
    Push,

    /// Pull the current branch from its upstream
    Pull,

    /// Generate shell completion scripts
    #[command(after_help = "\
EXAMPLES:
    # Bash (add to ~/.bashrc)
    gw completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    gw completion zsh >> ~/.zshrc

    # Fish
    gw completion fish > ~/.config/fish/completions/gw.fish

    # PowerShell
    gw completion powershell >> $PROFILE")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Branch subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum BranchAction {
    /// List branches (local by default)
    List {
        /// List remote-tracking branches only
        #[arg(short, long, conflicts_with = "all")]
        remote: bool,

        /// List local then remote-tracking branches
        #[arg(short, long)]
        all: bool,
    },
    /// Create a branch at HEAD or at a given revision
    Create {
        /// Branch name
        name: String,
        /// Branch or hash to start from
        off: Option<String>,
    },
    /// Create and switch to a branch with no history
    Orphan {
        /// Branch name
        name: String,
    },
    /// Delete a branch
    Delete {
        /// Branch name
        name: String,
        /// Delete even if not fully merged
        #[arg(short, long)]
        force: bool,
    },
}

/// Checkout subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum CheckoutAction {
    /// Discard working-tree changes to a path
    File {
        /// Path to restore
        path: PathBuf,
    },
    /// Switch to a branch, or detach at a hash
    Revision {
        /// Branch name or commit hash
        revision: String,
    },
}

/// Remote subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum RemoteAction {
    /// List configured remotes
    List,
    /// Add a remote
    Add {
        /// Remote name
        name: String,
        /// Remote URL or path
        url: String,
    },
    /// Remove a remote
    Remove {
        /// Remote name
        name: String,
    },
    /// Drop stale remote-tracking branches
    Prune {
        /// Remote name
        name: String,
    },
    /// Replace, add, or delete a remote URL
    SetUrl {
        /// Remote name
        name: String,
        /// Remote URL or path
        url: String,
        /// Add the URL instead of replacing
        #[arg(long, conflicts_with = "delete")]
        add: bool,
        /// Delete the URL
        #[arg(long)]
        delete: bool,
    },
    /// Push a branch and track it on the remote
    Push {
        /// Remote name
        name: String,
        /// Branch to push
        branch: String,
    },
    /// Delete a branch on the remote
    DeleteBranch {
        /// Remote name
        name: String,
        /// Branch to delete
        branch: String,
    },
}

/// Tag subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum TagAction {
    /// List tags with their subject and date
    List,
    /// Create a tag at HEAD (annotated when a message is given)
    Add {
        /// Tag name
        name: String,
        /// Annotation message
        #[arg(short, long)]
        message: Option<String>,
    },
    /// Create a signed annotated tag at HEAD
    Sign {
        /// Tag name
        name: String,
        /// Annotation message
        #[arg(short, long)]
        message: String,
    },
    /// Push all tags
    Push,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["gw", "branch", "list", "--json", "-q"]).unwrap();
        assert!(cli.json);
        assert!(cli.quiet);
    }

    #[test]
    fn empty_binary_is_rejected() {
        assert!(Cli::try_parse_from(["gw", "--binary", "", "version"]).is_err());
    }

    #[test]
    fn remote_and_all_conflict() {
        assert!(Cli::try_parse_from(["gw", "branch", "list", "--remote", "--all"]).is_err());
    }

    #[test]
    fn set_url_modes_conflict() {
        assert!(
            Cli::try_parse_from(["gw", "remote", "set-url", "o", "/x", "--add", "--delete"])
                .is_err()
        );
    }
}
