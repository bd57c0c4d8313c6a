//! CLI argument parsing with clap derive
//!
//! The grammar has one unusual corner: a bare `treehop <branch>` jumps to
//! that branch's worktree. Clap's external-subcommand escape hatch catches
//! any token that is not a known subcommand, including `main` and `master`.

use clap::{Parser, Subcommand};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// treehop - interactive git worktree switcher
#[derive(Parser)]
#[command(name = "treehop")]
#[command(version = VERSION)]
#[command(about = "Interactive git worktree switcher")]
#[command(
    long_about = "treehop wraps `git worktree` with interactive selection menus.\n\nRun with no arguments to pick a worktree from a filterable list, `add` to create a worktree at a deterministic hashed path next to the main worktree, `remove` to delete one, or name a branch directly to jump to its worktree."
)]
pub struct Cli {
    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format (non-interactive commands only)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a worktree for a branch and switch into it
    ///
    /// Resolves the branch interactively when omitted or ambiguous.
    #[command(
        long_about = "Create a worktree for a branch and switch into it.\n\nThe worktree lands next to the main worktree at <main>-<hash>, where the hash is derived from the branch name.\n\nWith no argument, pick a local branch from a filterable list. A branch that only exists on origin becomes a tracking worktree; a branch that exists nowhere is created after confirmation."
    )]
    Add {
        /// Branch to check out in the new worktree
        branch: Option<String>,
    },

    /// Remove a linked worktree, chosen interactively
    ///
    /// The main worktree is never offered for removal.
    #[command(alias = "rm")]
    #[command(
        long_about = "Remove a linked worktree, chosen interactively.\n\nThe main worktree is never offered for removal. If the current directory is inside the selected worktree, treehop moves to the main worktree before removing it."
    )]
    Remove {
        /// Force removal even if the worktree is dirty or locked
        #[arg(short = 'f', long)]
        force: bool,
    },

    /// Jump to the worktree of the named branch (`main`/`master` included)
    #[command(external_subcommand)]
    Jump(Vec<String>),
}

/// Get the command args for use in the application
pub fn parse() -> Cli {
    Cli::parse()
}
