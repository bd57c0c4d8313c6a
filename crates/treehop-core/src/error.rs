//! Error types for treehop operations
//!
//! User cancellations (empty selections, declined confirmations) are not
//! errors and never appear here; handlers report them as successful no-ops.

use thiserror::Error;

/// Core error type for treehop operations
#[derive(Error, Debug)]
pub enum TreehopError {
    /// The git binary is missing from PATH
    #[error("git executable not found in PATH")]
    GitNotFound,

    /// The current directory is not inside a git working tree
    #[error("not inside a git working tree")]
    NotInRepository,

    /// Branch resolution ended without a usable branch name
    #[error("no branch selected")]
    NoBranchSelected,

    /// main/master are navigation-only and cannot get a linked worktree
    #[error("branch '{0}' is protected; use `treehop {0}` to jump to it")]
    ProtectedBranch(String),

    /// No worktree has the requested branch checked out
    #[error("no worktree found for branch '{branch}'; run `treehop add {branch}` to create one")]
    WorktreeNotFound { branch: String },

    /// Like [`TreehopError::WorktreeNotFound`] but for the default branch,
    /// where suggesting `treehop add` would be wrong: default-branch
    /// worktrees are assumed to pre-exist.
    #[error("no worktree found for default branch '{branch}'")]
    DefaultWorktreeMissing { branch: String },

    /// Neither the remote symbolic HEAD nor a local main/master ref resolved
    #[error("could not detect default branch")]
    DefaultBranchUnknown,

    /// A prompt was needed but cannot be shown
    #[error("interactive selection unavailable: {0}")]
    NonInteractive(String),

    /// The collision probe gave up; only plausible on a pathological
    /// filesystem layout
    #[error("no free worktree path for branch '{branch}' after {attempts} probes")]
    PathProbeExhausted { branch: String, attempts: u32 },

    /// A git invocation exited nonzero
    #[error("`git {command}` failed: {stderr}")]
    GitCommand { command: String, stderr: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TreehopError {
    /// Get the process exit code for this error.
    ///
    /// Every failure is terminal for the invocation and exits 1; exit 0 is
    /// reserved for success and user cancellation.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
