//! treehop-core: git plumbing, worktree listing, and path hashing
//!
//! This crate provides the non-interactive half of treehop: everything that
//! talks to the git binary or the filesystem, with no terminal I/O.

/// Core error types for treehop operations
pub mod error;

/// Thin wrapper over the git binary
pub mod git;

/// Worktree listing parser and records
pub mod worktree;

/// Branch classification and default-branch detection
pub mod branch;

/// Collision-avoiding worktree path suffixes
pub mod pathhash;

// Re-exports for convenience
pub use branch::{BranchExistence, classify_branch, default_branch, is_protected};
pub use error::TreehopError;
pub use git::GitCli;
pub use pathhash::{compose_path, compute_suffix};
pub use worktree::{WorktreeRecord, list_worktrees, main_worktree_path, parse_worktree_list};
