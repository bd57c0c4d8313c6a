//! Branch existence classification and default-branch detection

use crate::error::TreehopError;
use crate::git::GitCli;

/// Branches that only ever get jumped to, never a fresh linked worktree
pub const PROTECTED_BRANCHES: [&str; 2] = ["main", "master"];

/// Three-way branch existence.
///
/// A single tagged value rather than a pair of booleans: "exists remotely"
/// must trigger tracked-branch creation rather than the new-branch prompt,
/// and an inconsistent boolean pair has no meaning here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchExistence {
    /// Exists as a local ref (regardless of any remote state)
    Local,
    /// Absent locally, present among origin's advertised heads
    RemoteOnly,
    /// Absent from both
    Nonexistent,
}

/// Classify a branch name against local refs and origin's heads.
///
/// A branch that exists both locally and remotely classifies as `Local`;
/// the worktree is created from the local ref with no sync logic.
pub fn classify_branch(git: &GitCli, branch: &str) -> Result<BranchExistence, TreehopError> {
    if git.local_branch_exists(branch) {
        return Ok(BranchExistence::Local);
    }
    if git.remote_branch_exists(branch)? {
        return Ok(BranchExistence::RemoteOnly);
    }
    Ok(BranchExistence::Nonexistent)
}

/// Whether the branch is navigation-only for `add`
pub fn is_protected(branch: &str) -> bool {
    PROTECTED_BRANCHES.contains(&branch)
}

/// Detect the repository's default branch.
///
/// Order: origin's symbolic HEAD, then a local `main` ref, then a local
/// `master` ref.
pub fn default_branch(git: &GitCli) -> Result<String, TreehopError> {
    if let Some(branch) = git.remote_default_branch() {
        return Ok(branch);
    }
    for candidate in PROTECTED_BRANCHES {
        if git.local_branch_exists(candidate) {
            return Ok(candidate.to_string());
        }
    }
    Err(TreehopError::DefaultBranchUnknown)
}
