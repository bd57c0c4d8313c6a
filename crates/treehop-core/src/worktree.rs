//! Worktree listing records and porcelain parser
//!
//! `git worktree list --porcelain` groups attribute lines per worktree,
//! separated by blank lines. Each group starts with `worktree <path>`,
//! optionally followed by `HEAD <sha>`, `branch refs/heads/<name>`, and
//! flag lines such as `bare` or `detached`. The listing is a read-only
//! snapshot, re-fetched on every operation.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::TreehopError;
use crate::git::GitCli;

/// One entry of the worktree listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorktreeRecord {
    /// Absolute path of the working directory
    pub path: PathBuf,
    /// Short branch name; `None` for a detached or bare entry
    pub branch: Option<String>,
    /// Commit the worktree is at (empty for a bare entry)
    pub head: String,
}

/// Parse `git worktree list --porcelain` output.
///
/// Tolerant of unknown attribute lines and of a missing trailing blank line.
/// Groups without a `worktree` line are dropped.
pub fn parse_worktree_list(output: &str) -> Vec<WorktreeRecord> {
    let mut records = Vec::new();
    let mut current: Option<WorktreeRecord> = None;

    for line in output.lines() {
        if line.is_empty() {
            if let Some(record) = current.take() {
                records.push(record);
            }
            continue;
        }

        if let Some(path) = line.strip_prefix("worktree ") {
            if let Some(record) = current.take() {
                records.push(record);
            }
            current = Some(WorktreeRecord {
                path: PathBuf::from(path),
                branch: None,
                head: String::new(),
            });
        } else if let Some(record) = current.as_mut() {
            if let Some(sha) = line.strip_prefix("HEAD ") {
                record.head = sha.to_string();
            } else if let Some(refname) = line.strip_prefix("branch ") {
                let short = refname.strip_prefix("refs/heads/").unwrap_or(refname);
                record.branch = Some(short.to_string());
            }
            // bare / detached / locked / prunable lines carry no fields we use
        }
    }

    if let Some(record) = current.take() {
        records.push(record);
    }

    records
}

/// List all worktrees, in encounter order.
///
/// The first record is by convention the main worktree.
pub fn list_worktrees(git: &GitCli) -> Result<Vec<WorktreeRecord>, TreehopError> {
    Ok(parse_worktree_list(&git.worktree_list()?))
}

/// Path of the main worktree (the first listing entry, never a linked one)
pub fn main_worktree_path(git: &GitCli) -> Result<PathBuf, TreehopError> {
    list_worktrees(git)?
        .into_iter()
        .next()
        .map(|record| record.path)
        .ok_or(TreehopError::NotInRepository)
}
