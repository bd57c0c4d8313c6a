//! Implementation of branch jumps (`treehop <branch>`, `treehop main`,
//! `treehop master`)

use treehop_core::{GitCli, TreehopError, WorktreeRecord, default_branch, list_worktrees};

use crate::commands::Outcome;
use crate::output::{JsonResponse, JumpData};

/// Jump to the worktree where `branch` is checked out.
///
/// No worktree for the branch is an error; the message suggests
/// `treehop add` since the branch may simply not be checked out anywhere yet.
pub fn run_jump_branch(
    git: &GitCli,
    branch: &str,
    json: bool,
    quiet: bool,
) -> Result<Outcome, TreehopError> {
    let records = list_worktrees(git)?;
    let record = find_branch(&records, branch).ok_or_else(|| TreehopError::WorktreeNotFound {
        branch: branch.to_string(),
    })?;

    report(record, branch, json, quiet)?;
    Ok(Outcome::switch_to(record.path.clone()))
}

/// Jump to the default-branch worktree.
///
/// With an override (`treehop main` / `treehop master`) that name is used
/// as-is; otherwise the default branch is detected from origin's symbolic
/// HEAD, then local `main`, then local `master`. A missing worktree here
/// gets no `add` suggestion: default-branch worktrees are assumed to
/// pre-exist.
pub fn run_jump_default(
    git: &GitCli,
    override_branch: Option<&str>,
    json: bool,
    quiet: bool,
) -> Result<Outcome, TreehopError> {
    let branch = match override_branch {
        Some(name) => name.to_string(),
        None => default_branch(git)?,
    };

    let records = list_worktrees(git)?;
    let record =
        find_branch(&records, &branch).ok_or_else(|| TreehopError::DefaultWorktreeMissing {
            branch: branch.clone(),
        })?;

    report(record, &branch, json, quiet)?;
    Ok(Outcome::switch_to(record.path.clone()))
}

fn find_branch<'a>(records: &'a [WorktreeRecord], branch: &str) -> Option<&'a WorktreeRecord> {
    records
        .iter()
        .find(|record| record.branch.as_deref() == Some(branch))
}

fn report(
    record: &WorktreeRecord,
    branch: &str,
    json: bool,
    quiet: bool,
) -> Result<(), TreehopError> {
    if json {
        JsonResponse::ok(
            "jump",
            JumpData {
                path: record.path.display().to_string(),
                branch: branch.to_string(),
            },
        )
        .print()?;
    } else if !quiet {
        println!("{}", record.path.display());
    }
    Ok(())
}
