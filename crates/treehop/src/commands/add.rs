//! Implementation of `treehop add`

use owo_colors::OwoColorize;

use treehop_core::{
    BranchExistence, GitCli, TreehopError, compose_path, compute_suffix, is_protected,
    main_worktree_path,
};

use crate::commands::Outcome;
use crate::output::{AddData, JsonResponse};
use crate::prompt::Prompter;
use crate::resolve::resolve_branch;

/// Create a worktree for a branch and switch into it.
///
/// The target path is `<main-worktree>-<hash(branch)>`. An existing local or
/// origin-advertised branch is checked out directly; a branch that exists
/// nowhere is created after confirmation. Declining the confirmation is a
/// benign abort, not an error.
pub fn run_add(
    git: &GitCli,
    prompter: &dyn Prompter,
    branch_arg: Option<&str>,
    json: bool,
    quiet: bool,
) -> Result<Outcome, TreehopError> {
    // main/master never get a linked worktree, however they were spelled
    if let Some(name) = branch_arg {
        if is_protected(name) {
            return Err(TreehopError::ProtectedBranch(name.to_string()));
        }
    }

    let Some((branch, existence)) = resolve_branch(git, prompter, branch_arg, json)? else {
        return Err(TreehopError::NoBranchSelected);
    };
    if is_protected(&branch) {
        return Err(TreehopError::ProtectedBranch(branch));
    }

    let base = main_worktree_path(git)?;
    let token = compute_suffix(&base, &branch)?;
    let target = compose_path(&base, &token);

    let created_branch = match existence {
        BranchExistence::Local | BranchExistence::RemoteOnly => {
            git.worktree_add(&target, &branch)?;
            false
        }
        BranchExistence::Nonexistent => {
            if json {
                return Err(TreehopError::NonInteractive(
                    "creating a new branch needs confirmation; not supported with --json"
                        .to_string(),
                ));
            }
            let prompt_text = format!("Branch '{}' does not exist. Create it?", branch);
            match prompter.confirm(&prompt_text, true)? {
                Some(true) => {
                    git.worktree_add_new_branch(&target, &branch)?;
                    true
                }
                _ => {
                    if !quiet {
                        println!("Aborted");
                    }
                    return Ok(Outcome::success());
                }
            }
        }
    };

    if json {
        JsonResponse::ok(
            "add",
            AddData {
                path: target.display().to_string(),
                branch: branch.clone(),
                created_branch,
            },
        )
        .print()?;
    } else if !quiet {
        println!(
            "{} Created worktree {} [{}]",
            "✓".green(),
            target.display(),
            branch
        );
    }

    Ok(Outcome::switch_to(target))
}
