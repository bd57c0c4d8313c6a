//! Branch resolution for `treehop add`
//!
//! An exact local match or a branch advertised by origin is used directly,
//! with no prompt. Anything else goes through a fuzzy list of local
//! branches, pre-seeded with the typed name; the typed name itself is
//! offered as a new-branch candidate so a genuinely new branch can be
//! picked from the same list.

use treehop_core::{BranchExistence, GitCli, TreehopError, classify_branch};

use crate::prompt::Prompter;

const NEW_BRANCH_SUFFIX: &str = " (new branch)";

/// Resolve the branch for `add`.
///
/// Returns the branch name together with its existence classification, or
/// `None` when the user cancels the selection.
pub fn resolve_branch(
    git: &GitCli,
    prompter: &dyn Prompter,
    explicit: Option<&str>,
    json: bool,
) -> Result<Option<(String, BranchExistence)>, TreehopError> {
    match explicit {
        Some(name) => {
            let existence = classify_branch(git, name)?;
            match existence {
                BranchExistence::Local | BranchExistence::RemoteOnly => {
                    Ok(Some((name.to_string(), existence)))
                }
                BranchExistence::Nonexistent => {
                    if json {
                        return Err(TreehopError::NonInteractive(format!(
                            "branch '{}' does not exist; cannot narrow interactively with --json",
                            name
                        )));
                    }
                    pick_with_seed(git, prompter, name)
                }
            }
        }
        None => {
            if json {
                return Err(TreehopError::NonInteractive(
                    "`add` needs an explicit branch with --json".to_string(),
                ));
            }
            let branches = git.local_branches()?;
            if branches.is_empty() {
                return Ok(None);
            }
            match prompter.fuzzy_select("Select a branch", &branches, None)? {
                Some(selected) => Ok(Some((selected, BranchExistence::Local))),
                None => Ok(None),
            }
        }
    }
}

/// Seeded pick for a name with no exact match anywhere.
///
/// Local branches are selectable as-is; the typed name is appended as a
/// new-branch entry. The classification of whatever the user picks is
/// already known, so no refs are queried again.
fn pick_with_seed(
    git: &GitCli,
    prompter: &dyn Prompter,
    seed: &str,
) -> Result<Option<(String, BranchExistence)>, TreehopError> {
    let mut items = git.local_branches()?;
    items.push(format!("{}{}", seed, NEW_BRANCH_SUFFIX));

    match prompter.fuzzy_select("Select a branch", &items, Some(seed))? {
        None => Ok(None),
        Some(selected) => {
            if selected == format!("{}{}", seed, NEW_BRANCH_SUFFIX) {
                Ok(Some((seed.to_string(), BranchExistence::Nonexistent)))
            } else {
                Ok(Some((selected, BranchExistence::Local)))
            }
        }
    }
}
