//! Implementation of the bare `treehop` interactive pick

use treehop_core::{GitCli, TreehopError, list_worktrees};

use crate::commands::{Outcome, format_worktree_line, selected_path};
use crate::prompt::Prompter;

/// Pick a worktree from a filterable list and switch into it.
///
/// The main worktree is included. A cancelled selection is a no-op success.
pub fn run_pick(
    git: &GitCli,
    prompter: &dyn Prompter,
    json: bool,
    quiet: bool,
) -> Result<Outcome, TreehopError> {
    if json {
        return Err(TreehopError::NonInteractive(
            "the worktree pick is interactive; --json is not supported".to_string(),
        ));
    }

    let records = list_worktrees(git)?;
    if records.is_empty() {
        // Inside a repository the main worktree always lists; an empty
        // listing means we are not where we think we are.
        return Err(TreehopError::NotInRepository);
    }

    let items: Vec<String> = records.iter().map(format_worktree_line).collect();
    let Some(line) = prompter.fuzzy_select("Jump to worktree", &items, None)? else {
        return Ok(Outcome::success());
    };
    let Some(path) = selected_path(&line) else {
        return Ok(Outcome::success());
    };

    if !quiet {
        println!("{}", path.display());
    }
    Ok(Outcome::switch_to(path))
}
