//! Implementation of `treehop remove`

use std::path::Path;

use owo_colors::OwoColorize;

use treehop_core::{GitCli, TreehopError, list_worktrees};

use crate::commands::{Outcome, format_worktree_line, selected_path};
use crate::prompt::Prompter;

/// Interactively remove a linked worktree.
///
/// The main worktree is never a candidate. Zero candidates, a cancelled
/// selection, and a declined confirmation all exit 0.
pub fn run_remove(
    git: &GitCli,
    prompter: &dyn Prompter,
    force: bool,
    json: bool,
    quiet: bool,
) -> Result<Outcome, TreehopError> {
    if json {
        return Err(TreehopError::NonInteractive(
            "`remove` is interactive; --json is not supported".to_string(),
        ));
    }

    let records = list_worktrees(git)?;
    let Some((main_worktree, linked)) = records.split_first() else {
        return Err(TreehopError::NotInRepository);
    };

    if linked.is_empty() {
        if !quiet {
            println!("No linked worktrees to remove");
        }
        return Ok(Outcome::success());
    }

    let items: Vec<String> = linked.iter().map(format_worktree_line).collect();
    let Some(line) = prompter.fuzzy_select("Remove worktree", &items, None)? else {
        return Ok(Outcome::success());
    };
    let Some(path) = selected_path(&line) else {
        return Ok(Outcome::success());
    };

    let prompt_text = format!("Remove worktree {}?", path.display());
    match prompter.confirm(&prompt_text, false)? {
        Some(true) => {}
        _ => {
            if !quiet {
                println!("Aborted");
            }
            return Ok(Outcome::success());
        }
    }

    // Removing the directory we are standing in is undefined; step out to
    // the main worktree first.
    let inside_doomed = std::env::current_dir()
        .map(|cwd| path_contains(&path, &cwd))
        .unwrap_or(false);
    if inside_doomed {
        std::env::set_current_dir(&main_worktree.path)?;
    }

    if let Err(e) = git.worktree_remove(&path, force) {
        eprintln!("{} {}", "error:".red().bold(), e);
        if !force {
            eprintln!("hint: retry with `treehop remove --force`");
        }
        return Ok(Outcome::failure());
    }

    if !quiet {
        println!("{} Removed worktree {}", "✓".green(), path.display());
    }
    Ok(Outcome::success())
}

/// Whether `inner` lives under `outer`, after resolving symlinks.
///
/// Both sides are canonicalized so a cwd reached through a symlinked path
/// (macOS `/tmp`, for one) still counts as inside the worktree. A path that
/// cannot be canonicalized is compared as-is.
fn path_contains(outer: &Path, inner: &Path) -> bool {
    let outer = outer
        .canonicalize()
        .unwrap_or_else(|_| outer.to_path_buf());
    let inner = inner
        .canonicalize()
        .unwrap_or_else(|_| inner.to_path_buf());
    inner.starts_with(&outer)
}
