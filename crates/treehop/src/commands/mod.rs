//! CLI command implementations

pub mod add;
pub mod jump;
pub mod pick;
pub mod remove;

pub use add::run_add;
pub use jump::{run_jump_branch, run_jump_default};
pub use pick::run_pick;
pub use remove::run_remove;

use std::path::PathBuf;

use treehop_core::WorktreeRecord;

/// What a handler produced: an exit code plus the directory the process
/// should end up in.
///
/// The working-directory change is the visible side effect of every jump;
/// handlers return it as a value and `main` performs the single mutation.
#[derive(Debug)]
pub struct Outcome {
    pub exit_code: i32,
    pub target_dir: Option<PathBuf>,
}

impl Outcome {
    /// Success with no directory change
    pub fn success() -> Self {
        Self {
            exit_code: 0,
            target_dir: None,
        }
    }

    /// Failure already reported by the handler
    pub fn failure() -> Self {
        Self {
            exit_code: 1,
            target_dir: None,
        }
    }

    /// Success ending up in the given directory
    pub fn switch_to(dir: PathBuf) -> Self {
        Self {
            exit_code: 0,
            target_dir: Some(dir),
        }
    }
}

/// One selectable line per worktree; the path is always the first
/// whitespace-delimited field, which is what gets extracted from a pick.
pub(crate) fn format_worktree_line(record: &WorktreeRecord) -> String {
    format!(
        "{}  [{}]",
        record.path.display(),
        record.branch.as_deref().unwrap_or("detached")
    )
}

/// Path token of a selected line
pub(crate) fn selected_path(line: &str) -> Option<PathBuf> {
    line.split_whitespace().next().map(PathBuf::from)
}
