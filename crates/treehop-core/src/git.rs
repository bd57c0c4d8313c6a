//! Git CLI wrapper
//!
//! All git access goes through [`GitCli`], a thin `std::process::Command`
//! wrapper. The repository is the external system of record; nothing here is
//! cached between calls.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use crate::error::TreehopError;

/// Thin wrapper over the git binary, rooted at a working directory
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// A wrapper rooted at the process working directory
    pub fn current_dir() -> Self {
        Self::new(".")
    }

    fn run(&self, args: &[&str]) -> Result<Output, TreehopError> {
        Command::new("git")
            .arg("-C")
            .arg(&self.workdir)
            .args(args)
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    TreehopError::GitNotFound
                } else {
                    TreehopError::Io(e)
                }
            })
    }

    /// Run a git command and require a zero exit status, returning stdout
    fn run_checked(&self, args: &[&str]) -> Result<String, TreehopError> {
        let output = self.run(args)?;
        if !output.status.success() {
            return Err(TreehopError::GitCommand {
                command: args.join(" "),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Check that the git binary is invocable at all
    pub fn ensure_available(&self) -> Result<(), TreehopError> {
        let output = self.run(&["--version"])?;
        if !output.status.success() {
            return Err(TreehopError::GitNotFound);
        }
        Ok(())
    }

    /// Check whether the working directory is inside a git working tree
    pub fn is_inside_work_tree(&self) -> Result<bool, TreehopError> {
        let output = self.run(&["rev-parse", "--is-inside-work-tree"])?;
        Ok(output.status.success()
            && String::from_utf8_lossy(&output.stdout).trim() == "true")
    }

    /// List short names of all local branches, in ref order
    pub fn local_branches(&self) -> Result<Vec<String>, TreehopError> {
        let stdout =
            self.run_checked(&["for-each-ref", "--format=%(refname:short)", "refs/heads/"])?;
        Ok(stdout.lines().map(|l| l.trim().to_string()).collect())
    }

    /// Check whether a local branch ref exists
    pub fn local_branch_exists(&self, branch: &str) -> bool {
        let refname = format!("refs/heads/{}", branch);
        self.run(&["show-ref", "--verify", "--quiet", &refname])
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    /// Check whether the branch is among origin's advertised heads.
    ///
    /// ls-remote patterns tail-match, so the query uses the fully qualified
    /// refname and the returned refname column is compared exactly; a short
    /// name like `x` must not read as present just because `feature/x`
    /// exists on origin. A missing or unreachable remote reads as "not on
    /// the remote"; the caller then falls through to the new-branch path.
    pub fn remote_branch_exists(&self, branch: &str) -> Result<bool, TreehopError> {
        let refname = format!("refs/heads/{}", branch);
        let output = self.run(&["ls-remote", "--heads", "origin", &refname])?;
        if !output.status.success() {
            return Ok(false);
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout
            .lines()
            .any(|line| line.split_whitespace().nth(1) == Some(refname.as_str())))
    }

    /// Query origin's symbolic HEAD for the default branch name
    pub fn remote_default_branch(&self) -> Option<String> {
        let output = self.run(&["ls-remote", "--symref", "origin", "HEAD"]).ok()?;
        if !output.status.success() {
            return None;
        }
        // First line looks like: "ref: refs/heads/main\tHEAD"
        let stdout = String::from_utf8_lossy(&output.stdout);
        let line = stdout.lines().find(|l| l.starts_with("ref: "))?;
        let refname = line.strip_prefix("ref: ")?.split_whitespace().next()?;
        refname.strip_prefix("refs/heads/").map(str::to_string)
    }

    /// Machine-readable worktree listing (`git worktree list --porcelain`)
    pub fn worktree_list(&self) -> Result<String, TreehopError> {
        self.run_checked(&["worktree", "list", "--porcelain"])
    }

    /// Create a worktree checked out at an existing branch.
    ///
    /// For a branch that only exists on origin, git's DWIM creates the local
    /// tracking branch as part of the checkout.
    pub fn worktree_add(&self, path: &Path, branch: &str) -> Result<(), TreehopError> {
        let path_str = path_as_str(path)?;
        self.run_checked(&["worktree", "add", path_str, branch])?;
        Ok(())
    }

    /// Create a brand-new branch from HEAD and check it out in a worktree
    pub fn worktree_add_new_branch(&self, path: &Path, branch: &str) -> Result<(), TreehopError> {
        let path_str = path_as_str(path)?;
        self.run_checked(&["worktree", "add", "-b", branch, path_str])?;
        Ok(())
    }

    /// Remove a worktree, optionally forced
    pub fn worktree_remove(&self, path: &Path, force: bool) -> Result<(), TreehopError> {
        let path_str = path_as_str(path)?;
        if force {
            self.run_checked(&["worktree", "remove", "--force", path_str])?;
        } else {
            self.run_checked(&["worktree", "remove", path_str])?;
        }
        Ok(())
    }
}

fn path_as_str(path: &Path) -> Result<&str, TreehopError> {
    path.to_str().ok_or_else(|| {
        TreehopError::Io(std::io::Error::other(format!(
            "worktree path is not valid UTF-8: {}",
            path.display()
        )))
    })
}
