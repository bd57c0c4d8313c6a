//! Integration tests driving the treehop binary against real git
//! repositories.
//!
//! Stdin is always null here, so any code path that reaches an interactive
//! prompt fails with a nonzero exit; exit 0 therefore also proves that no
//! prompt was shown.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use treehop_core::pathhash::hash_token;
use treehop_core::parse_worktree_list;

fn treehop_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_treehop"))
}

fn run_treehop(dir: &Path, args: &[&str]) -> Output {
    Command::new(treehop_binary())
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .output()
        .expect("failed to run treehop")
}

fn git(repo: &Path, args: &[&str]) {
    let output = Command::new("git")
        .arg("-C")
        .arg(repo)
        .args(args)
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Create a git repository with one commit on `main`
fn setup_test_repo() -> (tempfile::TempDir, PathBuf) {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let repo = temp.path().join("repo");
    fs::create_dir(&repo).expect("failed to create repo dir");

    git(&repo, &["init", "-b", "main"]);
    git(&repo, &["config", "user.email", "test@example.com"]);
    git(&repo, &["config", "user.name", "Test User"]);
    fs::write(repo.join("README.md"), "test repo\n").expect("failed to write file");
    git(&repo, &["add", "."]);
    git(&repo, &["commit", "-m", "Initial commit"]);

    (temp, repo)
}

/// Main worktree path as git reports it (the listing is authoritative)
fn main_worktree_path(repo: &Path) -> PathBuf {
    let output = Command::new("git")
        .arg("-C")
        .arg(repo)
        .args(["worktree", "list", "--porcelain"])
        .output()
        .expect("failed to list worktrees");
    let records = parse_worktree_list(&String::from_utf8_lossy(&output.stdout));
    records.first().expect("no worktrees listed").path.clone()
}

fn worktree_count(repo: &Path) -> usize {
    let output = Command::new("git")
        .arg("-C")
        .arg(repo)
        .args(["worktree", "list", "--porcelain"])
        .output()
        .expect("failed to list worktrees");
    parse_worktree_list(&String::from_utf8_lossy(&output.stdout)).len()
}

#[test]
fn test_help_exits_zero() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let output = run_treehop(temp.path(), &["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("add"));
    assert!(stdout.contains("remove"));
}

#[test]
fn test_outside_repository_fails_preflight() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let output = run_treehop(temp.path(), &["main"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not inside a git working tree"));
}

#[test]
fn test_jump_to_default_branch_worktree() {
    let (_temp, repo) = setup_test_repo();
    let output = run_treehop(&repo, &["main"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&main_worktree_path(&repo).display().to_string()));
}

#[test]
fn test_quiet_suppresses_output() {
    let (_temp, repo) = setup_test_repo();
    let output = run_treehop(&repo, &["--quiet", "main"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_jump_to_unknown_branch_suggests_add() {
    let (_temp, repo) = setup_test_repo();
    let output = run_treehop(&repo, &["feature/nope"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no worktree found for branch 'feature/nope'"));
    assert!(stderr.contains("treehop add feature/nope"));
}

#[test]
fn test_remove_with_no_linked_worktrees_is_noop() {
    let (_temp, repo) = setup_test_repo();
    let output = run_treehop(&repo, &["remove"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No linked worktrees to remove"));
}

#[test]
fn test_add_protected_branch_rejected() {
    let (_temp, repo) = setup_test_repo();
    for branch in ["main", "master"] {
        let output = run_treehop(&repo, &["add", branch]);
        assert_eq!(output.status.code(), Some(1));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("protected"));
    }
    // No worktree was created by either attempt
    assert_eq!(worktree_count(&repo), 1);
}

#[test]
fn test_add_local_branch_creates_hashed_worktree() {
    let (_temp, repo) = setup_test_repo();
    git(&repo, &["branch", "feature/x"]);

    let output = run_treehop(&repo, &["add", "feature/x"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let base = main_worktree_path(&repo);
    let expected = PathBuf::from(format!(
        "{}-{}",
        base.display(),
        hash_token("feature/x", 0)
    ));
    assert!(expected.exists(), "expected worktree at {:?}", expected);
    assert_eq!(worktree_count(&repo), 2);

    // Jumping to the branch now resolves to the new worktree
    let output = run_treehop(&repo, &["feature/x"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&expected.display().to_string()));
}

#[test]
fn test_add_remote_only_branch_tracks_without_prompting() {
    let (temp, source) = setup_test_repo();
    git(&source, &["branch", "feature/x"]);

    let clone = temp.path().join("clone");
    let output = Command::new("git")
        .args([
            "clone",
            &source.display().to_string(),
            &clone.display().to_string(),
        ])
        .output()
        .expect("failed to run git clone");
    assert!(output.status.success());

    // Stdin is null: success means the tracking worktree was created with
    // no branch-creation confirmation.
    let output = run_treehop(&clone, &["add", "feature/x"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(worktree_count(&clone), 2);

    // The local tracking branch now exists in the clone
    let output = Command::new("git")
        .arg("-C")
        .arg(&clone)
        .args(["show-ref", "--verify", "--quiet", "refs/heads/feature/x"])
        .output()
        .expect("failed to run git show-ref");
    assert!(output.status.success());
}

#[test]
fn test_add_nonexistent_branch_without_terminal_fails_cleanly() {
    let (_temp, repo) = setup_test_repo();
    let output = run_treehop(&repo, &["add", "feature/brand-new"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not a terminal"));
    // Nothing was created
    assert_eq!(worktree_count(&repo), 1);
}

#[test]
fn test_bare_pick_without_terminal_fails_cleanly() {
    let (_temp, repo) = setup_test_repo();
    let output = run_treehop(&repo, &[]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("interactive selection unavailable"));
}

#[test]
fn test_json_add_emits_envelope() {
    let (_temp, repo) = setup_test_repo();
    git(&repo, &["branch", "feature/x"]);

    let output = run_treehop(&repo, &["--json", "add", "feature/x"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(parsed["schema_version"], "1");
    assert_eq!(parsed["command"], "add");
    assert_eq!(parsed["status"], "ok");
    assert_eq!(parsed["data"]["branch"], "feature/x");
    assert_eq!(parsed["data"]["created_branch"], false);
}

#[test]
fn test_json_jump_emits_envelope() {
    let (_temp, repo) = setup_test_repo();
    let output = run_treehop(&repo, &["--json", "main"]);
    assert!(output.status.success());

    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(parsed["command"], "jump");
    assert_eq!(parsed["data"]["branch"], "main");
}

#[test]
fn test_json_rejects_interactive_commands() {
    let (_temp, repo) = setup_test_repo();

    let output = run_treehop(&repo, &["--json"]);
    assert_eq!(output.status.code(), Some(1));

    let output = run_treehop(&repo, &["--json", "remove"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--json"));
}

#[test]
fn test_add_same_branch_twice_fails_on_git_not_hash() {
    let (_temp, repo) = setup_test_repo();
    git(&repo, &["branch", "feature/x"]);

    let output = run_treehop(&repo, &["add", "feature/x"]);
    assert!(output.status.success());

    // Second add aims at a fresh hashed path (counter 1) but git refuses to
    // check the same branch out twice.
    let output = run_treehop(&repo, &["add", "feature/x"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("worktree add"));
    assert_eq!(worktree_count(&repo), 2);
}
