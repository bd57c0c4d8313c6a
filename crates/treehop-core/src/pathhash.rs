//! Collision-avoiding path suffixes for new worktrees
//!
//! A worktree directory is placed next to the main worktree as
//! `<main>-<token>`, where the token is derived from the branch name. The
//! token is stable for a given branch as long as no colliding path exists,
//! so re-running `add` for the same branch always aims at the same place.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::TreehopError;

/// Length of the hex token appended to the main worktree path
const TOKEN_LEN: usize = 7;

/// Probe cap; turns a pathological filesystem into an error instead of a
/// busy loop
const MAX_PROBES: u32 = 10_000;

/// Hash token for a branch name at a given probe counter.
///
/// Counter 0 hashes the bare branch name; counter n > 0 hashes the branch
/// name with the decimal counter appended.
pub fn hash_token(branch: &str, counter: u32) -> String {
    let mut hasher = Sha256::new();
    hasher.update(branch.as_bytes());
    if counter > 0 {
        hasher.update(counter.to_string().as_bytes());
    }
    let digest = format!("{:x}", hasher.finalize());
    digest[..TOKEN_LEN].to_string()
}

/// Compose the candidate worktree path for a token
pub fn compose_path(base: &Path, token: &str) -> PathBuf {
    PathBuf::from(format!("{}-{}", base.display(), token))
}

/// Find a token whose composed path does not exist yet.
///
/// Deterministic for a fixed branch name and existing-path set: the counter
/// always starts at 0 and stops at the first free path. Side-effect-free
/// apart from existence checks.
pub fn compute_suffix(base: &Path, branch: &str) -> Result<String, TreehopError> {
    for counter in 0..MAX_PROBES {
        let token = hash_token(branch, counter);
        if !compose_path(base, &token).exists() {
            return Ok(token);
        }
    }
    Err(TreehopError::PathProbeExhausted {
        branch: branch.to_string(),
        attempts: MAX_PROBES,
    })
}
