//! Test utilities: throwaway git repositories in temp directories.
//!
//! Each test gets a fresh repo with a deterministic identity and isolated
//! git environment, cleaned up when the `TestRepo` drops. Remote-tracking
//! refs are created with `update-ref` so no network is involved.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

pub struct TestRepo {
    // Held for cleanup on drop
    _dir: TempDir,
    path: PathBuf,
}

impl TestRepo {
    /// Create a repository on branch `feature-x` with one committed file
    /// at `src/x.rs`.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        // Canonicalize so paths compare equal to git's resolved output
        // (macOS: /var vs /private/var)
        let path = dir.path().canonicalize().expect("canonicalize temp dir");

        git(&path, &["init", "--initial-branch", "feature-x"]);
        fs::create_dir_all(path.join("src")).unwrap();
        fs::write(path.join("src").join("x.rs"), "fn main() {}\n").unwrap();
        git(&path, &["add", "."]);
        git(&path, &["commit", "-m", "initial"]);

        Self { _dir: dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_path(&self) -> PathBuf {
        self.path.join("src").join("x.rs")
    }

    pub fn add_remote(&self, name: &str, url: &str) {
        git(&self.path, &["remote", "add", name, url]);
    }

    /// Pretend `branch` has been pushed to `remote` by creating the
    /// remote-tracking ref locally.
    pub fn track_remote_branch(&self, remote: &str, branch: &str) {
        git(
            &self.path,
            &[
                "update-ref",
                &format!("refs/remotes/{remote}/{branch}"),
                "HEAD",
            ],
        );
    }

    /// Create and check out a local branch.
    pub fn switch_new_branch(&self, branch: &str) {
        git(&self.path, &["switch", "-c", branch]);
    }

    pub fn git(&self, args: &[&str]) -> String {
        git(&self.path, args)
    }
}

fn git(path: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(path)
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("GIT_CONFIG_GLOBAL", "/dev/null")
        .env("GIT_AUTHOR_NAME", "test")
        .env("GIT_AUTHOR_EMAIL", "test@example.com")
        .env("GIT_COMMITTER_NAME", "test")
        .env("GIT_COMMITTER_EMAIL", "test@example.com")
        .output()
        .expect("spawn git");

    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("utf-8 git output")
}
