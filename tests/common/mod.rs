//! Shared test utilities for integration tests.
//!
//! Not all helpers are used by every test file.
#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// A scratch git repository driven through the real `git` binary.
pub struct TestRepo {
    pub dir: TempDir,
}

impl TestRepo {
    /// Create an initialized repository with a committer identity and one
    /// empty initial commit, so HEAD exists.
    pub fn new() -> Self {
        let repo = Self::without_initial_commit();
        repo.git(&["commit", "--allow-empty", "-m", "init"]);
        repo
    }

    /// Create an initialized repository without any commit.
    pub fn without_initial_commit() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let repo = Self { dir };
        repo.git(&["init"]);
        repo.git(&["config", "user.name", "Test User"]);
        repo.git(&["config", "user.email", "test@example.com"]);
        repo.git(&["config", "commit.gpgsign", "false"]);
        repo
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Run git in the repository, panicking on failure.
    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.dir.path())
            .output()
            .unwrap_or_else(|e| panic!("failed to run git {args:?}: {e}"));
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Write a file relative to the repository root.
    pub fn write_file(&self, rel: &str, content: &str) {
        self.write_binary(rel, content.as_bytes());
    }

    /// Write raw bytes relative to the repository root.
    pub fn write_binary(&self, rel: &str, bytes: &[u8]) {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, bytes).unwrap();
    }

    /// Stage and commit a file, so later edits show up as tracked changes.
    pub fn commit_file(&self, rel: &str, content: &str) {
        self.write_file(rel, content);
        self.git(&["add", rel]);
        self.git(&["commit", "-m", &format!("add {rel}")]);
    }

    /// Last commit message, exactly as stored (with git's trailing newline).
    pub fn last_message(&self) -> String {
        self.git(&["log", "-1", "--format=%B"])
    }

    /// Paths with staged changes.
    pub fn staged_paths(&self) -> Vec<String> {
        self.git(&["diff", "--cached", "--name-only"])
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Number of commits reachable from HEAD.
    pub fn commit_count(&self) -> usize {
        self.git(&["rev-list", "--count", "HEAD"])
            .trim()
            .parse()
            .unwrap()
    }
}
