//! Git subprocess invocations with captured output.
//!
//! All operations shell out to the system `git` binary, inheriting the
//! user's existing git config and hooks. Failures carry the observed exit
//! code and the trimmed stderr text.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;

use crate::error::GitError;

/// Handle to a git working tree rooted at a fixed directory.
#[derive(Debug, Clone)]
pub struct GitCli {
    root: PathBuf,
}

impl GitCli {
    /// Wrap an already-known working tree root.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Locate the working tree enclosing `dir` via `git rev-parse`.
    pub async fn discover(dir: &Path) -> Result<Self, GitError> {
        let output = Command::new("git")
            .args(["rev-parse", "--show-toplevel"])
            .current_dir(dir)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| GitError::SpawnFailed {
                operation: "locate repository",
                source,
            })?;

        if !output.status.success() {
            return Err(GitError::NotARepository {
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let root = PathBuf::from(String::from_utf8_lossy(&output.stdout).trim());
        Ok(Self::new(root))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Unified diff of tracked files, staged and unstaged, against HEAD.
    ///
    /// A repository without any commit has no HEAD to diff against; fall
    /// back to the plain index diff so a fresh repository still works.
    pub async fn tracked_diff(&self) -> Result<String, GitError> {
        if self.has_head().await {
            self.run(&["diff", "HEAD"], "diff").await
        } else {
            self.run(&["diff"], "diff").await
        }
    }

    /// Paths not yet tracked, honoring ignore rules, in git's listing order.
    pub async fn untracked_files(&self) -> Result<Vec<String>, GitError> {
        let listing = self
            .run(
                &["ls-files", "--others", "--exclude-standard"],
                "list untracked files",
            )
            .await?;
        Ok(listing
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Stage every working-tree change, like `git add -A`.
    pub async fn stage_all(&self) -> Result<(), GitError> {
        self.run(&["add", "-A"], "stage changes").await.map(|_| ())
    }

    /// Create a commit carrying `message` verbatim.
    ///
    /// The message goes through a single `-m` argument, so embedded newlines
    /// reach the stored commit message unchanged.
    pub async fn commit(&self, message: &str) -> Result<(), GitError> {
        self.run(&["commit", "-m", message], "create commit")
            .await
            .map(|_| ())
    }

    async fn has_head(&self) -> bool {
        self.run(&["rev-parse", "--verify", "--quiet", "HEAD"], "verify HEAD")
            .await
            .is_ok()
    }

    /// Run git with `args` in the working tree, returning stdout on success.
    async fn run(&self, args: &[&str], operation: &'static str) -> Result<String, GitError> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.root)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| GitError::SpawnFailed { operation, source })?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                operation,
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}
