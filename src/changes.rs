//! Change collection from the working tree.
//!
//! Produces one textual blob describing everything a commit would capture:
//! the unified diff of tracked files plus the content of untracked files.

use std::path::Path;

use futures::future;
use tracing::warn;

use crate::error::GitError;
use crate::git::GitCli;

/// Content recorded for untracked files that cannot be read as text.
pub const UNREADABLE_PLACEHOLDER: &str = "[unreadable content]";

/// An untracked file captured for the change blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UntrackedFile {
    pub path: String,
    /// File text, or [`UNREADABLE_PLACEHOLDER`] when the file could not be
    /// read (binary content, permission error, removed mid-scan).
    pub content: String,
}

/// Pending modifications of a working tree, tracked and untracked.
///
/// Built fresh per invocation and never persisted.
#[derive(Debug, Clone, Default)]
pub struct ChangeSet {
    pub tracked_diff: String,
    pub untracked: Vec<UntrackedFile>,
}

impl ChangeSet {
    /// Serialize to the textual blob sent to the provider.
    ///
    /// Untracked entries keep their enumeration order and render as one
    /// labeled block per file.
    pub fn render(&self) -> String {
        let mut blob = self.tracked_diff.trim_end().to_string();
        for file in &self.untracked {
            if !blob.is_empty() {
                blob.push_str("\n\n");
            }
            blob.push_str("New file: ");
            blob.push_str(&file.path);
            blob.push('\n');
            blob.push_str(&file.content);
        }
        blob
    }

    /// True when rendering produces no actionable content.
    pub fn is_empty(&self) -> bool {
        self.render().trim().is_empty()
    }
}

/// Collect the pending changes of the working tree.
///
/// With `include_untracked` unset, only the tracked diff is gathered (the
/// reduced `--diff-only` mode).
pub async fn collect(git: &GitCli, include_untracked: bool) -> Result<ChangeSet, GitError> {
    let tracked_diff = git.tracked_diff().await?;

    let untracked = if include_untracked {
        let paths = git.untracked_files().await?;
        // Reads overlap each other; join_all keeps the enumeration order.
        let reads = paths
            .into_iter()
            .map(|path| read_untracked(git.root(), path));
        future::join_all(reads).await
    } else {
        Vec::new()
    };

    Ok(ChangeSet {
        tracked_diff,
        untracked,
    })
}

/// Read one untracked file, substituting the placeholder when it cannot be
/// read as text.
async fn read_untracked(root: &Path, path: String) -> UntrackedFile {
    let content = match tokio::fs::read_to_string(root.join(&path)).await {
        Ok(text) => text,
        Err(err) => {
            warn!("Could not read untracked file {path}: {err}");
            UNREADABLE_PLACEHOLDER.to_string()
        }
    };
    UntrackedFile { path, content }
}
