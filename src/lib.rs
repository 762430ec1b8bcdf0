//! scriv - AI-assisted commit messages for git working trees.
//!
//! # Overview
//!
//! scriv collects the pending changes of a repository (tracked diff plus the
//! content of untracked files), asks a text-generation provider for a commit
//! message matching a fixed style directive, shows the result for
//! confirmation, and stages and commits on approval.

pub mod changes;
pub mod config;
pub mod confirm;
pub mod error;
pub mod git;
pub mod llm;
pub mod message;
pub mod pipeline;

// Re-export commonly used types
pub use changes::{ChangeSet, UntrackedFile};
pub use config::{ProviderConfig, ProviderKind};
pub use confirm::{ConfirmationPrompt, TerminalPrompt, is_affirmative};
pub use error::{ConfigError, ConfirmError, GitError, ProviderError};
pub use git::GitCli;
pub use llm::{ChatCompletionsClient, GeminiClient, GenerationBackend, GenerationRequest};
pub use message::CommitMessage;
pub use pipeline::{Outcome, RunOptions};
