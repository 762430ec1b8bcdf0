//! The collect-generate-confirm-commit pipeline.
//!
//! Stages run strictly in sequence. Every stage failure after startup is
//! converted into a reported outcome; only missing credentials abort the
//! process before the pipeline starts.

use tracing::debug;

use crate::changes;
use crate::confirm::ConfirmationPrompt;
use crate::git::GitCli;
use crate::llm::backend::GenerationBackend;
use crate::llm::prompt::{MessageConvention, build_request};
use crate::message::CommitMessage;

/// Per-invocation pipeline options.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Optional operator hint biasing the generated message.
    pub hint: Option<String>,
    /// Reduced mode: tracked diff only, skip untracked file contents.
    pub diff_only: bool,
    /// Commit message convention for the style directive.
    pub convention: MessageConvention,
    /// Print the generated message and stop before confirmation.
    pub dry_run: bool,
}

/// Terminal state of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Changes staged and committed with the generated message.
    Committed,
    /// Working tree had nothing to commit; no provider was called.
    NoChanges,
    /// Dry run: message generated and printed, repository untouched.
    Printed,
    /// Operator declined the generated message; repository untouched.
    Declined,
    /// A stage failed; details were already reported.
    Failed,
}

/// Run the full pipeline against one working tree.
pub async fn run(
    git: &GitCli,
    backend: &dyn GenerationBackend,
    prompt: &dyn ConfirmationPrompt,
    options: &RunOptions,
) -> Outcome {
    // ── Stage 1: Collect changes ──
    let change_set = match changes::collect(git, !options.diff_only).await {
        Ok(set) => set,
        Err(err) => {
            eprintln!("Could not collect working tree changes: {err}");
            return Outcome::Failed;
        }
    };

    let blob = change_set.render();
    if blob.trim().is_empty() {
        println!("No changes to commit.");
        return Outcome::NoChanges;
    }

    // ── Stage 2: Build the request ──
    let request = build_request(blob, options.hint.clone(), options.convention);
    debug!(
        "Request: {} chars of changes, hint: {}",
        request.change_blob.len(),
        request.hint.is_some()
    );

    // ── Stage 3: Generate ──
    println!("Generating commit message with {}...", backend.name());
    let raw = match backend.generate(&request).await {
        Ok(raw) => raw,
        Err(err) => {
            eprintln!("{} request failed: {err}", backend.name());
            return Outcome::Failed;
        }
    };

    let message = CommitMessage::from_provider(&raw);
    if message.is_empty() {
        eprintln!("{} returned an empty message.", backend.name());
        return Outcome::Failed;
    }

    if options.dry_run {
        println!();
        println!("{message}");
        return Outcome::Printed;
    }

    // ── Stage 4: Confirm ──
    let confirmed = match prompt.confirm(&message).await {
        Ok(choice) => choice,
        Err(err) => {
            eprintln!("Could not read confirmation: {err}");
            return Outcome::Failed;
        }
    };

    if !confirmed {
        println!("Commit cancelled.");
        return Outcome::Declined;
    }

    // ── Stage 5: Stage and commit ──
    if let Err(err) = git.stage_all().await {
        eprintln!("Staging failed: {err}");
        return Outcome::Failed;
    }
    if let Err(err) = git.commit(message.as_str()).await {
        eprintln!("Commit failed: {err}");
        return Outcome::Failed;
    }

    println!("✓ Committed: {}", message.summary());
    Outcome::Committed
}
