//! Message presentation and interactive confirmation.

use async_trait::async_trait;
use dialoguer::Input;

use crate::error::ConfirmError;
use crate::message::CommitMessage;

/// Decide from one input line whether the operator approved.
///
/// The trimmed, case-folded line must equal "y"; anything else, including an
/// empty line, declines. There is no re-prompt.
pub fn is_affirmative(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("y")
}

/// Presents a generated message and asks for a yes/no decision.
#[async_trait]
pub trait ConfirmationPrompt: Send + Sync {
    async fn confirm(&self, message: &CommitMessage) -> Result<bool, ConfirmError>;
}

/// Terminal-backed prompt reading a single line from the operator.
///
/// The terminal handle is scoped to the one read and released on every exit
/// path, including input errors.
pub struct TerminalPrompt;

#[async_trait]
impl ConfirmationPrompt for TerminalPrompt {
    async fn confirm(&self, message: &CommitMessage) -> Result<bool, ConfirmError> {
        println!();
        println!("──────── proposed commit message ────────");
        println!("{message}");
        println!("─────────────────────────────────────────");
        println!();

        let line: String = Input::new()
            .with_prompt("Apply this commit message? [y/N]")
            .allow_empty(true)
            .interact_text()?;

        Ok(is_affirmative(&line))
    }
}
