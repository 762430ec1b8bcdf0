//! Prompt construction for commit message generation.

/// Commit message conventions the style directive can enforce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageConvention {
    /// Conventional Commits subject grammar with typed prefixes.
    #[default]
    Conventional,
    /// Free-form subject with no type prefix.
    Plain,
}

/// Subject types the Conventional Commits directive permits.
const CONVENTIONAL_TYPES: &str = "feat, fix, docs, style, refactor, perf, test, chore, ci, build";

/// A fully assembled provider request. Immutable once built; one per
/// invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Fixed style rules, sent as the instruction/system role.
    pub instruction: String,
    /// Optional operator hint biasing the message content.
    pub hint: Option<String>,
    /// Serialized change set, included untouched.
    pub change_blob: String,
}

impl GenerationRequest {
    /// User-role content: the hint bias first, then the change blob.
    pub fn user_content(&self) -> String {
        match &self.hint {
            Some(hint) => format!(
                "Focus the commit message on the following intent: {hint}\n\nChanges:\n{}",
                self.change_blob
            ),
            None => format!("Changes:\n{}", self.change_blob),
        }
    }

    /// Single-string form for providers without a role split.
    pub fn flattened(&self) -> String {
        format!("{}\n\n{}", self.instruction, self.user_content())
    }
}

/// Build the request for a serialized change set.
///
/// The blob is never truncated here; providers with input limits reject the
/// request themselves and that failure surfaces as a provider error.
pub fn build_request(
    change_blob: String,
    hint: Option<String>,
    convention: MessageConvention,
) -> GenerationRequest {
    GenerationRequest {
        instruction: style_directive(convention),
        hint: hint
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty()),
        change_blob,
    }
}

/// The fixed style rules sent with every request.
fn style_directive(convention: MessageConvention) -> String {
    let mut directive = String::from(
        "You write git commit messages from diffs.\n\
         Rules:\n\
         - Summary line of at most 50 characters, written in present tense.\n\
         - Structure: summary line, then a blank line, then an optional body wrapped at 72 characters.\n\
         - Separate lines with literal line breaks, never the two-character escape sequence \\n.\n\
         - No markdown emphasis, no bullet markers, no code fences.\n\
         - Respond with the commit message only, no commentary.",
    );

    if convention == MessageConvention::Conventional {
        directive.push_str(&format!(
            "\n- Subject grammar: type(scope): description, where type is one of {CONVENTIONAL_TYPES}.\n\
             - Scope is optional. Mark a breaking change with ! after the type or scope, as in feat!: drop legacy flags."
        ));
    }

    directive
}
