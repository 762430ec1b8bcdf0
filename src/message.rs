//! Normalized commit messages.
//!
//! Providers occasionally wrap their reply in a fenced code block or quote
//! it; normalization strips those artifacts once so the presenter and the
//! commit both see the plain message.

use std::fmt;

/// A provider-generated commit message, normalized for display and commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    text: String,
}

impl CommitMessage {
    /// Normalize raw provider output into a usable message.
    ///
    /// Strips one wrapping fenced code block (with or without a language
    /// tag), one surrounding quote pair, and outer whitespace. Interior
    /// lines are left untouched.
    pub fn from_provider(raw: &str) -> Self {
        Self {
            text: normalize(raw),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// First line of the message.
    pub fn summary(&self) -> &str {
        self.text.lines().next().unwrap_or("")
    }
}

impl fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn normalize(raw: &str) -> String {
    let mut text = raw.trim();
    if let Some(inner) = strip_fence(text) {
        text = inner.trim();
    }
    strip_quotes(text).trim().to_string()
}

/// Remove a wrapping ``` fence, tolerating a language tag such as
/// ```` ```text ```` on the opening line.
fn strip_fence(text: &str) -> Option<&str> {
    let inner = text.strip_prefix("```")?.strip_suffix("```")?;
    match inner.split_once('\n') {
        Some((tag, body)) if is_fence_tag(tag) => Some(body),
        _ => Some(inner),
    }
}

fn is_fence_tag(tag: &str) -> bool {
    let tag = tag.trim();
    !tag.is_empty() && tag.len() <= 16 && tag.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Drop one pair of matching surrounding quotes.
fn strip_quotes(text: &str) -> &str {
    for quote in ['"', '\'', '`'] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            return &text[1..text.len() - 1];
        }
    }
    text
}
