//! Provider selection and environment-backed configuration.
//!
//! Configuration is resolved exactly once at startup and passed down as an
//! immutable value; no component reads the environment after that point.

use std::env;
use std::fmt;

use crate::error::ConfigError;

/// Supported text-generation providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAi,
    OpenRouter,
    Gemini,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OpenAI",
            ProviderKind::OpenRouter => "OpenRouter",
            ProviderKind::Gemini => "Gemini",
        }
    }

    /// Environment variable holding the provider credential.
    pub fn credential_var(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OPENAI_API_KEY",
            ProviderKind::OpenRouter => "OPENROUTER_API_KEY",
            ProviderKind::Gemini => "GEMINI_API_KEY",
        }
    }

    fn model_var(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OPENAI_MODEL",
            ProviderKind::OpenRouter => "OPENROUTER_MODEL",
            ProviderKind::Gemini => "GEMINI_MODEL",
        }
    }

    fn base_url_var(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OPENAI_BASE_URL",
            ProviderKind::OpenRouter => "OPENROUTER_BASE_URL",
            ProviderKind::Gemini => "GEMINI_BASE_URL",
        }
    }

    fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "gpt-4o-mini",
            ProviderKind::OpenRouter => "openai/gpt-4o-mini",
            ProviderKind::Gemini => "gemini-2.5-flash",
        }
    }

    fn default_base_url(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "https://api.openai.com/v1",
            ProviderKind::OpenRouter => "https://openrouter.ai/api/v1",
            ProviderKind::Gemini => "https://generativelanguage.googleapis.com/v1beta",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable provider configuration for one invocation.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub model: String,
    pub api_key: String,
    /// Endpoint base, without a trailing slash.
    pub base_url: String,
}

impl ProviderConfig {
    /// Resolve configuration for the selected provider from the environment.
    ///
    /// The credential is required; an unset or empty variable refuses
    /// startup. Model and base URL fall back to documented defaults.
    pub fn from_env(kind: ProviderKind) -> Result<Self, ConfigError> {
        let api_key =
            non_empty_var(kind.credential_var()).ok_or(ConfigError::MissingCredential {
                provider: kind.as_str(),
                var: kind.credential_var(),
            })?;

        let model =
            non_empty_var(kind.model_var()).unwrap_or_else(|| kind.default_model().to_string());

        let base_url = non_empty_var(kind.base_url_var())
            .unwrap_or_else(|| kind.default_base_url().to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            kind,
            model,
            api_key,
            base_url,
        })
    }
}

/// Read an environment variable, treating empty or whitespace-only values as
/// absent.
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
