//! Error types for scriv modules using thiserror.

use thiserror::Error;

/// Errors from provider configuration at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "{provider} credential missing: set the {var} environment variable (a .env file next to the repository works too)"
    )]
    MissingCredential {
        provider: &'static str,
        var: &'static str,
    },
}

/// Errors from git subprocess invocations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to run git ({operation}): {source}")]
    SpawnFailed {
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("git {operation} failed with code {code}: {stderr}")]
    CommandFailed {
        operation: &'static str,
        code: i32,
        stderr: String,
    },

    #[error("Not inside a git repository: {stderr}")]
    NotARepository { stderr: String },
}

/// Errors from text-generation providers.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Failed to call {provider}: {source}")]
    RequestFailed {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} responded with {status}: {body}")]
    Api {
        provider: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to decode {provider} response: {detail}")]
    MalformedResponse {
        provider: &'static str,
        detail: String,
    },
}

/// Errors from the interactive confirmation prompt.
#[derive(Error, Debug)]
pub enum ConfirmError {
    #[error("Failed to read confirmation input: {0}")]
    Input(#[from] dialoguer::Error),
}
