//! scriv - CLI entry point.

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use scriv::config::{ProviderConfig, ProviderKind};
use scriv::confirm::TerminalPrompt;
use scriv::git::GitCli;
use scriv::llm::backend::GenerationBackend;
use scriv::llm::chat::ChatCompletionsClient;
use scriv::llm::gemini::GeminiClient;
use scriv::llm::prompt::MessageConvention;
use scriv::pipeline::{self, RunOptions};

/// Generate a commit message for the working tree and commit on approval.
#[derive(Parser, Debug)]
#[command(name = "scriv")]
#[command(about = "Generate commit messages from working tree changes with an AI provider")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    provider: ProviderCommand,
}

#[derive(Subcommand, Debug)]
enum ProviderCommand {
    /// Use the OpenAI chat completions API
    Openai(GenerateArgs),
    /// Use OpenRouter's OpenAI-compatible API
    Openrouter(GenerateArgs),
    /// Use the Google Gemini API
    Gemini(GenerateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Bias the generated message toward this intent
    #[arg(long)]
    hint: Option<String>,

    /// Only include the tracked-file diff, skip untracked file contents
    #[arg(long)]
    diff_only: bool,

    /// Ask for a free-form message instead of Conventional Commits
    #[arg(long)]
    plain: bool,

    /// Print the generated message without confirming or committing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let (kind, args) = match cli.provider {
        ProviderCommand::Openai(args) => (ProviderKind::OpenAi, args),
        ProviderCommand::Openrouter(args) => (ProviderKind::OpenRouter, args),
        ProviderCommand::Gemini(args) => (ProviderKind::Gemini, args),
    };

    // The only fatal startup condition: a missing credential.
    let config = match ProviderConfig::from_env(kind) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let backend: Box<dyn GenerationBackend> = match kind {
        ProviderKind::OpenAi | ProviderKind::OpenRouter => {
            Box::new(ChatCompletionsClient::new(&config))
        }
        ProviderKind::Gemini => Box::new(GeminiClient::new(&config)),
    };

    // Everything past the credential check reports failures but still exits
    // zero; only a missing credential may exit non-zero.
    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("Could not determine the current directory: {err}");
            return ExitCode::SUCCESS;
        }
    };

    let git = match GitCli::discover(&cwd).await {
        Ok(git) => git,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::SUCCESS;
        }
    };

    let options = RunOptions {
        hint: args.hint,
        diff_only: args.diff_only,
        convention: if args.plain {
            MessageConvention::Plain
        } else {
            MessageConvention::Conventional
        },
        dry_run: args.dry_run,
    };

    // Declines, empty trees, and reported stage failures all end the process
    // normally; the outcome text already told the operator what happened.
    pipeline::run(&git, backend.as_ref(), &TerminalPrompt, &options).await;
    ExitCode::SUCCESS
}
