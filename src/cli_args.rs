use clap::{ArgAction, ArgGroup, Parser};

/// CLI options
#[derive(Parser, Debug, Default)]
#[command(
    name = "commit-pilot",
    version,
    about = "Summarize staged changes into a conventional commit message with a local model"
)]
#[command(group(
    ArgGroup::new("model_group")
        .args(["model", "no_model"])
        .multiple(false)
))]
#[command(group(
    ArgGroup::new("answer_group")
        .args(["yes", "dry_run"])
        .multiple(false)
))]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Summarizer backend: ollama, openai, or none
    #[arg(long)]
    pub backend: Option<String>,

    /// Model name to use (e.g. llama3.2:1b). If 'none', acts like --no-model.
    #[arg(long)]
    pub model: Option<String>,

    /// Disable model calls; use a deterministic dummy summary instead
    #[arg(long)]
    pub no_model: bool,

    /// Base URL of the summarizer backend
    #[arg(long)]
    pub base_url: Option<String>,

    /// API key for the openai backend (otherwise uses OPENAI_API_KEY env var)
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Commit with the suggested message without asking
    #[arg(short, long)]
    pub yes: bool,

    /// Print the suggested message and exit without committing
    #[arg(long)]
    pub dry_run: bool,
}
