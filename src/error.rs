//! Error types for commit-pilot using thiserror.

use thiserror::Error;

/// Errors from the git subprocess boundary.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git is not installed or not in PATH")]
    NotInstalled(#[source] which::Error),

    #[error("failed to run git {args}: {source}")]
    Spawn {
        args: String,
        #[source]
        source: std::io::Error,
    },

    #[error("git {args} exited with status {code:?}: {stderr}")]
    NonZeroExit {
        args: String,
        code: Option<i32>,
        stderr: String,
    },
}

/// Errors while resolving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse {path}: {source}")]
    InvalidFile {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown backend '{0}' (expected ollama, openai, or none)")]
    UnknownBackend(String),

    #[error("OPENAI_API_KEY (or --api-key) is required for the openai backend")]
    MissingApiKey,
}

/// Failures that end a run with exit code 1.
#[derive(Error, Debug)]
pub enum PilotError {
    #[error("Error: Git is not installed or not in your PATH.")]
    GitUnavailable(#[source] GitError),

    #[error("Error fetching staged changes. Ensure you have staged files with 'git add .'")]
    DiffFailed(#[source] GitError),

    #[error("Error generating commit message: {0:#}")]
    Summarize(#[source] anyhow::Error),

    #[error("Git commit failed.")]
    CommitFailed(#[source] GitError),

    #[error("Error reading your answer: {0}")]
    Prompt(#[source] anyhow::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Error writing output: {0}")]
    Output(#[from] std::io::Error),
}
