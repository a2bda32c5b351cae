use anyhow::{Result, anyhow};

use crate::diff;
use crate::llm::{GENERATION, Summarizer, prompt_builder};

/// Used when the staged diff has no added or removed lines.
pub const METADATA_ONLY_MESSAGE: &str = "chore: Update file metadata or permissions";

/// Prefixes accepted as already conventional.
const CONVENTIONAL_PREFIXES: [&str; 8] = [
    "feat:", "fix:", "chore:", "docs:", "style:", "refactor:", "perf:", "test:",
];

/// Trim, ensure a conventional prefix (default `feat: `), lower-case.
pub fn format_message(raw: &str) -> String {
    let trimmed = raw.trim();
    let lowered = trimmed.to_lowercase();

    if CONVENTIONAL_PREFIXES.iter().any(|p| lowered.starts_with(p)) {
        lowered
    } else {
        format!("feat: {lowered}")
    }
}

/// Turn a raw staged diff into the suggested commit message.
///
/// The summarizer is not called when the diff carries no content lines.
pub fn generate_commit_message(raw_diff: &str, summarizer: &dyn Summarizer) -> Result<String> {
    let Some(prepared) = diff::prepare_diff(raw_diff) else {
        log::info!("No content lines in staged diff; using metadata message");
        return Ok(METADATA_ONLY_MESSAGE.to_string());
    };

    println!("commit-pilot: Generating commit message from the following changes.");

    let prompt = prompt_builder::summary_prompt(&prepared);
    log::debug!("Summarizer prompt:\n{prompt}");

    let summary = summarizer.summarize(&prompt)?;
    log::debug!("Summarizer output: {summary:?}");

    if summary.trim().is_empty() {
        return Err(anyhow!("the model returned an empty summary"));
    }
    if summary.split_whitespace().count() < GENERATION.min_tokens as usize {
        log::warn!(
            "Model summary is shorter than {} words: {summary:?}",
            GENERATION.min_tokens
        );
    }

    Ok(format_message(&summary))
}
