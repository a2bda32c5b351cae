use anyhow::Result;
use log::debug;

use crate::config::{Backend, Config};
use crate::llm::Summarizer;
use crate::llm::noop::NoopSummarizer;
use crate::llm::ollama::OllamaSummarizer;
use crate::llm::openai::OpenAiSummarizer;
use crate::llm::spinner::WithSpinner;

/// Build the summarizer based on CLI + config.
pub fn build_summarizer(cfg: &Config) -> Result<Box<dyn Summarizer>> {
    let inner: Box<dyn Summarizer> = match &cfg.backend {
        Backend::Noop => {
            debug!("Using NoopSummarizer (no model calls)");
            return Ok(Box::new(NoopSummarizer));
        }
        Backend::Ollama => {
            debug!("Using OllamaSummarizer with model {} at {}", cfg.model, cfg.base_url);
            Box::new(OllamaSummarizer::new(&cfg.base_url, &cfg.model)?)
        }
        Backend::OpenAi { api_key } => {
            debug!("Using OpenAiSummarizer with model {} at {}", cfg.model, cfg.base_url);
            Box::new(OpenAiSummarizer::new(
                api_key.clone(),
                cfg.model.clone(),
                cfg.base_url.clone(),
            )?)
        }
    };

    Ok(Box::new(WithSpinner::new(inner)))
}
