pub mod noop;
pub mod ollama;
pub mod openai;
pub mod prompt_builder;
mod prompts;
pub mod spinner;

use anyhow::Result;

/// Generation settings shared by every backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationParams {
    pub max_new_tokens: u32,
    /// Not every backend can enforce a floor; those that cannot ignore it.
    pub min_tokens: u32,
    /// Greedy decoding when false.
    pub sample: bool,
}

pub const GENERATION: GenerationParams = GenerationParams {
    max_new_tokens: 40,
    min_tokens: 5,
    sample: false,
};

/// Trait for turning a prompt into a short summary (real or dummy).
pub trait Summarizer {
    /// Same prompt and model in, same text out.
    fn summarize(&self, prompt: &str) -> Result<String>;
}
