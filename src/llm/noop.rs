use anyhow::Result;

use super::Summarizer;

/// No-op / dummy summarizer for development with --no-model or model=none.
pub struct NoopSummarizer;

impl Summarizer for NoopSummarizer {
    fn summarize(&self, prompt: &str) -> Result<String> {
        let lines = prompt.lines().count();
        Ok(format!(
            "Dummy summary of {lines} changed line(s) (model disabled)"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dummy_summary_is_deterministic() {
        let a = NoopSummarizer.summarize("p: a\nb").unwrap();
        let b = NoopSummarizer.summarize("p: a\nb").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, "Dummy summary of 2 changed line(s) (model disabled)");
    }
}
