use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::Summarizer;

/// Shows a spinner on stderr while the wrapped summarizer runs.
pub struct WithSpinner {
    inner: Box<dyn Summarizer>,
}

impl WithSpinner {
    pub fn new(inner: Box<dyn Summarizer>) -> Self {
        Self { inner }
    }
}

impl Summarizer for WithSpinner {
    fn summarize(&self, prompt: &str) -> Result<String> {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("Summarizing staged changes...");
        spinner.enable_steady_tick(Duration::from_millis(100));

        let result = self.inner.summarize(prompt);

        spinner.finish_and_clear();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::noop::NoopSummarizer;

    #[test]
    fn passes_output_through() {
        let wrapped = WithSpinner::new(Box::new(NoopSummarizer));
        assert_eq!(
            wrapped.summarize("one line").unwrap(),
            NoopSummarizer.summarize("one line").unwrap()
        );
    }
}
