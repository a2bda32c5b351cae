use crate::llm::prompts;

pub struct PromptPair {
    pub system: String,
    pub user: String,
}

/// The instruction followed by the cleaned, truncated diff.
pub fn summary_prompt(diff: &str) -> String {
    format!("{}{diff}", prompts::SUMMARY_INSTRUCTION)
}

/// Chat backends get a system turn in front of the summary prompt.
pub fn chat_prompt(prompt: &str) -> PromptPair {
    PromptPair {
        system: prompts::SYSTEM_INSTRUCTIONS.to_owned(),
        user: prompt.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_prompt_embeds_diff_after_instruction() {
        assert_eq!(
            summary_prompt("let x = 1;"),
            "summarize the following code changes into a short git commit message: let x = 1;"
        );
    }

    #[test]
    fn chat_prompt_keeps_user_turn_verbatim() {
        let pair = chat_prompt(&summary_prompt("a"));
        assert!(pair.system.contains("conventional prefix"));
        assert!(pair.user.ends_with(": a"));
    }
}
