use anyhow::Result;
use dialoguer::{Editor, Select};

const CHOICES: [&str; 3] = ["Yes", "Edit", "No"];

/// What the user chose to do with the suggested message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Accept,
    /// Edited text, possibly empty.
    Edit(String),
    Decline,
}

impl Decision {
    /// The message to commit, or `None` when the run is cancelled.
    pub fn into_message(self, suggested: &str) -> Option<String> {
        match self {
            Decision::Accept => Some(suggested.to_string()),
            Decision::Edit(text) => {
                let text = text.trim_end();
                if text.trim().is_empty() {
                    None
                } else {
                    Some(text.to_string())
                }
            }
            Decision::Decline => None,
        }
    }
}

/// Asks the user whether to use a suggested message.
pub trait Confirmer {
    fn confirm(&self, suggested: &str) -> Result<Decision>;
}

/// Select prompt on the terminal; `Edit` opens $VISUAL/$EDITOR.
pub struct TerminalConfirmer;

impl Confirmer for TerminalConfirmer {
    fn confirm(&self, suggested: &str) -> Result<Decision> {
        let choice = Select::new()
            .with_prompt("Use this commit message?")
            .items(&CHOICES)
            .default(0)
            .interact_opt()?;

        match choice {
            Some(0) => Ok(Decision::Accept),
            Some(1) => {
                // Closing the editor without saving yields None.
                let edited = Editor::new().edit(suggested)?;
                Ok(Decision::Edit(edited.unwrap_or_default()))
            }
            _ => Ok(Decision::Decline),
        }
    }
}

/// Accepts every suggestion without prompting (`--yes`).
pub struct AcceptAll;

impl Confirmer for AcceptAll {
    fn confirm(&self, _suggested: &str) -> Result<Decision> {
        Ok(Decision::Accept)
    }
}
