use std::path::PathBuf;
use std::process::Command as GitCommand;

use crate::error::GitError;

/// The two git operations a run needs.
pub trait Vcs {
    /// Get the full staged diff. Empty when nothing is staged.
    fn staged_diff(&self) -> Result<String, GitError>;

    /// Create a commit with the given message.
    fn commit(&self, message: &str) -> Result<(), GitError>;
}

/// Talks to the git binary found on PATH.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: PathBuf,
}

impl GitCli {
    /// Locate `git` on PATH.
    pub fn locate() -> Result<Self, GitError> {
        let program = which::which("git").map_err(GitError::NotInstalled)?;
        log::debug!("Using git at {}", program.display());
        Ok(Self { program })
    }

    #[cfg(test)]
    fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run a git command and capture stdout as String.
    fn output(&self, args: &[&str]) -> Result<String, GitError> {
        let output = GitCommand::new(&self.program)
            .args(args)
            .output()
            .map_err(|source| GitError::Spawn {
                args: args.join(" "),
                source,
            })?;

        if !output.status.success() {
            return Err(GitError::NonZeroExit {
                args: args.join(" "),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

impl Vcs for GitCli {
    fn staged_diff(&self) -> Result<String, GitError> {
        self.output(&["diff", "--staged"])
    }

    fn commit(&self, message: &str) -> Result<(), GitError> {
        let args = ["commit", "-m", message];
        // Inherit stdio so hook output and git's own summary reach the user.
        let status = GitCommand::new(&self.program)
            .args(args)
            .status()
            .map_err(|source| GitError::Spawn {
                args: "commit -m <message>".to_string(),
                source,
            })?;

        if !status.success() {
            return Err(GitError::NonZeroExit {
                args: "commit -m <message>".to_string(),
                code: status.code(),
                stderr: String::new(),
            });
        }

        Ok(())
    }
}
