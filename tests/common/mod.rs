//! Shared helpers for driving commit-pilot inside throwaway repositories.
#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::cargo;

/// A scratch git repository with a local identity configured.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
}

impl TestRepo {
    /// Create a new empty git repository in a temp directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Self { dir };
        repo.git(&["init", "--quiet"]);
        repo.git(&["config", "user.name", "Test User"]);
        repo.git(&["config", "user.email", "test@example.com"]);
        repo.git(&["config", "commit.gpgsign", "false"]);
        repo
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Run git in the repository and return stdout; panics on failure.
    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.path())
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn write(&self, name: &str, contents: &str) {
        fs::write(self.path().join(name), contents).expect("Failed to write file");
    }

    /// Write, stage, and commit a file.
    pub fn commit_file(&self, name: &str, contents: &str, message: &str) {
        self.write(name, contents);
        self.git(&["add", name]);
        self.git(&["commit", "--quiet", "-m", message]);
    }

    pub fn commit_count(&self) -> usize {
        let out = Command::new("git")
            .args(["rev-list", "--count", "HEAD"])
            .current_dir(self.path())
            .output()
            .expect("Failed to run git");
        if !out.status.success() {
            return 0;
        }
        String::from_utf8_lossy(&out.stdout).trim().parse().unwrap_or(0)
    }

    pub fn last_subject(&self) -> String {
        self.git(&["log", "-1", "--pretty=%s"]).trim().to_string()
    }

    /// The binary, run inside this repository with an isolated HOME.
    pub fn pilot(&self) -> assert_cmd::Command {
        pilot_in(self.path())
    }
}

/// The binary, run in `dir` with config and model env vars cleared.
pub fn pilot_in(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("GIT_CEILING_DIRECTORIES", dir.parent().unwrap_or(dir))
        .env_remove("COMMIT_PILOT_BACKEND")
        .env_remove("COMMIT_PILOT_MODEL")
        .env_remove("COMMIT_PILOT_BASE_URL")
        .env_remove("OLLAMA_HOST")
        .env_remove("OPENAI_API_KEY");
    cmd
}
