mod cli_args;
mod config;
mod confirm;
mod diff;
mod error;
mod git;
mod llm;
mod logging;
mod message;
mod setup;

use clap::Parser;
use colored::Colorize;
use std::io::{self, Write};
use std::process::ExitCode;

use cli_args::Cli;
use config::Config;
use confirm::{AcceptAll, Confirmer, TerminalConfirmer};
use error::PilotError;
use git::{GitCli, Vcs};
use llm::Summarizer;

/// How a run ended without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    NothingStaged,
    DryRun,
    Cancelled,
    Committed,
}

const NOTHING_STAGED_NOTICE: &str =
    "commit-pilot: No staged changes found. Please use 'git add' to stage your files.";
const CANCELLED_NOTICE: &str = "commit-pilot: Commit cancelled.";
const COMMITTED_NOTICE: &str = "\n✅ commit-pilot: Commit successful!";

fn print_suggestion(out: &mut dyn Write, message: &str) -> io::Result<()> {
    writeln!(out, "\n--- commit-pilot: Suggested Commit Message ---")?;
    writeln!(out, "\n{}\n", message.bold())?;
    writeln!(out, "---------------------------------")
}

/// Fetch, summarize, confirm, commit. Each step runs at most once.
fn run_commit(
    vcs: &dyn Vcs,
    summarizer: &dyn Summarizer,
    confirmer: &dyn Confirmer,
    dry_run: bool,
    out: &mut dyn Write,
) -> Result<Outcome, PilotError> {
    let diff = vcs.staged_diff().map_err(PilotError::DiffFailed)?;

    if diff.trim().is_empty() {
        writeln!(out, "{NOTHING_STAGED_NOTICE}")?;
        return Ok(Outcome::NothingStaged);
    }

    let suggested =
        message::generate_commit_message(&diff, summarizer).map_err(PilotError::Summarize)?;

    print_suggestion(out, &suggested)?;

    if dry_run {
        return Ok(Outcome::DryRun);
    }

    let decision = confirmer.confirm(&suggested).map_err(PilotError::Prompt)?;
    log::debug!("User decision: {decision:?}");

    let Some(final_message) = decision.into_message(&suggested) else {
        writeln!(out, "{CANCELLED_NOTICE}")?;
        return Ok(Outcome::Cancelled);
    };

    vcs.commit(&final_message).map_err(PilotError::CommitFailed)?;
    writeln!(out, "{COMMITTED_NOTICE}")?;
    Ok(Outcome::Committed)
}

fn run(cli: &Cli) -> Result<Outcome, PilotError> {
    let cfg = Config::from_sources(cli)?;
    log::info!("Backend {}, model {}", cfg.backend.name(), cfg.model);

    let git = GitCli::locate().map_err(PilotError::GitUnavailable)?;
    let summarizer = setup::build_summarizer(&cfg).map_err(PilotError::Summarize)?;

    let confirmer: Box<dyn Confirmer> = if cli.yes {
        Box::new(AcceptAll)
    } else {
        Box::new(TerminalConfirmer)
    };

    run_commit(
        &git,
        summarizer.as_ref(),
        confirmer.as_ref(),
        cli.dry_run,
        &mut io::stdout(),
    )
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    match run(&cli) {
        Ok(outcome) => {
            log::debug!("Finished: {outcome:?}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::debug!("{err:?}");
            match err {
                PilotError::CommitFailed(_) => println!("\n❌ commit-pilot: {err}"),
                _ => println!("commit-pilot: {err}"),
            }
            ExitCode::FAILURE
        }
    }
}
