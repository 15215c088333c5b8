//! CLI commands
//!
//! Command implementations for the `seed` binary.

mod auth;
mod broadcast;
mod progress;
mod proposals;
pub mod style;

pub use auth::run_auth;
pub use broadcast::run_broadcast;
pub use proposals::{run_proposals, ProposalArgs};

use issue_seeder::config::RunConfig;
use issue_seeder::error::{Error, Result};
use std::io::IsTerminal;

/// Options shared by every command
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Pacing and dry-run settings
    pub run: RunConfig,
    /// REST API base URL
    pub api_url: String,
    /// Skip the confirmation prompt
    pub assume_yes: bool,
    /// Print each reconciliation step
    pub verbose: bool,
}

/// Ask before a run that would create issues
///
/// Only asks on an interactive terminal; dry runs and `--yes` never ask.
fn confirm_creation(options: &GlobalOptions, count: usize, destination: &str) -> Result<bool> {
    if options.run.dry_run || options.assume_yes || !std::io::stdin().is_terminal() {
        return Ok(true);
    }

    dialoguer::Confirm::new()
        .with_prompt(format!(
            "Ensure {count} issue{} exist{} on {destination}?",
            if count == 1 { "" } else { "s" },
            if count == 1 { "s" } else { "" }
        ))
        .default(false)
        .interact()
        .map_err(|e| Error::Io(std::io::Error::other(e)))
}
