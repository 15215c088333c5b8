//! seed - ensure GitHub issues exist, idempotently
//!
//! CLI binary for broadcasting a templated issue to the repositories an
//! awesome-list links to, and for filing spreadsheet ideas as proposals.

use anstream::eprintln;
use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use crate::cli::style::Stylize;
use issue_seeder::config::{normalize_api_url, RowRange, RunConfig, DEFAULT_API_URL, DEFAULT_DELAY_MS};
use issue_seeder::types::TargetRepository;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "seed")]
#[command(about = "Ensure GitHub issues exist - from an issue template or a spreadsheet of ideas")]
#[command(version)]
struct Cli {
    /// Show what would be done without creating issues
    #[arg(
        long,
        global = true,
        env = "DRY_RUN",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    dry_run: bool,

    /// Pause between consecutive items, in milliseconds
    #[arg(long, global = true, env = "DELAY_BETWEEN_REQUESTS", default_value_t = DEFAULT_DELAY_MS)]
    delay_ms: u64,

    /// GitHub REST API base URL (for GitHub Enterprise)
    #[arg(long, global = true, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Do not ask for confirmation before creating issues
    #[arg(short, long, global = true)]
    yes: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the template issue on every repository linked from a README
    Broadcast {
        /// Issue template with front matter (title, labels) and a markdown body
        #[arg(long, env = "ISSUE_TEMPLATE_PATH", default_value = "issue-template.md")]
        template: PathBuf,

        /// Repository whose README lists the targets (owner/name)
        #[arg(long, env = "SOURCE_REPO", default_value = "midnightntwrk/midnight-awesome-dapps")]
        source: String,
    },

    /// File one proposal issue per spreadsheet row on a single repository
    Proposals {
        /// Spreadsheet of ideas (every sheet is read)
        #[arg(long, env = "EXCEL_FILE_PATH")]
        spreadsheet: PathBuf,

        /// Owner of the target repository
        #[arg(long, env = "REPO_OWNER", default_value = "midnightntwrk")]
        owner: String,

        /// Name of the target repository
        #[arg(long, env = "REPO_NAME")]
        repo: String,

        /// Organization project number to add created issues to
        #[arg(long, env = "PROJECT_NUMBER")]
        project: Option<u64>,

        /// First row to process (0-based index into all rows)
        #[arg(long)]
        start: Option<usize>,

        /// Stop before this row (0-based, exclusive)
        #[arg(long)]
        end: Option<usize>,
    },

    /// Authentication management
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Test authentication
    Test,
    /// Show authentication setup instructions
    Setup,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".error());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let options = cli::GlobalOptions {
        run: RunConfig::new(cli.delay_ms, cli.dry_run),
        api_url: normalize_api_url(&cli.api_url)?,
        assume_yes: cli.yes,
        verbose: cli.verbose > 0,
    };

    match cli.command {
        Commands::Broadcast { template, source } => {
            cli::run_broadcast(&options, &template, &source).await?;
        }
        Commands::Proposals {
            spreadsheet,
            owner,
            repo,
            project,
            start,
            end,
        } => {
            let args = cli::ProposalArgs {
                spreadsheet,
                target: TargetRepository::new(owner, repo),
                project,
                rows: RowRange::new(start, end)?,
            };
            cli::run_proposals(&options, &args).await?;
        }
        Commands::Auth { action } => {
            cli::run_auth(&options.api_url, matches!(action, AuthAction::Test)).await?;
        }
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
