//! Proposals command - one issue per spreadsheet idea on a single repository

use crate::cli::progress::{print_summary, CliProgress, SpinnerPacer};
use crate::cli::style::{check, Stylize};
use crate::cli::{confirm_creation, GlobalOptions};
use anstream::println;
use issue_seeder::config::RowRange;
use issue_seeder::error::Result;
use issue_seeder::platform::create_issue_tracker;
use issue_seeder::reconcile::{resolve_board, run_batch};
use issue_seeder::source::{combine, find_duplicate_names, proposal_candidate, read_workbook};
use issue_seeder::types::{BoardRef, TargetRepository, WorkItem};
use std::path::PathBuf;

/// Arguments for the proposals command
#[derive(Debug, Clone)]
pub struct ProposalArgs {
    /// Spreadsheet to read
    pub spreadsheet: PathBuf,
    /// Repository receiving the issues
    pub target: TargetRepository,
    /// Project number within the target owner's organization
    pub project: Option<u64>,
    /// Rows to process
    pub rows: RowRange,
}

/// Run the proposals command
pub async fn run_proposals(options: &GlobalOptions, args: &ProposalArgs) -> Result<()> {
    println!("{}", "dApp proposal issues".emphasis());
    if options.run.dry_run {
        println!("{}", "Dry run - no issues will be created".muted());
    }

    println!("Reading {}...", args.spreadsheet.display());
    let sheets = read_workbook(&args.spreadsheet)?;
    println!("Found {} sheet(s):", sheets.len().accent());
    for sheet in &sheets {
        println!("  {}: {} ideas", sheet.name, sheet.records.len());
    }
    let records = combine(&sheets);
    println!(
        "{} Total ideas across all sheets: {}",
        check(),
        records.len().accent()
    );
    println!();

    let duplicates = find_duplicate_names(&records);
    if duplicates.is_empty() {
        println!("{} No duplicate dApp names found.", check());
    } else {
        println!(
            "{}: found {} duplicate dApp name(s):",
            "warning".warn().for_stdout(),
            duplicates.len()
        );
        for duplicate in &duplicates {
            let rows: Vec<String> = duplicate.rows.iter().map(ToString::to_string).collect();
            println!(
                "  {:?} appears in rows: {}",
                duplicate.name,
                rows.join(", ")
            );
        }
        println!("  Consider reviewing the spreadsheet for data quality.");
    }
    println!();

    let selected = args.rows.select(&records);
    if !args.rows.is_full() {
        println!(
            "Processing rows {}..{} of {} ({} idea(s))",
            args.rows.start,
            args.rows.start + selected.len(),
            records.len(),
            selected.len()
        );
    }

    let tracker = create_issue_tracker(&options.api_url).await?;

    let progress = CliProgress {
        show_titles: true,
        verbose: options.verbose,
    };
    let board_ref = args.project.map(|number| BoardRef {
        org: args.target.owner.clone(),
        number,
    });
    let board = resolve_board(tracker.as_ref(), board_ref.as_ref(), &progress).await;
    if let Some(board) = &board {
        println!(
            "{} Will add issues to project #{} ({})",
            check(),
            board.number,
            board.title.accent()
        );
    }

    if selected.is_empty() {
        println!("No ideas to process.");
        return Ok(());
    }

    let destination = args.target.to_string();
    if !confirm_creation(options, selected.len(), &destination)? {
        println!("Aborted.");
        return Ok(());
    }
    println!();

    let items: Vec<WorkItem> = selected
        .iter()
        .map(|record| WorkItem {
            candidate: proposal_candidate(record),
            target: args.target.clone(),
        })
        .collect();

    let report = run_batch(
        &items,
        tracker.as_ref(),
        &options.run,
        board.as_ref(),
        &SpinnerPacer,
        &progress,
    )
    .await;

    print_summary(&report, options.run.dry_run, true);
    Ok(())
}
