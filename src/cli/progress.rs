//! CLI progress callback, spinner pacer and run summary

use crate::cli::style::{arrow, check, cross, dash, hyperlink_url, spinner_style, Stream, Stylize};
use anstream::{eprintln, println};
use async_trait::async_trait;
use indicatif::ProgressBar;
use issue_seeder::error::Error;
use issue_seeder::reconcile::{BatchReport, Pacer, ProgressCallback, Step};
use issue_seeder::report::select;
use issue_seeder::types::{Board, ItemOutcome, Outcome, SkipReason, WorkItem};
use std::time::Duration;

/// CLI progress callback that prints to stdout with styled output
///
/// Two modes:
/// - per-repository (broadcast): one candidate, many targets; lines show the target
/// - per-row (proposals): many candidates, one target; lines show the title
pub struct CliProgress {
    /// Show candidate titles rather than target repositories
    pub show_titles: bool,
    /// Print each reconciliation step
    pub verbose: bool,
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_item_start(&self, position: usize, total: usize, item: &WorkItem) {
        let counter = format!("[{position}/{total}]");
        if self.show_titles {
            let title = if item.candidate.has_title() {
                item.candidate.title.as_str()
            } else {
                "(untitled row)"
            };
            println!("{} {}", counter.muted(), title.accent());
        } else {
            println!("{} {}", counter.muted(), item.target.accent());
        }
    }

    async fn on_step(&self, step: Step) {
        if self.verbose {
            println!("  {}...", step.to_string().muted());
        }
    }

    async fn on_outcome(&self, outcome: &ItemOutcome) {
        match &outcome.outcome {
            Outcome::Created { url } => {
                println!(
                    "  {} Created issue {}",
                    check(),
                    hyperlink_url(Stream::Stdout, url)
                );
            }
            Outcome::WouldCreate => {
                println!(
                    "  {} {} Would create issue on {}",
                    arrow(),
                    "[dry run]".muted(),
                    outcome.target.accent()
                );
            }
            Outcome::Duplicate { url } => {
                println!(
                    "  {} Issue already exists: {}",
                    dash(),
                    hyperlink_url(Stream::Stdout, url)
                );
            }
            Outcome::Skipped { reason } => {
                println!("  {} Skipped: {}", dash(), reason.to_string().warn().for_stdout());
            }
            Outcome::Failed { reason } => {
                eprintln!("  {} Failed: {}", cross(), reason.error());
            }
        }
    }

    async fn on_board_linked(&self, board: &Board) {
        println!("  {} Added to project board #{}", check(), board.number);
    }

    async fn on_error(&self, err: &Error) {
        eprintln!("  {}: {}", "warning".warn(), err);
    }
}

/// Pacer that shows a spinner while waiting between requests
pub struct SpinnerPacer;

#[async_trait]
impl Pacer for SpinnerPacer {
    async fn pause(&self, delay: Duration) {
        if delay.is_zero() {
            return;
        }
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style());
        spinner.set_message(format!(
            "Waiting {:.1}s before next request...",
            delay.as_secs_f64()
        ));
        spinner.enable_steady_tick(Duration::from_millis(80));
        tokio::time::sleep(delay).await;
        spinner.finish_and_clear();
    }
}

/// Print the end-of-run tally and per-category listings
pub fn print_summary(report: &BatchReport, dry_run: bool, show_titles: bool) {
    let summary = report.summary();
    let outcomes = &report.outcomes;

    println!();
    println!("{}", "Summary".emphasis());
    if dry_run {
        println!("  {} Would create: {}", arrow(), summary.would_create.accent());
    } else {
        println!("  {} Created: {}", check(), summary.created.success());
    }
    println!("  {} Duplicates: {}", dash(), summary.duplicates.accent());
    println!("  {} Skipped: {}", dash(), summary.skipped.accent());
    println!("  {} Failed: {}", cross().for_stdout(), summary.failed.accent());

    print_section(
        "Created",
        show_titles,
        select(outcomes, |o| matches!(o, Outcome::Created { .. })),
    );
    print_section(
        "Would create",
        show_titles,
        select(outcomes, |o| matches!(o, Outcome::WouldCreate)),
    );
    print_section(
        "Duplicates",
        show_titles,
        select(outcomes, |o| matches!(o, Outcome::Duplicate { .. })),
    );
    print_section(
        "Skipped",
        show_titles,
        select(outcomes, |o| matches!(o, Outcome::Skipped { .. })),
    );
    print_section(
        "Failed",
        show_titles,
        select(outcomes, |o| matches!(o, Outcome::Failed { .. })),
    );
}

fn print_section<'a>(
    heading: &str,
    show_titles: bool,
    items: impl Iterator<Item = &'a ItemOutcome>,
) {
    let mut items = items.peekable();
    if items.peek().is_none() {
        return;
    }

    println!();
    println!("{}:", heading.emphasis());
    for item in items {
        let subject = describe(item, show_titles);
        match &item.outcome {
            Outcome::Created { url } | Outcome::Duplicate { url } => {
                println!("  {subject} {} {}", "→".muted(), hyperlink_url(Stream::Stdout, url));
            }
            Outcome::WouldCreate => println!("  {subject}"),
            Outcome::Skipped { reason } => println!("  {subject}: {}", reason.muted()),
            Outcome::Failed { reason } => println!("  {subject}: {}", reason.muted()),
        }
    }
}

/// Title for rows, repository for broadcast targets
fn describe(item: &ItemOutcome, show_titles: bool) -> String {
    match item.outcome {
        Outcome::Skipped {
            reason: SkipReason::MissingTitle,
        } => "Row with no dApp name/use case".to_string(),
        _ if show_titles => item.title.clone(),
        _ => item.target.to_string(),
    }
}
