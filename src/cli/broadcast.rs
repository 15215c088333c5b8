//! Broadcast command - one templated issue on every repository an
//! awesome-list links to

use crate::cli::progress::{print_summary, CliProgress, SpinnerPacer};
use crate::cli::style::{check, Stylize};
use crate::cli::{confirm_creation, GlobalOptions};
use anstream::println;
use issue_seeder::config::web_host;
use issue_seeder::discover::RepoExtractor;
use issue_seeder::error::{Error, Result};
use issue_seeder::platform::create_issue_tracker;
use issue_seeder::reconcile::run_batch;
use issue_seeder::source::load_template;
use issue_seeder::types::{TargetRepository, WorkItem};
use std::path::Path;

/// Run the broadcast command
pub async fn run_broadcast(options: &GlobalOptions, template: &Path, source: &str) -> Result<()> {
    let candidate = load_template(template)?;
    let source = TargetRepository::parse(source).ok_or_else(|| {
        Error::Config(format!("source repository must be owner/name, got {source:?}"))
    })?;
    let tracker = create_issue_tracker(&options.api_url).await?;

    println!("{}", "Awesome-list issue broadcast".emphasis());
    if options.run.dry_run {
        println!("{}", "Dry run - no issues will be created".muted());
    }
    println!("Issue title: {}", candidate.title.accent());
    let labels = if candidate.labels.is_empty() {
        "(none)".to_string()
    } else {
        candidate.labels.join(", ")
    };
    println!("Issue labels: {}", labels.muted());
    println!();

    println!("Fetching README from {}...", source.accent());
    let readme = tracker.fetch_readme(&source).await?;
    println!("{} README fetched ({} chars)", check(), readme.chars().count());

    let extractor = RepoExtractor::new(&web_host(&options.api_url)?, source.clone());
    let repos = extractor.extract(&readme);
    if repos.is_empty() {
        println!("No repositories found in README. Nothing to do.");
        return Ok(());
    }

    println!(
        "Found {} unique repositor{}:",
        repos.len().accent(),
        if repos.len() == 1 { "y" } else { "ies" }
    );
    for (idx, repo) in repos.iter().enumerate() {
        println!("  {:>3}. {repo}", idx + 1);
    }
    println!();

    if !confirm_creation(options, repos.len(), "the repositories above")? {
        println!("Aborted.");
        return Ok(());
    }

    let items: Vec<WorkItem> = repos
        .into_iter()
        .map(|target| WorkItem {
            candidate: candidate.clone(),
            target,
        })
        .collect();

    let progress = CliProgress {
        show_titles: false,
        verbose: options.verbose,
    };
    let report = run_batch(
        &items,
        tracker.as_ref(),
        &options.run,
        None,
        &SpinnerPacer,
        &progress,
    )
    .await;

    print_summary(&report, options.run.dry_run, false);
    Ok(())
}
