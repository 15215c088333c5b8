//! Sequential batch driver
//!
//! Work items are reconciled strictly in order, one outstanding request at a
//! time, with a fixed pause between consecutive items.

use crate::config::RunConfig;
use crate::error::Error;
use crate::platform::IssueTracker;
use crate::reconcile::engine::{reconcile, ReconcileOptions};
use crate::reconcile::ProgressCallback;
use crate::report::Summary;
use crate::types::{Board, BoardRef, ItemOutcome, WorkItem};
use async_trait::async_trait;
use std::time::Duration;

/// Pause between consecutive work items
#[async_trait]
pub trait Pacer: Send + Sync {
    /// Suspend for `delay`
    async fn pause(&self, delay: Duration);
}

/// Pacer that sleeps on the tokio timer
pub struct SleepPacer;

#[async_trait]
impl Pacer for SleepPacer {
    async fn pause(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}

/// Ordered outcomes of a batch run
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// One entry per work item, in processing order
    pub outcomes: Vec<ItemOutcome>,
}

impl BatchReport {
    /// Tally outcomes by category
    pub fn summary(&self) -> Summary {
        Summary::from_outcomes(&self.outcomes)
    }
}

/// Reconcile every work item in order
///
/// The pacer is invoked between items, never after the last one.
pub async fn run_batch(
    items: &[WorkItem],
    tracker: &dyn IssueTracker,
    config: &RunConfig,
    board: Option<&Board>,
    pacer: &dyn Pacer,
    progress: &dyn ProgressCallback,
) -> BatchReport {
    let options = ReconcileOptions {
        dry_run: config.dry_run,
        board,
    };
    let total = items.len();
    let mut report = BatchReport::default();

    for (idx, item) in items.iter().enumerate() {
        progress.on_item_start(idx + 1, total, item).await;

        let outcome = reconcile(&item.candidate, &item.target, tracker, options, progress).await;
        tracing::info!(repo = %item.target, outcome = outcome.label(), "item reconciled");

        let item_outcome = ItemOutcome {
            target: item.target.clone(),
            title: item.candidate.title.clone(),
            outcome,
        };
        progress.on_outcome(&item_outcome).await;
        report.outcomes.push(item_outcome);

        if idx + 1 < total {
            pacer.pause(config.delay).await;
        }
    }

    report
}

/// Resolve the board for a run, if one was requested
///
/// Lookup failures are reported and the run continues without a board.
pub async fn resolve_board(
    tracker: &dyn IssueTracker,
    board: Option<&BoardRef>,
    progress: &dyn ProgressCallback,
) -> Option<Board> {
    let board_ref = board?;

    match tracker.find_board(&board_ref.org, board_ref.number).await {
        Ok(Some(found)) => Some(found),
        Ok(None) => {
            progress
                .on_error(&Error::Platform(format!(
                    "Could not find project #{} in {}; issues will not be added to a board",
                    board_ref.number, board_ref.org
                )))
                .await;
            None
        }
        Err(e) => {
            tracing::warn!(org = %board_ref.org, number = board_ref.number, error = %e, "board lookup failed");
            progress
                .on_error(&Error::Platform(format!(
                    "Could not look up project #{} in {}: {}",
                    board_ref.number,
                    board_ref.org,
                    e.reason()
                )))
                .await;
            None
        }
    }
}
