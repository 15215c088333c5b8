//! Reconciliation of a single work item

use crate::error::Error;
use crate::platform::IssueTracker;
use crate::reconcile::probe::{find_open_duplicate, probe_target};
use crate::reconcile::{ProgressCallback, Step};
use crate::types::{Board, CandidateIssue, Outcome, SkipReason, TargetRepository, TargetState};

/// Failure reason used when an error carries no message of its own
pub const GENERIC_FAILURE: &str = "unexpected error while creating issue";

/// Per-run options for reconciliation
#[derive(Debug, Clone, Copy, Default)]
pub struct ReconcileOptions<'a> {
    /// Decide and report without creating anything
    pub dry_run: bool,
    /// Board to link created issues into
    pub board: Option<&'a Board>,
}

/// Ensure `candidate` exists as an open issue on `target`
///
/// Never fails: every error is folded into the returned [`Outcome`]. The
/// duplicate check runs before the dry-run short-circuit, so a dry run still
/// reports duplicates. Board linking happens only after a successful
/// creation and its failure is reported without changing the outcome.
pub async fn reconcile(
    candidate: &CandidateIssue,
    target: &TargetRepository,
    tracker: &dyn IssueTracker,
    options: ReconcileOptions<'_>,
    progress: &dyn ProgressCallback,
) -> Outcome {
    if !candidate.has_title() {
        return Outcome::Skipped {
            reason: SkipReason::MissingTitle,
        };
    }

    progress.on_step(Step::Probing).await;
    let reason = match probe_target(tracker, target).await {
        TargetState::Open => None,
        TargetState::NotFound => Some(SkipReason::NotFound),
        TargetState::Archived => Some(SkipReason::Archived),
        TargetState::IssuesDisabled => Some(SkipReason::IssuesDisabled),
    };
    if let Some(reason) = reason {
        return Outcome::Skipped { reason };
    }

    progress.on_step(Step::CheckingDuplicates).await;
    if let Some(url) = find_open_duplicate(tracker, target, &candidate.title).await {
        return Outcome::Duplicate { url };
    }

    if options.dry_run {
        return Outcome::WouldCreate;
    }

    progress.on_step(Step::Creating).await;
    let created = match tracker.create_issue(target, candidate).await {
        Ok(created) => created,
        Err(e) => {
            tracing::warn!(repo = %target, error = %e, "issue creation failed");
            return Outcome::Failed {
                reason: failure_reason(&e),
            };
        }
    };

    if let Some(board) = options.board {
        progress.on_step(Step::AddingToBoard).await;
        match tracker.add_to_board(board, &created).await {
            Ok(()) => progress.on_board_linked(board).await,
            Err(e) => {
                tracing::warn!(board = %board.title, error = %e, "failed to add issue to board");
                progress
                    .on_error(&Error::Platform(format!(
                        "Failed to add {} to project #{}: {}",
                        created.html_url,
                        board.number,
                        e.reason()
                    )))
                    .await;
            }
        }
    }

    Outcome::Created {
        url: created.html_url,
    }
}

fn failure_reason(error: &Error) -> String {
    let reason = error.reason();
    if reason.trim().is_empty() {
        GENERIC_FAILURE.to_string()
    } else {
        reason
    }
}
