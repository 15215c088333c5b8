//! Target probing and duplicate detection
//!
//! Both checks absorb transport errors instead of propagating them, but in
//! opposite directions:
//! - probing fails closed: an unreadable repository is treated as not found,
//!   so one flaky request skips a target instead of aborting the batch
//! - duplicate detection fails open: an unreadable issue list is treated as
//!   "no duplicate", at the cost of possibly creating a duplicate issue

use crate::platform::IssueTracker;
use crate::types::{TargetRepository, TargetState};

/// Determine whether `repo` currently accepts new issues
pub async fn probe_target(tracker: &dyn IssueTracker, repo: &TargetRepository) -> TargetState {
    match tracker.get_repository(repo).await {
        Ok(Some(info)) => info.state(),
        Ok(None) => TargetState::NotFound,
        Err(e) => {
            tracing::warn!(%repo, error = %e, "repository probe failed, treating as not found");
            TargetState::NotFound
        }
    }
}

/// URL of an open issue on `repo` whose title equals `title` exactly
///
/// Only the first page of open issues is examined.
pub async fn find_open_duplicate(
    tracker: &dyn IssueTracker,
    repo: &TargetRepository,
    title: &str,
) -> Option<String> {
    match tracker.list_open_issues(repo).await {
        Ok(issues) => issues
            .into_iter()
            .find(|issue| issue.title == title)
            .map(|issue| issue.html_url),
        Err(e) => {
            tracing::warn!(%repo, error = %e, "duplicate check failed, assuming none");
            None
        }
    }
}
