//! Issue tracker services
//!
//! Provides the remote operations reconciliation needs, behind a trait so the
//! engine can be driven by a mock in tests.

mod factory;
mod github;

pub use factory::create_issue_tracker;
pub use github::{GitHubService, OPEN_ISSUES_PAGE_SIZE};

use crate::error::Result;
use crate::types::{
    Board, CandidateIssue, CreatedIssue, ExistingIssue, RepositoryInfo, TargetRepository,
};
use async_trait::async_trait;

/// Issue tracker operations
///
/// Every call is a single request-response round trip; callers await one
/// before starting the next.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Fetch repository metadata, `None` when the repository does not exist
    async fn get_repository(&self, repo: &TargetRepository) -> Result<Option<RepositoryInfo>>;

    /// List open issues (first page only)
    async fn list_open_issues(&self, repo: &TargetRepository) -> Result<Vec<ExistingIssue>>;

    /// Create an issue
    async fn create_issue(
        &self,
        repo: &TargetRepository,
        issue: &CandidateIssue,
    ) -> Result<CreatedIssue>;

    /// Fetch the raw content of the repository's README
    async fn fetch_readme(&self, repo: &TargetRepository) -> Result<String>;

    /// Resolve an organization project board by number
    async fn find_board(&self, org: &str, number: u64) -> Result<Option<Board>>;

    /// Add an issue to a project board
    async fn add_to_board(&self, board: &Board, issue: &CreatedIssue) -> Result<()>;
}
