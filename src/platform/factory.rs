//! Issue tracker construction from discovered credentials

use crate::auth::resolve_credential;
use crate::error::Result;
use crate::platform::{GitHubService, IssueTracker};

/// Create an issue tracker for the given API base
///
/// Fails when no credential can be found.
pub async fn create_issue_tracker(api_url: &str) -> Result<Box<dyn IssueTracker>> {
    let credential = resolve_credential().await?;
    tracing::debug!(source = %credential.source, "using GitHub token");
    Ok(Box::new(GitHubService::new(&credential.token, api_url)?))
}
