//! Repository discovery from free-form text
//!
//! Scans a document (typically an awesome-list README) for repository links
//! of the form `https://<host>/<owner>/<repo>` and returns each repository
//! once, in first-seen order.

use crate::types::TargetRepository;
use regex::Regex;
use std::collections::HashSet;

/// Default web host for repository links
pub const DEFAULT_HOST: &str = "github.com";

/// First path segments that are GitHub pages rather than owners
pub const NON_REPOSITORY_OWNERS: [&str; 4] = ["apps", "topics", "orgs", "contact"];

/// Extracts repository references from text
#[derive(Debug)]
pub struct RepoExtractor {
    pattern: Regex,
    source: TargetRepository,
}

impl RepoExtractor {
    /// Create an extractor for links on `host`, excluding `source` itself
    pub fn new(host: &str, source: TargetRepository) -> Self {
        // A link must end at `)`, `]`, whitespace or end of text, so links
        // into files (`/blob/...`) or subpaths never match as a repository.
        let pattern = format!(
            r"https://{}/([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+)(?:[)\]\s]|\z)",
            regex::escape(host)
        );
        Self {
            pattern: Regex::new(&pattern).expect("escaped host yields a valid regex"),
            source,
        }
    }

    /// Extract unique repositories in first-seen order
    pub fn extract(&self, text: &str) -> Vec<TargetRepository> {
        let mut seen = HashSet::new();
        let mut repos = Vec::new();

        for caps in self.pattern.captures_iter(text) {
            let (Some(owner), Some(name)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            let repo = TargetRepository::new(owner.as_str(), name.as_str());

            if NON_REPOSITORY_OWNERS.contains(&repo.owner.as_str()) || repo == self.source {
                continue;
            }
            if seen.insert(repo.clone()) {
                repos.push(repo);
            }
        }

        repos
    }
}

/// Extract repositories linked on github.com, excluding `source`
pub fn extract_repositories(text: &str, source: &TargetRepository) -> Vec<TargetRepository> {
    RepoExtractor::new(DEFAULT_HOST, source.clone()).extract(text)
}
