//! Test data factories for issue-seeder types
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use issue_seeder::types::{
    Board, CandidateIssue, ExistingIssue, RepositoryInfo, TargetRepository, WorkItem,
};

/// Repository that accepts issues
pub const fn open_repo() -> RepositoryInfo {
    RepositoryInfo {
        archived: false,
        has_issues: true,
    }
}

/// Archived repository
pub const fn archived_repo() -> RepositoryInfo {
    RepositoryInfo {
        archived: true,
        has_issues: true,
    }
}

/// Repository with issues turned off
pub const fn issues_disabled_repo() -> RepositoryInfo {
    RepositoryInfo {
        archived: false,
        has_issues: false,
    }
}

/// Target repository from an `owner/name` string
pub fn target(spec: &str) -> TargetRepository {
    TargetRepository::parse(spec).expect("fixture repository must be owner/name")
}

/// Candidate issue with a body and no labels
pub fn make_candidate(title: &str) -> CandidateIssue {
    CandidateIssue {
        title: title.to_string(),
        body: format!("Body of {title}"),
        labels: vec![],
    }
}

/// Candidate issue with labels
pub fn make_labeled_candidate(title: &str, labels: &[&str]) -> CandidateIssue {
    CandidateIssue {
        labels: labels.iter().map(ToString::to_string).collect(),
        ..make_candidate(title)
    }
}

/// Open issue as listed by the tracker
pub fn make_issue(repo: &str, number: u64, title: &str) -> ExistingIssue {
    ExistingIssue {
        number,
        title: title.to_string(),
        html_url: format!("https://github.com/{repo}/issues/{number}"),
    }
}

/// Work item for a candidate on a target
pub fn make_item(title: &str, repo: &str) -> WorkItem {
    WorkItem {
        candidate: make_candidate(title),
        target: target(repo),
    }
}

/// Project board
pub fn make_board(number: u64) -> Board {
    Board {
        id: format!("PVT_board{number}"),
        title: "Community Ideas".to_string(),
        number,
    }
}
