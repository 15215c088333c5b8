//! Core types for issue-seeder

use serde::{Deserialize, Serialize};
use std::fmt;

/// An issue that should exist on a target repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateIssue {
    /// Issue title; a blank title makes the candidate non-actionable
    pub title: String,
    /// Markdown body
    pub body: String,
    /// Labels applied on creation, in order
    pub labels: Vec<String>,
}

impl CandidateIssue {
    /// Whether the candidate carries a usable title
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

/// A repository identified by owner and name (case-sensitive)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetRepository {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl TargetRepository {
    /// Create a repository reference
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parse an `owner/name` pair
    pub fn parse(spec: &str) -> Option<Self> {
        let (owner, name) = spec.trim().split_once('/')?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return None;
        }
        Some(Self::new(owner, name))
    }
}

impl fmt::Display for TargetRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Whether a repository currently accepts new issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetState {
    /// Repository does not exist or could not be read
    NotFound,
    /// Repository is archived (read-only)
    Archived,
    /// Repository has the issue tracker turned off
    IssuesDisabled,
    /// Repository accepts new issues
    Open,
}

/// Repository metadata relevant to issue creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepositoryInfo {
    /// Archived flag
    pub archived: bool,
    /// Issues-enabled flag
    pub has_issues: bool,
}

impl RepositoryInfo {
    /// Classify the repository
    pub const fn state(&self) -> TargetState {
        if self.archived {
            TargetState::Archived
        } else if !self.has_issues {
            TargetState::IssuesDisabled
        } else {
            TargetState::Open
        }
    }
}

/// An issue already present on a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistingIssue {
    /// Issue number
    pub number: u64,
    /// Issue title
    pub title: String,
    /// Web URL
    pub html_url: String,
}

/// An issue created by this run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedIssue {
    /// Issue number
    pub number: u64,
    /// Web URL
    pub html_url: String,
    /// Global GraphQL node id, used to link the issue into a board
    pub node_id: String,
}

/// A project board, identified by organization and number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRef {
    /// Organization login
    pub org: String,
    /// Project number
    pub number: u64,
}

/// A resolved project board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Global GraphQL node id
    pub id: String,
    /// Board title
    pub title: String,
    /// Project number
    pub number: u64,
}

/// Why a candidate was not turned into an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Target repository does not exist or could not be read
    NotFound,
    /// Target repository is archived
    Archived,
    /// Target repository has issues disabled
    IssuesDisabled,
    /// Candidate has no idea name / title
    MissingTitle,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::NotFound => "not found",
            Self::Archived => "archived",
            Self::IssuesDisabled => "issues disabled",
            Self::MissingTitle => "empty idea/name field",
        };
        f.write_str(reason)
    }
}

/// Result of reconciling one candidate against one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Issue was created
    Created {
        /// URL of the new issue
        url: String,
    },
    /// Dry run: the issue would have been created
    WouldCreate,
    /// An open issue with the same title already exists
    Duplicate {
        /// URL of the existing issue
        url: String,
    },
    /// Target or candidate blocks creation
    Skipped {
        /// Why
        reason: SkipReason,
    },
    /// An unexpected error occurred
    Failed {
        /// Most specific message available
        reason: String,
    },
}

impl Outcome {
    /// Short category label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Created { .. } => "created",
            Self::WouldCreate => "would create",
            Self::Duplicate { .. } => "duplicate",
            Self::Skipped { .. } => "skipped",
            Self::Failed { .. } => "failed",
        }
    }
}

/// One unit of work: a candidate paired with its target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    /// Issue to ensure
    pub candidate: CandidateIssue,
    /// Where it should live
    pub target: TargetRepository,
}

/// A processed work item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemOutcome {
    /// Target repository
    pub target: TargetRepository,
    /// Candidate title (possibly empty for skipped rows)
    pub title: String,
    /// What happened
    pub outcome: Outcome,
}
