//! Progress callback trait for interface-agnostic updates
//!
//! Reconciliation never prints. Interfaces receive updates through this trait
//! and decide how to present them.

use crate::error::Error;
use crate::types::{Board, ItemOutcome, WorkItem};
use async_trait::async_trait;
use std::fmt;

/// Step within one work item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Checking whether the target accepts issues
    Probing,
    /// Looking for an open issue with the same title
    CheckingDuplicates,
    /// Creating the issue
    Creating,
    /// Linking the created issue into a board
    AddingToBoard,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Probing => "Checking repository access",
            Self::CheckingDuplicates => "Checking for existing issue",
            Self::Creating => "Creating issue",
            Self::AddingToBoard => "Adding to project board",
        };
        f.write_str(text)
    }
}

/// Progress callback trait
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called before a work item is reconciled (`position` is 1-based)
    async fn on_item_start(&self, position: usize, total: usize, item: &WorkItem);

    /// Called when a work item enters a step
    async fn on_step(&self, step: Step);

    /// Called with the outcome of a work item
    async fn on_outcome(&self, outcome: &ItemOutcome);

    /// Called after a created issue was linked into a board
    async fn on_board_linked(&self, board: &Board);

    /// Called when an error occurs that does not change the outcome
    async fn on_error(&self, error: &Error);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_item_start(&self, _position: usize, _total: usize, _item: &WorkItem) {}
    async fn on_step(&self, _step: Step) {}
    async fn on_outcome(&self, _outcome: &ItemOutcome) {}
    async fn on_board_linked(&self, _board: &Board) {}
    async fn on_error(&self, _error: &Error) {}
}
