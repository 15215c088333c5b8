//! Outcome tallies for end-of-run reporting

use crate::types::{ItemOutcome, Outcome};

/// Counts of outcomes by category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Issues created
    pub created: usize,
    /// Issues that would have been created (dry run)
    pub would_create: usize,
    /// Open duplicates found
    pub duplicates: usize,
    /// Items skipped (target unavailable or candidate incomplete)
    pub skipped: usize,
    /// Items that failed
    pub failed: usize,
}

impl Summary {
    /// Tally a sequence of outcomes
    pub fn from_outcomes(outcomes: &[ItemOutcome]) -> Self {
        outcomes
            .iter()
            .fold(Self::default(), |mut summary, item| {
                match item.outcome {
                    Outcome::Created { .. } => summary.created += 1,
                    Outcome::WouldCreate => summary.would_create += 1,
                    Outcome::Duplicate { .. } => summary.duplicates += 1,
                    Outcome::Skipped { .. } => summary.skipped += 1,
                    Outcome::Failed { .. } => summary.failed += 1,
                }
                summary
            })
    }

    /// Total number of items
    pub const fn total(&self) -> usize {
        self.created + self.would_create + self.duplicates + self.skipped + self.failed
    }
}

/// Outcomes of one category, in processing order
pub fn select<'a>(
    outcomes: &'a [ItemOutcome],
    predicate: impl Fn(&Outcome) -> bool + 'a,
) -> impl Iterator<Item = &'a ItemOutcome> + 'a {
    outcomes.iter().filter(move |o| predicate(&o.outcome))
}
