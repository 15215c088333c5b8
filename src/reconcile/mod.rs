//! Reconciliation engine
//!
//! Drives work items one at a time through:
//! 1. Probing - does the target accept new issues?
//! 2. Duplicate detection - is an open issue with the same title there?
//! 3. Creation - create the issue (unless dry run), then link it to a board

mod batch;
mod engine;
mod probe;
mod progress;

pub use batch::{resolve_board, run_batch, BatchReport, Pacer, SleepPacer};
pub use engine::{reconcile, ReconcileOptions, GENERIC_FAILURE};
pub use probe::{find_open_duplicate, probe_target};
pub use progress::{NoopProgress, ProgressCallback, Step};
