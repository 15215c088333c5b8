//! issue-seeder - ensure GitHub issues exist, idempotently
//!
//! Reads candidate issues from an issue template or a spreadsheet of ideas,
//! then reconciles each one against a target repository: probe the target,
//! look for an open issue with the same title, and create the issue only when
//! neither check blocks it.

pub mod auth;
pub mod config;
pub mod discover;
pub mod error;
pub mod platform;
pub mod reconcile;
pub mod report;
pub mod source;
pub mod types;
