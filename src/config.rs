//! Run configuration
//!
//! Built once at startup from flags and environment, then passed by reference
//! to everything that needs it.

use crate::error::{Error, Result};
use std::time::Duration;

/// Default pause between consecutive work items, in milliseconds
pub const DEFAULT_DELAY_MS: u64 = 3000;

/// Default GitHub REST API base
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Immutable settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Pause between consecutive work items
    pub delay: Duration,
    /// Compute and report decisions without creating anything
    pub dry_run: bool,
}

impl RunConfig {
    /// Create a run configuration
    pub const fn new(delay_ms: u64, dry_run: bool) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            dry_run,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY_MS, false)
    }
}

/// Window of rows to process: `start..end`, 0-based, end exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowRange {
    /// First index to process
    pub start: usize,
    /// One past the last index; `None` means to the end
    pub end: Option<usize>,
}

impl RowRange {
    /// Create a range, rejecting an end before the start
    pub fn new(start: Option<usize>, end: Option<usize>) -> Result<Self> {
        let start = start.unwrap_or(0);
        match end {
            Some(end) if end < start => Err(Error::Config(format!(
                "row range end ({end}) is before start ({start})"
            ))),
            _ => Ok(Self { start, end }),
        }
    }

    /// Select the window from a slice, clamping to its length
    pub fn select<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.end.unwrap_or(items.len()).min(items.len());
        let start = self.start.min(end);
        &items[start..end]
    }

    /// Whether this range covers everything
    pub const fn is_full(&self) -> bool {
        self.start == 0 && self.end.is_none()
    }
}

/// Validate a REST API base URL and strip any trailing slash
pub fn normalize_api_url(raw: &str) -> Result<String> {
    let parsed = url::Url::parse(raw)
        .map_err(|e| Error::Config(format!("invalid API URL {raw:?}: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed.as_str().trim_end_matches('/').to_string()),
        other => Err(Error::Config(format!(
            "unsupported API URL scheme {other:?} in {raw:?}"
        ))),
    }
}

/// Web host whose repository links correspond to an API base
///
/// `api.github.com` maps to `github.com`; an Enterprise API base such as
/// `https://ghe.example.com/api/v3` maps to its own host.
pub fn web_host(api_url: &str) -> Result<String> {
    let parsed = url::Url::parse(api_url)
        .map_err(|e| Error::Config(format!("invalid API URL {api_url:?}: {e}")))?;
    let host = parsed
        .host_str()
        .ok_or_else(|| Error::Config(format!("API URL {api_url:?} has no host")))?;
    Ok(host.strip_prefix("api.").unwrap_or(host).to_string())
}
