//! GitHub credential discovery
//!
//! A token is taken from the first of `GITHUB_TOKEN`, `GH_TOKEN` or the
//! `gh` CLI that yields a non-blank value.

use crate::error::{Error, Result};
use std::env;
use std::fmt;
use tokio::process::Command;

/// Environment variables checked for a token, in order
pub const TOKEN_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

/// Where a token came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// Named environment variable
    Env(&'static str),
    /// `gh auth token`
    GhCli,
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Env(var) => write!(f, "{var} environment variable"),
            Self::GhCli => f.write_str("gh CLI"),
        }
    }
}

/// A usable GitHub token
#[derive(Clone)]
pub struct Credential {
    /// Bearer token
    pub token: String,
    /// Origin of the token
    pub source: TokenSource,
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

/// Find a GitHub token, failing when none is available
pub async fn resolve_credential() -> Result<Credential> {
    for var in TOKEN_VARS {
        if let Some(token) = non_blank(env::var(var).ok()) {
            return Ok(Credential {
                token,
                source: TokenSource::Env(var),
            });
        }
    }

    if let Some(token) = gh_cli_token().await {
        return Ok(Credential {
            token,
            source: TokenSource::GhCli,
        });
    }

    Err(Error::Auth(
        "GITHUB_TOKEN is not set (and `gh auth token` is unavailable)".to_string(),
    ))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

async fn gh_cli_token() -> Option<String> {
    let output = Command::new("gh")
        .args(["auth", "token"])
        .output()
        .await
        .ok()?;

    if !output.status.success() {
        return None;
    }
    non_blank(Some(String::from_utf8_lossy(&output.stdout).into_owned()))
}

/// Check a credential against the API, returning the authenticated login
pub async fn verify_credential(credential: &Credential, api_url: &str) -> Result<String> {
    let client = octocrab::Octocrab::builder()
        .personal_token(credential.token.clone())
        .base_uri(api_url)
        .map_err(|e| Error::GitHubApi(e.to_string()))?
        .build()
        .map_err(|e| Error::GitHubApi(e.to_string()))?;

    let user = client
        .current()
        .user()
        .await
        .map_err(|e| Error::Auth(format!("token rejected: {}", Error::from(e).reason())))?;

    Ok(user.login)
}
