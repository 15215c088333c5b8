//! Error types for issue-seeder

use thiserror::Error;

/// Errors surfaced by issue-seeder
#[derive(Debug, Error)]
pub enum Error {
    /// Issue template is missing front matter, a title, or a body
    #[error("malformed template: {0}")]
    MalformedTemplate(String),

    /// Spreadsheet could not be opened or decoded
    #[error("spreadsheet error: {0}")]
    Spreadsheet(String),

    /// No usable credential
    #[error("authentication error: {0}")]
    Auth(String),

    /// GitHub answered with an error (message is GitHub's own when available)
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Platform operation failed for a reason other than a transport error
    #[error("{0}")]
    Platform(String),

    /// Invalid configuration value
    #[error("configuration error: {0}")]
    Config(String),

    /// Unparseable input
    #[error("parse error: {0}")]
    Parse(String),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The most specific human-readable message for this error.
    ///
    /// For API failures this is the message GitHub sent back, without the
    /// variant prefix.
    pub fn reason(&self) -> String {
        match self {
            Self::GitHubApi(msg) | Self::Platform(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl From<octocrab::Error> for Error {
    fn from(err: octocrab::Error) -> Self {
        match err {
            octocrab::Error::GitHub { source, .. } => Self::GitHubApi(source.message.clone()),
            other => Self::GitHubApi(other.to_string()),
        }
    }
}

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
