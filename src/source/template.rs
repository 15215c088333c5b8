//! Issue template parsing: front matter + markdown body
//!
//! ```text
//! ---
//! title: Add a Midnight badge
//! labels:
//!   - documentation
//!   - good first issue
//! ---
//! Body text...
//! ```

use crate::error::{Error, Result};
use crate::types::CandidateIssue;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static FRONT_MATTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---\n(.*?)\n---\n(.*)\z").expect("hardcoded regex is valid")
});

static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^title:[ \t]*(.+)$").expect("hardcoded regex is valid"));

static LABELS_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^labels:[ \t]*\n((?:[ \t]*-[ \t]*\S.*(?:\n|\z))+)")
        .expect("hardcoded regex is valid")
});

static LABELS_INLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^labels:[ \t]*(\S.*)$").expect("hardcoded regex is valid"));

/// Read and parse an issue template file
pub fn load_template(path: &Path) -> Result<CandidateIssue> {
    if !path.is_file() {
        return Err(Error::MalformedTemplate(format!(
            "{} not found",
            path.display()
        )));
    }
    let content = std::fs::read_to_string(path)?;
    parse_template(&content)
}

/// Parse an issue template into a candidate issue
///
/// Fails when the `---` delimited front matter is absent, when it has no
/// `title`, or when the body is empty after trimming.
pub fn parse_template(content: &str) -> Result<CandidateIssue> {
    let normalized = normalize(content);

    let caps = FRONT_MATTER.captures(&normalized).ok_or_else(|| {
        Error::MalformedTemplate("expected front matter between --- delimiters".to_string())
    })?;
    let front_matter = caps.get(1).map_or("", |m| m.as_str());
    let body = caps.get(2).map_or("", |m| m.as_str()).trim();

    let title = TITLE
        .captures(front_matter)
        .and_then(|c| c.get(1))
        .map(|m| unquote(m.as_str().trim()).to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| Error::MalformedTemplate("front matter has no title".to_string()))?;

    if body.is_empty() {
        return Err(Error::MalformedTemplate(
            "no body content after front matter".to_string(),
        ));
    }

    Ok(CandidateIssue {
        title,
        body: body.to_string(),
        labels: parse_labels(front_matter),
    })
}

/// Parse labels from front matter, block list first, then inline
fn parse_labels(front_matter: &str) -> Vec<String> {
    if let Some(block) = LABELS_BLOCK.captures(front_matter).and_then(|c| c.get(1)) {
        return block
            .as_str()
            .lines()
            .map(|line| line.trim_start().trim_start_matches('-').trim())
            .map(unquote)
            .filter(|l| !l.is_empty())
            .map(ToString::to_string)
            .collect();
    }

    LABELS_INLINE
        .captures(front_matter)
        .and_then(|c| c.get(1))
        .map(|m| {
            let raw = m.as_str().trim();
            let raw = raw
                .strip_prefix('[')
                .and_then(|r| r.strip_suffix(']'))
                .unwrap_or(raw);
            raw.split(',')
                .map(|l| unquote(l.trim()))
                .filter(|l| !l.is_empty())
                .map(ToString::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Strip a leading BOM and convert CRLF/CR line endings to LF
fn normalize(content: &str) -> String {
    content
        .strip_prefix('\u{feff}')
        .unwrap_or(content)
        .replace("\r\n", "\n")
        .replace('\r', "\n")
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_template() {
        let issue = parse_template("---\ntitle: Hello\n---\nBody here\n").unwrap();
        assert_eq!(issue.title, "Hello");
        assert_eq!(issue.body, "Body here");
        assert!(issue.labels.is_empty());
    }

    #[test]
    fn test_parse_block_labels() {
        let doc = "---\ntitle: T\nlabels:\n  - a\n  - b\n---\nBody";
        assert_eq!(parse_template(doc).unwrap().labels, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_block_labels_followed_by_key() {
        let doc = "---\nlabels:\n- enhancement\n- \"good first issue\"\ntitle: T\n---\nBody";
        let issue = parse_template(doc).unwrap();
        assert_eq!(issue.title, "T");
        assert_eq!(issue.labels, vec!["enhancement", "good first issue"]);
    }

    #[test]
    fn test_parse_inline_labels() {
        let doc = "---\ntitle: T\nlabels: a, b\n---\nBody";
        assert_eq!(parse_template(doc).unwrap().labels, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_flow_list_labels() {
        let doc = "---\ntitle: T\nlabels: [a, 'b']\n---\nBody";
        assert_eq!(parse_template(doc).unwrap().labels, vec!["a", "b"]);
    }

    #[test]
    fn test_quoted_title_is_unquoted() {
        let doc = "---\ntitle: \"Add badge\"\n---\nBody";
        assert_eq!(parse_template(doc).unwrap().title, "Add badge");
    }

    #[test]
    fn test_body_is_trimmed() {
        let doc = "---\ntitle: T\n---\n\n\n  Line one\nLine two  \n\n";
        assert_eq!(parse_template(doc).unwrap().body, "Line one\nLine two");
    }

    #[test]
    fn test_bom_and_crlf_are_normalized() {
        let doc = "\u{feff}---\r\ntitle: T\r\nlabels: x\r\n---\r\nBody\r\n";
        let issue = parse_template(doc).unwrap();
        assert_eq!(issue.title, "T");
        assert_eq!(issue.body, "Body");
        assert_eq!(issue.labels, vec!["x"]);
    }

    #[test]
    fn test_missing_front_matter_fails() {
        let err = parse_template("title: T\n\nBody").unwrap_err();
        assert!(matches!(err, Error::MalformedTemplate(_)));
    }

    #[test]
    fn test_missing_title_fails() {
        let err = parse_template("---\nlabels: a\n---\nBody").unwrap_err();
        assert!(matches!(err, Error::MalformedTemplate(msg) if msg.contains("title")));
    }

    #[test]
    fn test_empty_body_fails() {
        let err = parse_template("---\ntitle: T\n---\n   \n\n").unwrap_err();
        assert!(matches!(err, Error::MalformedTemplate(msg) if msg.contains("body")));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = load_template(Path::new("/nonexistent/issue-template.md")).unwrap_err();
        assert!(matches!(err, Error::MalformedTemplate(_)));
    }
}
