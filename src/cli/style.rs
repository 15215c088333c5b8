//! Terminal styling for `seed` output
//!
//! Every colored fragment goes through [`Stylize`], which picks a [`Tone`]
//! and lets `owo-colors` decide per stream whether color is supported
//! (`NO_COLOR`, `CLICOLOR`, `CLICOLOR_FORCE` and TTY detection).

use indicatif::ProgressStyle;
use owo_colors::{OwoColorize, Style};
use std::fmt::{self, Display};
use std::sync::OnceLock;

pub use owo_colors::Stream;

/// Semantic color of a fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Repositories, titles, counts
    Accent,
    /// Created issues
    Success,
    /// Failures
    Error,
    /// Skips, duplicates, warnings
    Warn,
    /// Steps, hints, metadata
    Muted,
    /// Headers
    Emphasis,
}

impl Tone {
    const fn style(self) -> Style {
        match self {
            Self::Accent => Style::new().cyan(),
            Self::Success => Style::new().green(),
            Self::Error => Style::new().red(),
            Self::Warn => Style::new().yellow(),
            Self::Muted => Style::new().dimmed(),
            Self::Emphasis => Style::new().bold(),
        }
    }

    /// Stream whose color support decides rendering, unless overridden
    const fn default_stream(self) -> Stream {
        match self {
            Self::Error | Self::Warn => Stream::Stderr,
            _ => Stream::Stdout,
        }
    }
}

/// A value rendered in a tone
#[derive(Clone, Debug)]
pub struct Styled<T> {
    value: T,
    tone: Tone,
    stream: Stream,
}

impl<T> Styled<T> {
    const fn new(value: T, tone: Tone) -> Self {
        Self {
            value,
            tone,
            stream: tone.default_stream(),
        }
    }

    /// Render according to stdout's color support
    #[must_use]
    pub const fn for_stdout(mut self) -> Self {
        self.stream = Stream::Stdout;
        self
    }
}

impl<T: Display> Display for Styled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = self.tone.style();
        write!(
            f,
            "{}",
            self.value.if_supports_color(self.stream, |v| v.style(style))
        )
    }
}

/// Semantic styling for anything displayable
pub trait Stylize: Display {
    /// Accent color (cyan) for primary information.
    ///
    /// Use for: repository names, issue titles, counts
    fn accent(&self) -> Styled<&Self> {
        Styled::new(self, Tone::Accent)
    }

    /// Success color (green) for completion states.
    ///
    /// Use for: checkmarks, created issue counts
    fn success(&self) -> Styled<&Self> {
        Styled::new(self, Tone::Success)
    }

    /// Error color (red) for failures.
    ///
    /// Use for: failure reasons, fatal error prefix
    /// Default stream: stderr
    fn error(&self) -> Styled<&Self> {
        Styled::new(self, Tone::Error)
    }

    /// Warning color (yellow) for attention-needed states.
    ///
    /// Use for: skip reasons, duplicate names, board warnings
    /// Default stream: stderr
    fn warn(&self) -> Styled<&Self> {
        Styled::new(self, Tone::Warn)
    }

    /// Muted style (dim) for secondary information.
    ///
    /// Use for: reconciliation steps, dry-run markers, token source
    fn muted(&self) -> Styled<&Self> {
        Styled::new(self, Tone::Muted)
    }

    /// Emphasis style (bold) for important text.
    ///
    /// Use for: command banners, summary headings
    fn emphasis(&self) -> Styled<&Self> {
        Styled::new(self, Tone::Emphasis)
    }
}

impl<T: Display + ?Sized> Stylize for T {}

/// Green checkmark
pub const fn check() -> Styled<&'static str> {
    Styled::new("✓", Tone::Success)
}

/// Red cross
pub const fn cross() -> Styled<&'static str> {
    Styled::new("✗", Tone::Error)
}

/// Cyan arrow for dry-run decisions
pub const fn arrow() -> Styled<&'static str> {
    Styled::new("→", Tone::Accent)
}

/// Yellow dash for items left alone
pub const fn dash() -> Styled<&'static str> {
    Styled::new("-", Tone::Warn).for_stdout()
}

/// Issue URL as an OSC 8 hyperlink where the terminal supports it
pub fn hyperlink_url(stream: Stream, url: &str) -> String {
    let stream = match stream {
        Stream::Stdout => supports_hyperlinks::Stream::Stdout,
        Stream::Stderr => supports_hyperlinks::Stream::Stderr,
    };
    if supports_hyperlinks::on(stream) {
        terminal_link::Link::new(url, url).to_string()
    } else {
        url.to_string()
    }
}

/// Spinner shown while pacing between requests
pub fn spinner_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("hardcoded spinner template is valid")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        })
        .clone()
}
