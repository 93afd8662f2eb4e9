//! User-reply pattern matching: name extraction and next-action intents.
//!
//! All matching is deliberately case-sensitive. Names are recognized as a
//! run of capitalized tokens; next-action intents are literal lowercase
//! keyword patterns checked in a fixed precedence order.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

// Compile patterns once at startup.
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // A run of 2-4 consecutive capitalized tokens, e.g. "Natalie Parde".
    Regex::new(r"(^|\s)([A-Z][A-Za-z&'.-]*(\s|$)){2,4}").expect("Invalid regex: name pattern")
});

static QUIT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bquit\b").expect("Invalid regex: quit pattern"));

static SENTIMENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bsentiment\b").expect("Invalid regex: sentiment pattern"));

static STYLISTIC_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bstyl").expect("Invalid regex: stylistic pattern"));

/// What the user wants to do after an analysis round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAction {
    Quit,
    Sentiment,
    Stylistic,
}

impl fmt::Display for NextAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NextAction::Quit => "quit",
            NextAction::Sentiment => "sentiment",
            NextAction::Stylistic => "stylistic",
        };
        write!(f, "{}", label)
    }
}

/// Extract a display name from a free-text reply.
///
/// Returns the trimmed capitalized-word run, or the empty string when the
/// reply contains none.
pub fn extract_name(reply: &str) -> String {
    NAME_PATTERN
        .find(reply)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Recognize the next-action intent in a reply.
///
/// Patterns are checked in fixed precedence order (quit, then sentiment,
/// then the `styl` prefix), so a reply containing several keywords always
/// resolves to the highest-precedence one.
pub fn match_next_action(reply: &str) -> Option<NextAction> {
    if QUIT_PATTERN.is_match(reply) {
        Some(NextAction::Quit)
    } else if SENTIMENT_PATTERN.is_match(reply) {
        Some(NextAction::Sentiment)
    } else if STYLISTIC_PATTERN.is_match(reply) {
        Some(NextAction::Stylistic)
    } else {
        None
    }
}
