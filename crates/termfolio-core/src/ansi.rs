//! ANSI escape code handling utilities
//!
//! Frames carry OSC 8 hyperlinks inline, so anything that lays text out
//! (centering, card widths) has to measure the visible text only.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

const ESC: &str = "\x1b";
const BEL: &str = "\x07";

/// Regex pattern for ANSI escape sequences.
///
/// Covers:
/// - CSI sequences: ESC [ ... letter (colors, cursor, etc.)
/// - OSC sequences: ESC ] ... BEL or ST (hyperlinks, titles)
/// - Simple escapes: ESC letter
static ANSI_ESCAPE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        \x1b\[[0-9;?]*[A-Za-z]               # CSI sequences
        | \x1b\][^\x07\x1b]*(?:\x07|\x1b\\)  # OSC sequences
        | \x1b[A-Za-z]                       # Simple escapes
        ",
    )
    .expect("ANSI regex pattern is valid")
});

/// Regex pattern for a complete OSC 8 hyperlink: opener, label, closer.
static HYPERLINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\x1b\]8;;([^\x07\x1b]*)\x07([^\x1b]*)\x1b\]8;;\x07$")
        .expect("Hyperlink regex pattern is valid")
});

/// Wrap `label` in an OSC 8 hyperlink pointing at `url`.
///
/// An empty `url` yields the bare label.
///
/// # Examples
///
/// ```
/// use termfolio_core::hyperlink;
///
/// assert_eq!(
///     hyperlink("GitHub", "https://github.com/me"),
///     "\x1b]8;;https://github.com/me\x07GitHub\x1b]8;;\x07"
/// );
/// assert_eq!(hyperlink("GitHub", ""), "GitHub");
/// ```
pub fn hyperlink(label: &str, url: &str) -> String {
    if url.is_empty() {
        return label.to_string();
    }
    format!("{ESC}]8;;{url}{BEL}{label}{ESC}]8;;{BEL}")
}

/// Split a string produced by [`hyperlink`] into `(url, label)`.
///
/// Returns `None` unless the whole input is exactly one hyperlink.
pub fn parse_hyperlink(input: &str) -> Option<(&str, &str)> {
    let caps = HYPERLINK_PATTERN.captures(input)?;
    let url = caps.get(1)?.as_str();
    let label = caps.get(2)?.as_str();
    Some((url, label))
}

/// Strip all ANSI escape sequences from a string.
///
/// # Examples
///
/// ```
/// use termfolio_core::strip_ansi_codes;
///
/// let input = "\x1b[31mred text\x1b[0m";
/// assert_eq!(strip_ansi_codes(input), "red text");
/// ```
pub fn strip_ansi_codes(input: &str) -> String {
    ANSI_ESCAPE_PATTERN.replace_all(input, "").into_owned()
}

/// Check if a string contains ANSI escape sequences.
pub fn contains_ansi_codes(input: &str) -> bool {
    ANSI_ESCAPE_PATTERN.is_match(input)
}

/// Number of terminal columns `input` occupies once escape sequences are removed.
pub fn display_width(input: &str) -> usize {
    if contains_ansi_codes(input) {
        strip_ansi_codes(input).width()
    } else {
        input.width()
    }
}
