//! Sub-clause marker grammar.
//!
//! Legal documents number their sub-clauses in a handful of shapes.
//! Each shape is an explicit [`MarkerKind`] with its own compiled
//! pattern, checked in a fixed precedence order, so the grammar is
//! auditable and testable kind by kind instead of being buried in ad
//! hoc string scanning.

use regex::Regex;
use std::sync::LazyLock;

/// Shapes of sub-clause numbering recognized by the segmenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// Arabic numerals with optional multi-level dotted suffixes,
    /// closed by a dot or parenthesis: "12.", "3)", "1.2)", "3.4.1.".
    Arabic,

    /// Upper-case Roman numerals closed by a dot or parenthesis:
    /// "IV.", "II)".
    Roman,

    /// A single lower-case Latin or Cyrillic letter closed by a dot
    /// or parenthesis: "a)", "б.".
    Letter,
}

impl MarkerKind {
    /// All kinds in precedence order (first match at a position wins).
    pub const ALL: [MarkerKind; 3] = [Self::Arabic, Self::Roman, Self::Letter];

    fn pattern(self) -> &'static Regex {
        match self {
            Self::Arabic => &ARABIC_PATTERN,
            Self::Roman => &ROMAN_PATTERN,
            Self::Letter => &LETTER_PATTERN,
        }
    }
}

/// Arabic marker: "12.", "3)", "1.2)", "3.4.1.".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ARABIC_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*(\d+(?:\.\d+)*[.)])").expect("valid regex"));

/// Roman numeral marker: "IV.", "II)".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ROMAN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*([IVXLCDM]+[.)])").expect("valid regex"));

/// Single-letter marker: "a)", "б.".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LETTER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*([a-zа-яё][.)])").expect("valid regex"));

/// A recognized sub-clause marker in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerMatch {
    /// Which grammar shape matched.
    pub kind: MarkerKind,

    /// The marker label as found (e.g. "1.2)").
    pub label: String,

    /// Byte offset of the marker's first character.
    pub start: usize,

    /// Byte offset one past the marker's last character.
    pub end: usize,
}

/// Find all sub-clause markers in the text, ordered by position.
///
/// A marker is recognized only at the start of a line (optionally
/// indented with spaces or tabs) and only when followed by whitespace
/// or the end of the text. The second condition keeps "12.5" at line
/// start from being read as marker "12." with body "5 ...": a dotted
/// number inside prose is not a sub-clause label.
///
/// When two kinds could match the same position, the earlier kind in
/// [`MarkerKind::ALL`] wins.
#[must_use]
pub fn find_markers(text: &str) -> Vec<MarkerMatch> {
    let mut by_start: std::collections::BTreeMap<usize, MarkerMatch> =
        std::collections::BTreeMap::new();

    for kind in MarkerKind::ALL {
        for captures in kind.pattern().captures_iter(text) {
            // Group 1 is the marker itself, excluding indentation
            let Some(group) = captures.get(1) else {
                continue;
            };

            if !boundary_after(text, group.end()) {
                continue;
            }

            by_start.entry(group.start()).or_insert_with(|| MarkerMatch {
                kind,
                label: group.as_str().to_string(),
                start: group.start(),
                end: group.end(),
            });
        }
    }

    by_start.into_values().collect()
}

/// The regex crate has no lookahead, so the "followed by whitespace
/// or end of input" rule is checked on the character after the match.
fn boundary_after(text: &str, end: usize) -> bool {
    match text[end..].chars().next() {
        None => true,
        Some(c) => c.is_whitespace(),
    }
}
