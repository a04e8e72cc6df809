//! Word-level highlighting of a changed unit pair.
//!
//! Produces the inline `[-]…[/-]` / `[+]…[/+]` tagged renderings that
//! downstream renderers rewrite into their own markup (bold text,
//! HTML spans, and so on).

use super::opcodes::{compute_opcodes, OpTag};

/// Opening tag for deleted words.
pub const DELETION_OPEN: &str = "[-]";

/// Closing tag for deleted words.
pub const DELETION_CLOSE: &str = "[/-]";

/// Opening tag for inserted words.
pub const INSERTION_OPEN: &str = "[+]";

/// Closing tag for inserted words.
pub const INSERTION_CLOSE: &str = "[/+]";

/// Wrap text in deletion tags.
#[must_use]
pub fn mark_deleted(text: &str) -> String {
    format!("{DELETION_OPEN}{text}{DELETION_CLOSE}")
}

/// Wrap text in insertion tags.
#[must_use]
pub fn mark_inserted(text: &str) -> String {
    format!("{INSERTION_OPEN}{text}{INSERTION_CLOSE}")
}

/// Produce word-level tagged renderings of two unit texts.
///
/// Both texts are split on whitespace and compared with the LCS edit
/// script: words in `equal` runs pass through unchanged on both
/// sides, deleted words are wrapped in deletion tags on the first
/// side, inserted words in insertion tags on the second, and
/// `replace` runs mark each side's own words without pairing them
/// individually. Output words are joined with single spaces.
///
/// An empty side yields an empty rendering for it and a whole-text
/// wrap for the other side.
///
/// # Examples
/// ```
/// use redline_diff::diff::highlight;
///
/// let (marked_a, marked_b) = highlight("срок 30 дней", "срок 45 дней");
/// assert_eq!(marked_a, "срок [-]30[/-] дней");
/// assert_eq!(marked_b, "срок [+]45[/+] дней");
/// ```
#[must_use]
pub fn highlight(text_a: &str, text_b: &str) -> (String, String) {
    if text_a.is_empty() && text_b.is_empty() {
        return (String::new(), String::new());
    }
    if text_a.is_empty() {
        return (String::new(), mark_inserted(text_b));
    }
    if text_b.is_empty() {
        return (mark_deleted(text_a), String::new());
    }

    let words_a: Vec<&str> = text_a.split_whitespace().collect();
    let words_b: Vec<&str> = text_b.split_whitespace().collect();

    let mut marked_a: Vec<String> = Vec::with_capacity(words_a.len());
    let mut marked_b: Vec<String> = Vec::with_capacity(words_b.len());

    for opcode in compute_opcodes(&words_a, &words_b) {
        match opcode.tag {
            OpTag::Equal => {
                marked_a.extend(words_a[opcode.a_start..opcode.a_end].iter().map(ToString::to_string));
                marked_b.extend(words_b[opcode.b_start..opcode.b_end].iter().map(ToString::to_string));
            }
            OpTag::Delete => {
                marked_a.extend(words_a[opcode.a_start..opcode.a_end].iter().map(|w| mark_deleted(w)));
            }
            OpTag::Insert => {
                marked_b.extend(words_b[opcode.b_start..opcode.b_end].iter().map(|w| mark_inserted(w)));
            }
            OpTag::Replace => {
                marked_a.extend(words_a[opcode.a_start..opcode.a_end].iter().map(|w| mark_deleted(w)));
                marked_b.extend(words_b[opcode.b_start..opcode.b_end].iter().map(|w| mark_inserted(w)));
            }
        }
    }

    (marked_a.join(" "), marked_b.join(" "))
}
