//! Sentence splitting.
//!
//! Splits a raw text block into sentences on terminal punctuation.
//! Used directly by callers that want sentence granularity and by the
//! segmenter as the fallback when a document carries no detectable
//! sub-clause numbering.

/// A sentence together with its byte span in the source text.
///
/// The span covers the trimmed sentence only: surrounding whitespace
/// and the terminal punctuation run are dropped, so consecutive spans
/// need not be contiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SentenceSpan {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Check whether a character terminates a sentence.
fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Split text into sentences on runs of terminal punctuation
/// (`.`, `!`, `?`), trimming each sentence and discarding empties.
///
/// Any string is acceptable input; text without terminal punctuation
/// is a single sentence, and empty input yields an empty vector.
///
/// # Examples
/// ```
/// use redline_diff::sentence::split_sentences;
///
/// let sentences = split_sentences("First. Second! Third?");
/// assert_eq!(sentences, vec!["First", "Second", "Third"]);
/// assert!(split_sentences("").is_empty());
/// ```
#[must_use]
pub fn split_sentences(text: &str) -> Vec<String> {
    sentence_spans(text).into_iter().map(|s| s.text).collect()
}

/// Split text into sentences, tracking byte offsets.
///
/// A run of consecutive terminal marks counts as a single delimiter,
/// so ellipses and "?!" do not produce empty sentences.
pub(crate) fn sentence_spans(text: &str) -> Vec<SentenceSpan> {
    let mut spans = Vec::new();
    let mut segment_start = 0;

    for (pos, c) in text.char_indices() {
        if is_terminal(c) {
            push_span(text, segment_start, pos, &mut spans);
            // Consecutive terminal marks are one delimiter; the next
            // segment starts after this character and any empty
            // segment between marks is discarded by push_span.
            segment_start = pos + c.len_utf8();
        }
    }

    push_span(text, segment_start, text.len(), &mut spans);
    spans
}

/// Trim the segment `[start, end)` and record it if non-empty.
fn push_span(text: &str, start: usize, end: usize, spans: &mut Vec<SentenceSpan>) {
    let segment = &text[start..end];
    let trimmed = segment.trim();
    if trimmed.is_empty() {
        return;
    }

    let leading = segment.len() - segment.trim_start().len();
    let trimmed_start = start + leading;
    spans.push(SentenceSpan {
        text: trimmed.to_string(),
        start: trimmed_start,
        end: trimmed_start + trimmed.len(),
    });
}
