//! Structural unit segmentation.
//!
//! Partitions extracted document text into ordered, positioned
//! [`StructuralUnit`]s at recognized sub-clause markers. Documents
//! without any detectable numbering fall back to sentence units, so
//! segmentation never fails; the worst case is coarser units.

use super::marker::{find_markers, MarkerMatch};
use crate::sentence::sentence_spans;
use crate::types::StructuralUnit;

/// Segment text into ordered structural units.
///
/// Each recognized marker opens a unit whose body runs from just
/// after the marker to just before the next marker (or the end of the
/// text); text before the first marker belongs to no unit. Marker
/// unit spans are contiguous and the last span ends at the text
/// length, while `full_text` drops the span's trailing inter-unit
/// whitespace so that an extra blank line between clauses does not
/// register as a change.
///
/// With zero markers in the whole text, each sentence becomes a unit
/// with a synthesized sequential marker (`"1."`, `"2."`, ...).
/// Whitespace-only text yields zero units.
///
/// # Examples
/// ```
/// use redline_diff::segment::segment;
///
/// let units = segment("1. First clause.\n2. Second clause.");
/// assert_eq!(units.len(), 2);
/// assert_eq!(units[0].marker, "1.");
/// assert_eq!(units[1].body, "Second clause.");
/// ```
#[must_use]
pub fn segment(text: &str) -> Vec<StructuralUnit> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let markers = find_markers(text);
    if markers.is_empty() {
        tracing::debug!("No sub-clause markers detected, falling back to sentence units");
        return sentence_units(text);
    }

    marker_units(text, &markers)
}

/// Build contiguous units from recognized markers.
fn marker_units(text: &str, markers: &[MarkerMatch]) -> Vec<StructuralUnit> {
    markers
        .iter()
        .enumerate()
        .map(|(idx, marker)| {
            let span_end = markers
                .get(idx + 1)
                .map_or(text.len(), |next| next.start);

            let full_text = text[marker.start..span_end].trim_end().to_string();
            let body = text[marker.end..span_end].trim().to_string();

            StructuralUnit::new(marker.label.clone(), body, full_text, marker.start, span_end)
        })
        .collect()
}

/// Build sentence-based units with synthesized sequential markers.
///
/// The synthesized marker is a label only; it does not occur in the
/// source, so `full_text` carries the sentence exactly as found.
fn sentence_units(text: &str) -> Vec<StructuralUnit> {
    sentence_spans(text)
        .into_iter()
        .enumerate()
        .map(|(idx, span)| {
            let marker = format!("{}.", idx + 1);
            StructuralUnit::new(marker, span.text.clone(), span.text, span.start, span.end)
        })
        .collect()
}
