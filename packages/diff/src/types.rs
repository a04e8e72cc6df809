//! Core data types for the diff engine.
//!
//! These types form the output contract consumed by downstream
//! collaborators (regulatory matching, LLM classification, report
//! rendering), so the change records carry serde derives and a closed
//! change-type variant rather than loosely-typed maps.

use serde::{Deserialize, Serialize};

/// Classification of a detected difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    /// Unit exists only in the client document.
    Addition,

    /// Unit exists only in the reference document.
    Deletion,

    /// Unit exists on both sides with differing text.
    Modification,
}

impl ChangeType {
    /// Get the string value used in serialized output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Addition => "addition",
            Self::Deletion => "deletion",
            Self::Modification => "modification",
        }
    }
}

/// A contiguous span of source text representing one comparable unit:
/// a numbered sub-clause, or a sentence when no numbering is detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralUnit {
    /// Detected label (e.g. "1.2)"), or a synthesized sequential
    /// label ("1.", "2.", ...) when segmentation fell back to
    /// sentences.
    pub marker: String,

    /// Unit text with the marker stripped.
    pub body: String,

    /// Marker plus body as found in the source text. For synthesized
    /// markers this is just the sentence text, since the marker does
    /// not occur in the source.
    pub full_text: String,

    /// Byte offset of the unit's span start in the source text.
    pub start_offset: usize,

    /// Byte offset one past the unit's span end. For marker-based
    /// units spans are contiguous: each `end_offset` equals the next
    /// unit's `start_offset`, and the last unit ends at the text
    /// length.
    pub end_offset: usize,
}

impl StructuralUnit {
    /// Create a new structural unit.
    #[must_use]
    pub fn new(
        marker: impl Into<String>,
        body: impl Into<String>,
        full_text: impl Into<String>,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Self {
            marker: marker.into(),
            body: body.into(),
            full_text: full_text.into(),
            start_offset,
            end_offset,
        }
    }

    /// Human-readable locator for this unit.
    #[must_use]
    pub fn context_label(&self) -> String {
        format!("Document, sub-clause {}", self.marker)
    }
}

/// One detected difference between the two unit sequences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// `full_text` of the reference unit, or empty for pure additions.
    pub original_text: String,

    /// `full_text` of the client unit, or empty for pure deletions.
    pub modified_text: String,

    /// Classification of this change.
    pub change_type: ChangeType,

    /// Index of the unit within its originating sequence: reference
    /// side for deletions and modifications, client side for pure
    /// additions.
    pub position: usize,

    /// Human-readable locator (e.g. "Document, sub-clause 1.2)").
    pub context_label: String,

    /// Word-level tagged rendering of the reference side, empty when
    /// `original_text` is empty.
    pub highlighted_original: String,

    /// Word-level tagged rendering of the client side, empty when
    /// `modified_text` is empty.
    pub highlighted_modified: String,
}

/// Aggregate change counts for a comparison, as rendered by result
/// tables downstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    /// Number of addition records.
    pub additions: usize,

    /// Number of deletion records.
    pub deletions: usize,

    /// Number of modification records.
    pub modifications: usize,
}

impl ComparisonSummary {
    /// Tally change records by type.
    #[must_use]
    pub fn from_changes(changes: &[ChangeRecord]) -> Self {
        let mut summary = Self::default();
        for change in changes {
            match change.change_type {
                ChangeType::Addition => summary.additions += 1,
                ChangeType::Deletion => summary.deletions += 1,
                ChangeType::Modification => summary.modifications += 1,
            }
        }
        summary
    }

    /// Total number of change records.
    #[must_use]
    pub fn total(&self) -> usize {
        self.additions + self.deletions + self.modifications
    }
}

/// Collapse all whitespace runs to single spaces and trim.
///
/// Used when deciding whether two units are effectively equal: a
/// reflowed clause with identical words is not a modification.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
