//! Top-level document comparison.
//!
//! Thin orchestration over the pipeline: validate both inputs,
//! segment each text into structural units, align the two unit
//! sequences, and hand the ordered change records to the caller.
//! Purely functional over its inputs, so independent document pairs
//! may be compared concurrently without coordination.

use crate::diff::align;
use crate::error::{DiffError, Result};
use crate::segment::segment;
use crate::types::ChangeRecord;

/// Compare two document texts and return the ordered change records.
///
/// Inputs are the fully extracted, whitespace-normalized body texts
/// of the reference and client documents. Segmentation and alignment
/// are total over text: empty documents, missing numbering, and
/// ragged replacements degrade gracefully rather than erroring. The
/// only rejection is non-text input (embedded NUL or other
/// non-printing control characters), which fails fast with
/// [`DiffError::InvalidInput`] instead of attempting a partial diff
/// of binary data.
///
/// # Examples
/// ```
/// use redline_diff::compare_documents;
///
/// let changes = compare_documents(
///     "1. Оплата ежемесячно.",
///     "1. Оплата ежеквартально.",
/// )?;
/// assert_eq!(changes.len(), 1);
/// # Ok::<(), redline_diff::DiffError>(())
/// ```
pub fn compare_documents(reference_text: &str, client_text: &str) -> Result<Vec<ChangeRecord>> {
    validate_text(reference_text, "reference")?;
    validate_text(client_text, "client")?;

    let reference_units = segment(reference_text);
    let client_units = segment(client_text);
    tracing::info!(
        reference_units = reference_units.len(),
        client_units = client_units.len(),
        "Segmented documents"
    );

    let changes = align(&reference_units, &client_units);
    tracing::info!(changes = changes.len(), "Computed change records");

    Ok(changes)
}

/// Reject non-text input.
///
/// Extracted document text may legitimately contain line breaks and
/// tabs; NUL bytes and other non-printing control characters only
/// show up when a binary file bypassed text extraction.
fn validate_text(text: &str, document: &str) -> Result<()> {
    for (position, c) in text.char_indices() {
        if c.is_control() && !matches!(c, '\n' | '\r' | '\t') {
            return Err(DiffError::InvalidInput {
                document: document.to_string(),
                position,
            });
        }
    }
    Ok(())
}
