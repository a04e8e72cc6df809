//! Unit sequence alignment.
//!
//! Compares two ordered unit sequences with the LCS edit script and
//! emits one [`ChangeRecord`] per non-equal unit. Replace regions of
//! unequal length are paired positionally up to the longer range: a
//! deliberate, deterministic tie-break with linear cost rather than a
//! nested optimal alignment of the sub-range.

use super::highlight::{highlight, mark_deleted, mark_inserted};
use super::opcodes::{compute_opcodes, OpTag};
use crate::types::{normalize_whitespace, ChangeRecord, ChangeType, StructuralUnit};

/// Align two unit sequences and emit ordered change records.
///
/// Units are compared on `full_text`. `equal` regions emit nothing;
/// `delete`/`insert` regions emit one deletion/addition per unit;
/// `replace` regions pair units index-by-index, skipping pairs whose
/// texts are equal after whitespace normalization (a replace opcode
/// does not guarantee pairwise inequality) and emitting a
/// modification with word-level highlighting for the rest. Positions
/// are reference-side indices for deletions and modifications,
/// client-side indices for pure additions.
///
/// Total over all inputs: two empty sequences yield zero records.
#[must_use]
pub fn align(reference: &[StructuralUnit], client: &[StructuralUnit]) -> Vec<ChangeRecord> {
    let reference_texts: Vec<&str> = reference.iter().map(|u| u.full_text.as_str()).collect();
    let client_texts: Vec<&str> = client.iter().map(|u| u.full_text.as_str()).collect();

    let mut changes = Vec::new();

    for opcode in compute_opcodes(&reference_texts, &client_texts) {
        match opcode.tag {
            OpTag::Equal => {}
            OpTag::Delete => {
                for i in opcode.a_start..opcode.a_end {
                    changes.push(deletion_record(&reference[i], i));
                }
            }
            OpTag::Insert => {
                for j in opcode.b_start..opcode.b_end {
                    changes.push(addition_record(&client[j], j));
                }
            }
            OpTag::Replace => {
                align_replace_block(reference, client, &opcode, &mut changes);
            }
        }
    }

    changes
}

/// Pair the units of a replace block positionally.
fn align_replace_block(
    reference: &[StructuralUnit],
    client: &[StructuralUnit],
    opcode: &super::opcodes::Opcode,
    changes: &mut Vec<ChangeRecord>,
) {
    let max_len = opcode.a_len().max(opcode.b_len());

    for k in 0..max_len {
        let reference_unit = reference.get(opcode.a_start + k).filter(|_| opcode.a_start + k < opcode.a_end);
        let client_unit = client.get(opcode.b_start + k).filter(|_| opcode.b_start + k < opcode.b_end);

        match (reference_unit, client_unit) {
            (Some(ref_unit), Some(client_unit)) => {
                // Identical pairs inside a replace block carry no change
                if normalize_whitespace(&ref_unit.full_text)
                    == normalize_whitespace(&client_unit.full_text)
                {
                    continue;
                }
                changes.push(modification_record(ref_unit, client_unit, opcode.a_start + k));
            }
            (Some(ref_unit), None) => {
                changes.push(deletion_record(ref_unit, opcode.a_start + k));
            }
            (None, Some(client_unit)) => {
                changes.push(addition_record(client_unit, opcode.b_start + k));
            }
            (None, None) => {}
        }
    }
}

/// Build a deletion record for a reference-side unit.
fn deletion_record(unit: &StructuralUnit, position: usize) -> ChangeRecord {
    ChangeRecord {
        original_text: unit.full_text.clone(),
        modified_text: String::new(),
        change_type: ChangeType::Deletion,
        position,
        context_label: unit.context_label(),
        highlighted_original: mark_deleted(&unit.full_text),
        highlighted_modified: String::new(),
    }
}

/// Build an addition record for a client-side unit.
fn addition_record(unit: &StructuralUnit, position: usize) -> ChangeRecord {
    ChangeRecord {
        original_text: String::new(),
        modified_text: unit.full_text.clone(),
        change_type: ChangeType::Addition,
        position,
        context_label: unit.context_label(),
        highlighted_original: String::new(),
        highlighted_modified: mark_inserted(&unit.full_text),
    }
}

/// Build a modification record with word-level highlighting.
fn modification_record(
    reference_unit: &StructuralUnit,
    client_unit: &StructuralUnit,
    position: usize,
) -> ChangeRecord {
    let (highlighted_original, highlighted_modified) =
        highlight(&reference_unit.full_text, &client_unit.full_text);

    ChangeRecord {
        original_text: reference_unit.full_text.clone(),
        modified_text: client_unit.full_text.clone(),
        change_type: ChangeType::Modification,
        position,
        context_label: reference_unit.context_label(),
        highlighted_original,
        highlighted_modified,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn unit(marker: &str, body: &str) -> StructuralUnit {
        let full_text = format!("{marker} {body}");
        StructuralUnit::new(marker, body, full_text, 0, 0)
    }

    #[test]
    fn test_identical_sequences_yield_no_records() {
        let units = vec![unit("1.", "First clause."), unit("2.", "Second clause.")];
        assert!(align(&units, &units).is_empty());
    }

    #[test]
    fn test_both_empty_yield_no_records() {
        assert!(align(&[], &[]).is_empty());
    }

    #[test]
    fn test_empty_reference_yields_additions_in_order() {
        let client = vec![unit("1.", "One."), unit("2.", "Two."), unit("3.", "Three.")];
        let changes = align(&[], &client);

        assert_eq!(changes.len(), 3);
        for (idx, change) in changes.iter().enumerate() {
            assert_eq!(change.change_type, ChangeType::Addition);
            assert_eq!(change.position, idx);
            assert_eq!(change.original_text, "");
            assert_eq!(change.modified_text, client[idx].full_text);
        }
    }

    #[test]
    fn test_empty_client_yields_deletions_in_order() {
        let reference = vec![unit("1.", "One."), unit("2.", "Two.")];
        let changes = align(&reference, &[]);

        assert_eq!(changes.len(), 2);
        for (idx, change) in changes.iter().enumerate() {
            assert_eq!(change.change_type, ChangeType::Deletion);
            assert_eq!(change.position, idx);
            assert_eq!(change.modified_text, "");
        }
    }

    #[test]
    fn test_modification_record_shape() {
        let reference = vec![unit("1.", "Отчет сдаётся ежемесячно.")];
        let client = vec![unit("1.", "Отчет сдаётся ежеквартально.")];
        let changes = align(&reference, &client);

        assert_eq!(changes.len(), 1);
        let change = &changes[0];
        assert_eq!(change.change_type, ChangeType::Modification);
        assert_eq!(change.position, 0);
        assert_eq!(change.context_label, "Document, sub-clause 1.");
        assert!(!change.original_text.is_empty());
        assert!(!change.modified_text.is_empty());
        assert_ne!(change.original_text, change.modified_text);
        assert!(change.highlighted_original.contains("[-]ежемесячно.[/-]"));
        assert!(change.highlighted_modified.contains("[+]ежеквартально.[/+]"));
    }

    #[test]
    fn test_deletion_record_highlight() {
        let reference = vec![unit("1.", "Same."), unit("2.", "Removed clause.")];
        let client = vec![unit("1.", "Same.")];
        let changes = align(&reference, &client);

        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].change_type, ChangeType::Deletion);
        assert_eq!(changes[0].position, 1);
        assert_eq!(changes[0].highlighted_original, "[-]2. Removed clause.[/-]");
        assert_eq!(changes[0].highlighted_modified, "");
    }

    #[test]
    fn test_addition_position_is_client_side() {
        let reference = vec![unit("1.", "Same.")];
        let client = vec![unit("0.", "Inserted before."), unit("1.", "Same.")];
        let changes = align(&reference, &client);

        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].change_type, ChangeType::Addition);
        assert_eq!(changes[0].position, 0);
        assert_eq!(changes[0].context_label, "Document, sub-clause 0.");
        assert_eq!(changes[0].highlighted_modified, "[+]0. Inserted before.[/+]");
    }

    #[test]
    fn test_ragged_replace_longer_reference() {
        // Three reference units replaced by one client unit: the
        // first pair is a modification, the tail pure deletions
        let reference = vec![
            unit("1.", "Old a."),
            unit("2.", "Old b."),
            unit("3.", "Old c."),
            unit("4.", "Kept."),
        ];
        let client = vec![unit("1.", "New a."), unit("4.", "Kept.")];
        let changes = align(&reference, &client);

        assert_eq!(changes.len(), 3);
        assert_eq!(changes[0].change_type, ChangeType::Modification);
        assert_eq!(changes[0].position, 0);
        assert_eq!(changes[1].change_type, ChangeType::Deletion);
        assert_eq!(changes[1].position, 1);
        assert_eq!(changes[2].change_type, ChangeType::Deletion);
        assert_eq!(changes[2].position, 2);
    }

    #[test]
    fn test_ragged_replace_longer_client() {
        let reference = vec![unit("1.", "Old."), unit("9.", "Kept.")];
        let client = vec![
            unit("1.", "New."),
            unit("2.", "Extra one."),
            unit("3.", "Extra two."),
            unit("9.", "Kept."),
        ];
        let changes = align(&reference, &client);

        assert_eq!(changes.len(), 3);
        assert_eq!(changes[0].change_type, ChangeType::Modification);
        assert_eq!(changes[1].change_type, ChangeType::Addition);
        assert_eq!(changes[1].position, 1);
        assert_eq!(changes[2].change_type, ChangeType::Addition);
        assert_eq!(changes[2].position, 2);
    }

    #[test]
    fn test_replace_block_skips_pairwise_equal_units() {
        // The LCS anchors around the equal middle may still pair an
        // identical unit inside the replace block; no record for it
        let reference = vec![unit("1.", "Changed."), unit("2.", "Same text.")];
        let client = vec![unit("1.", "Modified."), unit("2.", "Same  text.")];
        let changes = align(&reference, &client);

        // "2." differs only in whitespace and is skipped
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].change_type, ChangeType::Modification);
        assert_eq!(changes[0].position, 0);
    }

    #[test]
    fn test_modification_invariants() {
        let reference = vec![unit("1.", "a b c."), unit("2.", "x.")];
        let client = vec![unit("1.", "a d c."), unit("2.", "y.")];

        for change in align(&reference, &client) {
            assert_eq!(change.change_type, ChangeType::Modification);
            assert!(!change.original_text.is_empty());
            assert!(!change.modified_text.is_empty());
            assert_ne!(
                normalize_whitespace(&change.original_text),
                normalize_whitespace(&change.modified_text)
            );
        }
    }
}
