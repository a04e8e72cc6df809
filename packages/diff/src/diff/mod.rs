//! Sequence alignment and word-level highlighting.

mod align;
mod highlight;
mod opcodes;

pub use align::align;
pub use highlight::{
    highlight, mark_deleted, mark_inserted, DELETION_CLOSE, DELETION_OPEN, INSERTION_CLOSE,
    INSERTION_OPEN,
};
pub use opcodes::{compute_opcodes, OpTag, Opcode};
