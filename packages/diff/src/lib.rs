//! Redline diff engine - Structural comparison of legal document revisions.
//!
//! This crate turns the raw extracted text of two document versions
//! into an ordered list of classified change records: it partitions
//! each text into comparable structural units (numbered sub-clauses,
//! falling back to sentences), aligns the two unit sequences with an
//! LCS edit script, classifies each misaligned region as an addition,
//! deletion, or modification, and renders word-level highlighting for
//! modified units.
//!
//! # Example
//!
//! ```
//! use redline_diff::{compare_documents, ChangeType};
//!
//! let reference = "1. Отчет сдаётся ежемесячно.\n2. Срок хранения 5 лет.";
//! let client = "1. Отчет сдаётся ежеквартально.\n2. Срок хранения 5 лет.";
//!
//! let changes = compare_documents(reference, client)?;
//! assert_eq!(changes.len(), 1);
//! assert_eq!(changes[0].change_type, ChangeType::Modification);
//! # Ok::<(), redline_diff::DiffError>(())
//! ```
//!
//! # Architecture
//!
//! - [`types`]: core data types (StructuralUnit, ChangeRecord, etc.)
//! - [`error`]: error types and Result alias
//! - [`sentence`]: sentence splitting
//! - [`segment`]: marker grammar and structural unit segmentation
//! - [`diff`]: LCS opcodes, unit alignment, word-level highlighting
//! - [`analyzer`]: top-level document comparison
//! - [`cli`]: command-line interface

pub mod analyzer;
pub mod cli;
pub mod diff;
pub mod error;
pub mod segment;
pub mod sentence;
pub mod types;

// Re-export the main entry point
pub use analyzer::compare_documents;

// Re-export commonly used items
pub use error::{DiffError, Result};
pub use types::{ChangeRecord, ChangeType, ComparisonSummary, StructuralUnit};
