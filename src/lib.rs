//! # align-accuracy
//!
//! A library for measuring the accuracy of basecalled reads and assemblies from
//! their alignments to a trusted reference.
//!
//! Comparing basecallers or assemblers comes down to two questions: how
//! accurate is each sequence, and what kinds of errors does it make. Aligners
//! answer neither directly: a read may produce several overlapping or split
//! alignments, and a base-level variant list does not say whether a deletion
//! sits in a homopolymer or a methylation site.
//!
//! `align-accuracy` answers both with two pure engine functions:
//!
//! ## Features
//!
//! - **Identity reconciliation**: merges all alignments of a read, keeping the
//!   best identity per base, into one identity and relative length
//! - **Unaligned detection**: reads with less than half their bases aligned
//!   score 0 instead of averaging in large unaligned stretches
//! - **Error classification**: Dcm motif, homopolymer insertion/deletion,
//!   other insertion/deletion, substitution
//! - **Rate reporting**: error counts normalised to reference length
//!
//! ## Example
//!
//! ```rust
//! use align_accuracy::{classify, reconcile, AlignmentSegment, ErrorCategory, VariantColumn};
//!
//! let segments = [AlignmentSegment {
//!     query_start: 0,
//!     query_end: 100,
//!     ref_start: 0,
//!     ref_end: 100,
//!     matches: 95,
//!     alignment_block_length: 100,
//! }];
//! let accuracy = reconcile("read1", 100, &segments).unwrap();
//! assert_eq!(accuracy.relative_length, Some(100.0));
//!
//! let column = VariantColumn::new(b'A', b'.', "ACGAAAGCT");
//! assert_eq!(classify(&column).unwrap(), ErrorCategory::HomopolymerDeletion);
//! ```
//!
//! ## Modules
//!
//! - [`accuracy`]: Identity reconciler, error classifier and aggregation
//! - [`core`]: Core data types for segments, reads and variant columns
//! - [`parsing`]: Parsers for FASTA/FASTQ, PAF, show-snps and read tables
//! - [`cli`]: Command-line interface implementation

pub mod accuracy;
pub mod cli;
pub mod core;
pub mod parsing;

// Re-export commonly used types for convenience
pub use accuracy::classify::{classify, classify_with_config, ClassifierConfig};
pub use accuracy::identity::{reconcile, reconcile_with_config, ReconcileConfig};
pub use accuracy::tally::ErrorTally;
pub use accuracy::AccuracyError;
pub use core::types::*;
