//! Alignment-based accuracy scoring engine.
//!
//! This module provides the two pure engine components and their helpers:
//!
//! - [`identity`]: reconciles every alignment segment of one read into a
//!   single identity and relative-length figure
//! - [`classify`]: assigns one [`ErrorCategory`] to a variant column from its
//!   reference context
//! - [`tally`]: single-writer aggregation of category counts into rates
//! - [`summary`]: median identity over a set of reads
//!
//! ## Identity Reconciliation
//!
//! Each query base keeps the best identity of any segment covering it. A read
//! counts as aligned only when a strict majority of its bases is covered; its
//! identity is then the mean over covered bases only.
//!
//! ## Error Classification
//!
//! Rules are evaluated in priority order, first match wins:
//!
//! 1. **Methylation motif**: Dcm site (`CCAGG`/`CCTGG`) in the context
//! 2. **Homopolymer deletion**: deletion in a run of 3 or more
//! 3. **Homopolymer insertion**: insertion extending a run of 3 or more
//! 4. **Other deletion**, 5. **Other insertion**, 6. **Substitution**
//!
//! ## Example
//!
//! ```rust
//! use align_accuracy::accuracy::identity::reconcile;
//! use align_accuracy::accuracy::classify::classify;
//! use align_accuracy::core::types::{AlignmentSegment, ErrorCategory, VariantColumn};
//!
//! let segment = AlignmentSegment {
//!     query_start: 0,
//!     query_end: 100,
//!     ref_start: 0,
//!     ref_end: 100,
//!     matches: 95,
//!     alignment_block_length: 100,
//! };
//! let accuracy = reconcile("read1", 100, &[segment]).unwrap();
//! assert_eq!(accuracy.identity, 95.0);
//!
//! let column = VariantColumn::new(b'.', b'A', "TTTTATTT");
//! assert_eq!(classify(&column).unwrap(), ErrorCategory::HomopolymerInsertion);
//! ```
//!
//! [`ErrorCategory`]: crate::core::types::ErrorCategory

use thiserror::Error;

pub mod classify;
pub mod identity;
pub mod summary;
pub mod tally;

#[derive(Error, Debug, PartialEq)]
pub enum AccuracyError {
    #[error("Read '{0}' has length 0")]
    EmptyRead(String),

    #[error("Read '{0}' has an alignment block of length 0")]
    EmptyAlignmentBlock(String),

    #[error("Read '{name}' has {matches} matches in a block of length {block_length}")]
    MatchesExceedBlock {
        name: String,
        matches: u64,
        block_length: u64,
    },

    #[error("Read '{name}' has segment {start}..{end} outside its length {length}")]
    SegmentOutOfRange {
        name: String,
        start: usize,
        end: usize,
        length: usize,
    },

    #[error("Read '{0}' is aligned but its segments span no reference bases")]
    EmptyReferenceSpan(String),

    #[error("Reference context has {length} characters, at least {required} are required")]
    ContextTooShort { length: usize, required: usize },

    #[error("Reference length must be greater than 0")]
    EmptyReference,

    #[error("No identities to summarise")]
    NoIdentities,
}

/// Convert a count to f64 for percentage and rate calculations
#[inline]
pub(crate) fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Convert a genomic quantity to f64 for percentage and rate calculations
#[inline]
pub(crate) fn length_to_f64(length: u64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        length as f64
    }
}
