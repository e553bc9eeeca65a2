use serde::{Deserialize, Serialize};

/// Gap marker used by base-level alignment tools for a missing base
pub const GAP: u8 = b'.';

/// One aligned block between a query sequence and a reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentSegment {
    /// Half-open start offset in the query
    pub query_start: usize,
    /// Half-open end offset in the query
    pub query_end: usize,
    /// Half-open start offset in the reference
    pub ref_start: u64,
    /// Half-open end offset in the reference
    pub ref_end: u64,
    /// Number of matching bases in the block
    pub matches: u64,
    /// Total alignment block length, including gaps
    pub alignment_block_length: u64,
}

impl AlignmentSegment {
    #[must_use]
    pub fn query_span(&self) -> usize {
        self.query_end.saturating_sub(self.query_start)
    }

    #[must_use]
    pub fn ref_span(&self) -> u64 {
        self.ref_end.saturating_sub(self.ref_start)
    }
}

/// Accuracy summary for a single read or assembly piece
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadAccuracy {
    /// Read name (first word of the sequence header)
    pub name: String,

    /// Declared total read length
    pub length: usize,

    /// Identity percentage in `[0, 100]`; `0.0` for unaligned reads
    pub identity: f64,

    /// Aligned query span over aligned reference span, as a percentage.
    /// Absent when the read is unaligned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_length: Option<f64>,
}

impl ReadAccuracy {
    #[must_use]
    pub fn is_aligned(&self) -> bool {
        self.identity > 0.0
    }
}

/// One reference/query column from a base-level alignment comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantColumn {
    /// Reference base, or [`GAP`] for an insertion
    pub ref_base: u8,
    /// Query base, or [`GAP`] for a deletion
    pub query_base: u8,
    /// Reference characters centered on this column, gaps included
    pub ref_context: Vec<u8>,
}

impl VariantColumn {
    pub fn new(ref_base: u8, query_base: u8, ref_context: impl Into<Vec<u8>>) -> Self {
        Self {
            ref_base,
            query_base,
            ref_context: ref_context.into(),
        }
    }

    /// The query lacks a base present in the reference
    #[must_use]
    pub fn is_deletion(&self) -> bool {
        self.query_base == GAP
    }

    /// The query carries a base absent from the reference
    #[must_use]
    pub fn is_insertion(&self) -> bool {
        self.ref_base == GAP
    }
}

/// Error taxonomy for a single variant column.
///
/// Variant order is the fixed report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Error within a Dcm methylation site (`CCAGG` / `CCTGG`)
    MethylationMotif,
    /// Deletion inside a reference homopolymer run
    HomopolymerDeletion,
    /// Insertion extending a reference homopolymer run
    HomopolymerInsertion,
    OtherDeletion,
    OtherInsertion,
    Substitution,
}

impl ErrorCategory {
    /// All categories in report order
    pub const ALL: [ErrorCategory; 6] = [
        Self::MethylationMotif,
        Self::HomopolymerDeletion,
        Self::HomopolymerInsertion,
        Self::OtherDeletion,
        Self::OtherInsertion,
        Self::Substitution,
    ];

    /// Short label used in report headers
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::MethylationMotif => "dcm",
            Self::HomopolymerDeletion => "homo del",
            Self::HomopolymerInsertion => "homo ins",
            Self::OtherDeletion => "other del",
            Self::OtherInsertion => "other ins",
            Self::Substitution => "sub",
        }
    }

    /// Position of this category in [`ErrorCategory::ALL`]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order_matches_index() {
        for (i, category) in ErrorCategory::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
        assert_eq!(ErrorCategory::ALL[0].label(), "dcm");
        assert_eq!(ErrorCategory::ALL[5].label(), "sub");
    }

    #[test]
    fn test_variant_column_kind() {
        let deletion = VariantColumn::new(b'A', GAP, "CCAAATT");
        assert!(deletion.is_deletion());
        assert!(!deletion.is_insertion());

        let insertion = VariantColumn::new(GAP, b'A', "CCA.ATT");
        assert!(insertion.is_insertion());

        let sub = VariantColumn::new(b'A', b'G', "CCAAATT");
        assert!(!sub.is_deletion() && !sub.is_insertion());
    }

    #[test]
    fn test_segment_spans() {
        let segment = AlignmentSegment {
            query_start: 10,
            query_end: 40,
            ref_start: 100,
            ref_end: 132,
            matches: 24,
            alignment_block_length: 32,
        };
        assert_eq!(segment.query_span(), 30);
        assert_eq!(segment.ref_span(), 32);
    }
}
