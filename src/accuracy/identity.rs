use tracing::debug;

use crate::accuracy::{count_to_f64, length_to_f64, AccuracyError};
use crate::core::types::{AlignmentSegment, ReadAccuracy};

/// Default fraction of a read that must be covered for it to count as aligned
pub const DEFAULT_MIN_ALIGNED_FRACTION: f64 = 0.5;

/// Configuration for identity reconciliation
#[derive(Debug, Clone)]
pub struct ReconcileConfig {
    /// A read is unaligned when its uncovered bases exceed
    /// `length * (1 - min_aligned_fraction)`
    pub min_aligned_fraction: f64,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            min_aligned_fraction: DEFAULT_MIN_ALIGNED_FRACTION,
        }
    }
}

impl ReconcileConfig {
    /// Largest number of uncovered bases an aligned read may have
    fn max_unaligned(&self, read_length: usize) -> f64 {
        count_to_f64(read_length) * (1.0 - self.min_aligned_fraction)
    }
}

/// Identity of a single segment as a percentage
///
/// # Errors
///
/// Returns `AccuracyError::EmptyAlignmentBlock` for a zero-length block and
/// `AccuracyError::MatchesExceedBlock` when matches outnumber block columns.
pub fn segment_identity(name: &str, segment: &AlignmentSegment) -> Result<f64, AccuracyError> {
    if segment.alignment_block_length == 0 {
        return Err(AccuracyError::EmptyAlignmentBlock(name.to_string()));
    }
    if segment.matches > segment.alignment_block_length {
        return Err(AccuracyError::MatchesExceedBlock {
            name: name.to_string(),
            matches: segment.matches,
            block_length: segment.alignment_block_length,
        });
    }
    Ok(100.0 * length_to_f64(segment.matches) / length_to_f64(segment.alignment_block_length))
}

/// Reconcile all segments of one read using the default configuration.
///
/// # Errors
///
/// See [`reconcile_with_config`].
pub fn reconcile(
    name: impl Into<String>,
    read_length: usize,
    segments: &[AlignmentSegment],
) -> Result<ReadAccuracy, AccuracyError> {
    reconcile_with_config(name, read_length, segments, &ReconcileConfig::default())
}

/// Reconcile all segments of one read into a single identity and relative length.
///
/// Every query base takes the highest identity of any segment covering it.
/// If more than `length * (1 - min_aligned_fraction)` bases stay uncovered the
/// read is unaligned (identity `0.0`, no relative length). Otherwise identity is
/// the mean over covered bases only, and relative length is the summed query
/// span over the summed reference span of all segments, overlaps included.
///
/// # Errors
///
/// Returns `AccuracyError::EmptyRead` for a zero read length,
/// `AccuracyError::SegmentOutOfRange` for a segment outside the read,
/// `AccuracyError::EmptyAlignmentBlock` / `AccuracyError::MatchesExceedBlock`
/// for malformed blocks, and `AccuracyError::EmptyReferenceSpan` when an
/// aligned read covers no reference bases.
pub fn reconcile_with_config(
    name: impl Into<String>,
    read_length: usize,
    segments: &[AlignmentSegment],
    config: &ReconcileConfig,
) -> Result<ReadAccuracy, AccuracyError> {
    let name = name.into();
    if read_length == 0 {
        return Err(AccuracyError::EmptyRead(name));
    }

    let mut identity_by_base = vec![0.0_f64; read_length];
    let mut total_query_span = 0usize;
    let mut total_ref_span = 0u64;

    for segment in segments {
        if segment.query_start >= segment.query_end || segment.query_end > read_length {
            return Err(AccuracyError::SegmentOutOfRange {
                name,
                start: segment.query_start,
                end: segment.query_end,
                length: read_length,
            });
        }
        let identity = segment_identity(&name, segment)?;

        for tracked in &mut identity_by_base[segment.query_start..segment.query_end] {
            if identity > *tracked {
                *tracked = identity;
            }
        }

        total_query_span += segment.query_span();
        total_ref_span += segment.ref_span();
    }

    let (covered_sum, covered_count) = identity_by_base
        .iter()
        .filter(|&&value| value > 0.0)
        .fold((0.0_f64, 0usize), |(sum, count), &value| {
            (sum + value, count + 1)
        });
    let unaligned = read_length - covered_count;

    let identity = if covered_count == 0 || count_to_f64(unaligned) > config.max_unaligned(read_length)
    {
        0.0
    } else {
        covered_sum / count_to_f64(covered_count)
    };

    let relative_length = if identity > 0.0 {
        if total_ref_span == 0 {
            return Err(AccuracyError::EmptyReferenceSpan(name));
        }
        Some(100.0 * count_to_f64(total_query_span) / length_to_f64(total_ref_span))
    } else {
        None
    };

    debug!(
        "{}: {} segments, {} of {} bases unaligned, identity {:.3}",
        name,
        segments.len(),
        unaligned,
        read_length,
        identity
    );

    Ok(ReadAccuracy {
        name,
        length: read_length,
        identity,
        relative_length,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(
        query_start: usize,
        query_end: usize,
        matches: u64,
        alignment_block_length: u64,
    ) -> AlignmentSegment {
        AlignmentSegment {
            query_start,
            query_end,
            ref_start: query_start as u64,
            ref_end: query_end as u64,
            matches,
            alignment_block_length,
        }
    }

    #[test]
    fn test_single_full_segment() {
        let result = reconcile("read", 100, &[segment(0, 100, 95, 100)]).unwrap();
        assert!((result.identity - 95.0).abs() < 1e-9);
        assert_eq!(result.relative_length, Some(100.0));
        assert_eq!(result.length, 100);
        assert_eq!(result.name, "read");
    }

    #[test]
    fn test_no_segments_is_unaligned() {
        let result = reconcile("read", 100, &[]).unwrap();
        assert_eq!(result.identity, 0.0);
        assert!(result.relative_length.is_none());
        assert!(!result.is_aligned());
    }

    #[test]
    fn test_minority_coverage_is_unaligned() {
        // 30 bases covered, 70 unaligned > 50
        let result = reconcile("read", 100, &[segment(10, 40, 24, 30)]).unwrap();
        assert_eq!(result.identity, 0.0);
        assert!(result.relative_length.is_none());
    }

    #[test]
    fn test_uniform_coverage_collapses_to_constant() {
        let segments = [segment(0, 60, 48, 60), segment(40, 100, 48, 60)];
        let result = reconcile("read", 100, &segments).unwrap();
        assert!((result.identity - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_unaligned_threshold_is_strict() {
        // Odd length: ceil(11/2) = 6 unaligned -> unaligned
        let result = reconcile("read", 11, &[segment(0, 5, 5, 5)]).unwrap();
        assert_eq!(result.identity, 0.0);

        // floor(11/2) = 5 unaligned -> aligned
        let result = reconcile("read", 11, &[segment(0, 6, 6, 6)]).unwrap();
        assert!((result.identity - 100.0).abs() < 1e-9);

        // Even length: exactly half unaligned is still aligned
        let result = reconcile("read", 10, &[segment(0, 5, 4, 5)]).unwrap();
        assert!((result.identity - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_overlap_takes_maximum() {
        // 0..60 at 70%, 40..100 at 90%; overlap 40..60 must be 90
        let segments = [segment(0, 60, 42, 60), segment(40, 100, 54, 60)];
        let result = reconcile("read", 100, &segments).unwrap();
        let expected = (40.0 * 70.0 + 60.0 * 90.0) / 100.0;
        assert!((result.identity - expected).abs() < 1e-9);

        // Same result regardless of segment order
        let reversed = [segments[1], segments[0]];
        let result = reconcile("read", 100, &reversed).unwrap();
        assert!((result.identity - expected).abs() < 1e-9);
    }

    #[test]
    fn test_mean_excludes_unaligned_bases() {
        // 60 bases at 90%, 40 uncovered: identity is 90, not 54
        let result = reconcile("read", 100, &[segment(0, 60, 90, 100)]).unwrap();
        assert!((result.identity - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_relative_length_counts_overlaps() {
        let segments = [
            AlignmentSegment {
                query_start: 0,
                query_end: 100,
                ref_start: 0,
                ref_end: 80,
                matches: 90,
                alignment_block_length: 100,
            },
            AlignmentSegment {
                query_start: 0,
                query_end: 100,
                ref_start: 500,
                ref_end: 580,
                matches: 90,
                alignment_block_length: 100,
            },
        ];
        let result = reconcile("read", 100, &segments).unwrap();
        assert_eq!(result.relative_length, Some(125.0));
    }

    #[test]
    fn test_zero_length_block_fails() {
        let err = reconcile("read", 100, &[segment(0, 100, 0, 0)]).unwrap_err();
        assert_eq!(err, AccuracyError::EmptyAlignmentBlock("read".to_string()));
    }

    #[test]
    fn test_segment_outside_read_fails() {
        let err = reconcile("read", 50, &[segment(0, 60, 60, 60)]).unwrap_err();
        assert!(matches!(err, AccuracyError::SegmentOutOfRange { .. }));
    }

    #[test]
    fn test_zero_read_length_fails() {
        assert!(reconcile("read", 0, &[]).is_err());
    }

    #[test]
    fn test_aligned_read_without_reference_span_fails() {
        let segments = [AlignmentSegment {
            query_start: 0,
            query_end: 100,
            ref_start: 10,
            ref_end: 10,
            matches: 90,
            alignment_block_length: 100,
        }];
        let err = reconcile("read", 100, &segments).unwrap_err();
        assert_eq!(err, AccuracyError::EmptyReferenceSpan("read".to_string()));
    }

    #[test]
    fn test_custom_aligned_fraction() {
        let config = ReconcileConfig {
            min_aligned_fraction: 0.25,
        };
        let result =
            reconcile_with_config("read", 100, &[segment(10, 40, 24, 30)], &config).unwrap();
        assert!((result.identity - 80.0).abs() < 1e-9);
    }
}
