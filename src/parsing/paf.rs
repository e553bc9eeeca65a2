use std::collections::{BTreeMap, HashMap};
use std::io::BufRead;

use tracing::debug;

use crate::core::types::AlignmentSegment;
use crate::parsing::ParseError;

/// Minimum number of tab-separated fields in a usable PAF row
pub const MIN_PAF_FIELDS: usize = 11;

/// The fields of one PAF row that matter for accuracy scoring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PafRecord {
    pub query_name: String,
    pub query_length: usize,
    pub target_name: String,
    pub segment: AlignmentSegment,
}

/// Parse one PAF line.
///
/// Returns `Ok(None)` for rows with fewer than [`MIN_PAF_FIELDS`] fields, which
/// incomplete aligner output can produce.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if a required numeric field does not parse.
pub fn parse_paf_line(line: &str, line_num: usize) -> Result<Option<PafRecord>, ParseError> {
    let fields: Vec<&str> = line.trim().split('\t').collect();
    if fields.len() < MIN_PAF_FIELDS {
        return Ok(None);
    }

    let number = |index: usize, label: &str| -> Result<u64, ParseError> {
        fields[index].parse().map_err(|_| {
            ParseError::InvalidFormat(format!(
                "Invalid {label} on PAF line {line_num}: '{}'",
                fields[index]
            ))
        })
    };
    let offset = |index: usize, label: &str| -> Result<usize, ParseError> {
        fields[index].parse().map_err(|_| {
            ParseError::InvalidFormat(format!(
                "Invalid {label} on PAF line {line_num}: '{}'",
                fields[index]
            ))
        })
    };

    Ok(Some(PafRecord {
        query_name: fields[0].to_string(),
        query_length: offset(1, "query length")?,
        target_name: fields[5].to_string(),
        segment: AlignmentSegment {
            query_start: offset(2, "query start")?,
            query_end: offset(3, "query end")?,
            ref_start: number(7, "target start")?,
            ref_end: number(8, "target end")?,
            matches: number(9, "match count")?,
            alignment_block_length: number(10, "alignment block length")?,
        },
    }))
}

/// Group PAF segments by read, checking each read against the sequence file.
///
/// Short rows are skipped. Reads without any usable row are absent from the
/// result.
///
/// # Errors
///
/// Returns `ParseError::UnknownRead` for a read missing from `read_lengths`,
/// `ParseError::LengthMismatch` when the PAF length disagrees with the
/// sequence file, and `ParseError::InvalidFormat` for unparseable numbers.
pub fn collect_segments<R: BufRead>(
    reader: R,
    read_lengths: &BTreeMap<String, usize>,
) -> Result<HashMap<String, Vec<AlignmentSegment>>, ParseError> {
    let mut segments: HashMap<String, Vec<AlignmentSegment>> = HashMap::new();
    let mut skipped = 0usize;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let Some(record) = parse_paf_line(&line, i + 1)? else {
            skipped += 1;
            continue;
        };

        let sequence_length = *read_lengths
            .get(&record.query_name)
            .ok_or_else(|| ParseError::UnknownRead(record.query_name.clone()))?;
        if sequence_length != record.query_length {
            return Err(ParseError::LengthMismatch {
                name: record.query_name,
                alignment_length: record.query_length,
                sequence_length,
            });
        }

        segments
            .entry(record.query_name)
            .or_default()
            .push(record.segment);
    }

    debug!(
        "Collected alignments for {} reads, skipped {} short PAF rows",
        segments.len(),
        skipped
    );

    Ok(segments)
}
