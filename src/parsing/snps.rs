//! Parser for MUMmer `show-snps -ClrTH -x5` output.
//!
//! Each row is one variant column. The fields used here (0-based) are:
//!
//! | Index | Field |
//! |-------|-------|
//! | 1  | Reference base (`.` for an insertion) |
//! | 2  | Query base (`.` for a deletion) |
//! | 7  | Reference sequence length |
//! | 8  | Reference context |
//! | 12 | Reference contig |
//! | 13 | Query contig |

use std::io::BufRead;

use tracing::debug;

use crate::core::types::VariantColumn;
use crate::parsing::ParseError;

/// Minimum number of tab-separated fields in a show-snps row
pub const MIN_SNPS_FIELDS: usize = 14;

/// The reference/query contig pair whose variants are summarised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContigPair {
    pub reference: String,
    pub query: String,
}

/// One parsed show-snps row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnpRecord {
    pub column: VariantColumn,
    pub reference_length: u64,
    pub reference_contig: String,
    pub query_contig: String,
}

/// Variants of one contig pair
#[derive(Debug, Clone, Default)]
pub struct VariantSet {
    /// Reference length from the first matching row, if any matched
    pub reference_length: Option<u64>,
    pub columns: Vec<VariantColumn>,
}

fn single_base(field: &str, label: &str, line_num: usize) -> Result<u8, ParseError> {
    match field.as_bytes() {
        [base] => Ok(*base),
        _ => Err(ParseError::InvalidFormat(format!(
            "Expected a single {label} on show-snps line {line_num}, found '{field}'"
        ))),
    }
}

/// Parse one show-snps row
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` for rows with fewer than
/// [`MIN_SNPS_FIELDS`] fields, multi-character bases, or a bad length.
pub fn parse_snps_line(line: &str, line_num: usize) -> Result<SnpRecord, ParseError> {
    let fields: Vec<&str> = line.trim().split('\t').collect();
    if fields.len() < MIN_SNPS_FIELDS {
        return Err(ParseError::InvalidFormat(format!(
            "show-snps line {line_num} has {} fields, expected at least {MIN_SNPS_FIELDS}",
            fields.len()
        )));
    }

    let reference_length = fields[7].parse().map_err(|_| {
        ParseError::InvalidFormat(format!(
            "Invalid reference length on show-snps line {line_num}: '{}'",
            fields[7]
        ))
    })?;

    Ok(SnpRecord {
        column: VariantColumn::new(
            single_base(fields[1], "reference base", line_num)?,
            single_base(fields[2], "query base", line_num)?,
            fields[8].as_bytes(),
        ),
        reference_length,
        reference_contig: fields[12].to_string(),
        query_contig: fields[13].to_string(),
    })
}

/// Read the variants of one contig pair, ignoring every other pair.
///
/// Blank lines are skipped.
///
/// # Errors
///
/// Returns `ParseError::Io` on read failure and `ParseError::InvalidFormat`
/// for malformed rows.
pub fn read_variants<R: BufRead>(reader: R, pair: &ContigPair) -> Result<VariantSet, ParseError> {
    let mut set = VariantSet::default();
    let mut other_pairs = 0usize;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = parse_snps_line(&line, i + 1)?;
        if record.reference_contig != pair.reference || record.query_contig != pair.query {
            other_pairs += 1;
            continue;
        }

        set.reference_length.get_or_insert(record.reference_length);
        set.columns.push(record.column);
    }

    debug!(
        "Read {} variants for {} vs {}, ignored {} rows from other contigs",
        set.columns.len(),
        pair.reference,
        pair.query,
        other_pairs
    );

    Ok(set)
}
