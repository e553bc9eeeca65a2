//! Sequence names and lengths from FASTA/FASTQ files using noodles.
//!
//! The format is detected from the first character (`>` or `@`) and the
//! compression from magic bytes, so file extensions do not matter.
//! Names are the first word of the header line.

use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;

use noodles::{fasta, fastq};
use tracing::warn;

use crate::parsing::format::{detect_sequence_format, open_decompressed, SequenceFormat};
use crate::parsing::ParseError;

/// A named sequence held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedSequence {
    pub name: String,
    pub sequence: Vec<u8>,
}

/// Read every sequence length in a FASTA or FASTQ file, keyed by name.
///
/// Later records replace earlier ones with the same name.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read,
/// `ParseError::UnsupportedFormat` for bzip2/zip input,
/// `ParseError::InvalidFormat` if it is neither FASTA nor FASTQ, or
/// `ParseError::Noodles` if a record is malformed.
pub fn read_lengths(path: &Path) -> Result<BTreeMap<String, usize>, ParseError> {
    let reader = open_decompressed(path)?;
    read_lengths_from_reader(reader)
}

/// Read sequence lengths from an already-opened reader
///
/// # Errors
///
/// See [`read_lengths`].
pub fn read_lengths_from_reader<R: BufRead>(
    mut reader: R,
) -> Result<BTreeMap<String, usize>, ParseError> {
    let mut lengths = BTreeMap::new();
    let mut insert = |name: String, length: usize| {
        if lengths.insert(name.clone(), length).is_some() {
            warn!("Duplicate sequence name '{}', keeping the last record", name);
        }
    };

    match detect_sequence_format(&mut reader)? {
        SequenceFormat::Fasta => {
            let mut fasta_reader = fasta::io::Reader::new(reader);
            for result in fasta_reader.records() {
                let record = result.map_err(|e| {
                    ParseError::Noodles(format!("Failed to parse FASTA record: {e}"))
                })?;
                insert(
                    String::from_utf8_lossy(record.name()).to_string(),
                    record.sequence().len(),
                );
            }
        }
        SequenceFormat::Fastq => {
            let mut fastq_reader = fastq::io::Reader::new(reader);
            for result in fastq_reader.records() {
                let record = result.map_err(|e| {
                    ParseError::Noodles(format!("Failed to parse FASTQ record: {e}"))
                })?;
                insert(
                    String::from_utf8_lossy(record.name()).to_string(),
                    record.sequence().len(),
                );
            }
        }
    }

    Ok(lengths)
}

/// Read all sequences of a FASTA file in file order
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` for FASTQ or unrecognised input, and
/// the same I/O and noodles errors as [`read_lengths`].
pub fn read_fasta(path: &Path) -> Result<Vec<NamedSequence>, ParseError> {
    let mut reader = open_decompressed(path)?;
    if detect_sequence_format(&mut reader)? != SequenceFormat::Fasta {
        return Err(ParseError::InvalidFormat(format!(
            "{} is not a FASTA file",
            path.display()
        )));
    }

    let mut fasta_reader = fasta::io::Reader::new(reader);
    let mut sequences = Vec::new();
    for result in fasta_reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;
        sequences.push(NamedSequence {
            name: String::from_utf8_lossy(record.name()).to_string(),
            sequence: record.sequence().as_ref().to_vec(),
        });
    }

    Ok(sequences)
}
