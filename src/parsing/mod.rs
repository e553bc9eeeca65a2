//! Parsers that turn external tool output into engine inputs.
//!
//! This module provides parsers for:
//!
//! - **Sequence files**: FASTA/FASTQ read names and lengths (plain or gzip)
//! - **PAF files**: minimap2-style alignment rows grouped per read
//! - **show-snps output**: MUMmer variant rows for one contig pair
//! - **Read tables**: the identity table written by `align-accuracy identity`
//!
//! ## Example
//!
//! ```rust,no_run
//! use align_accuracy::parsing::{open_input, paf, sequences};
//! use std::path::Path;
//!
//! let lengths = sequences::read_lengths(Path::new("reads.fastq.gz")).unwrap();
//! let reader = open_input(Path::new("alignments.paf")).unwrap();
//! let alignments = paf::collect_segments(reader, &lengths).unwrap();
//! ```
//!
//! ## PAF Columns
//!
//! | Column | Field | Used |
//! |--------|-------|------|
//! | 1  | Query name | Yes |
//! | 2  | Query length | Yes |
//! | 3  | Query start | Yes |
//! | 4  | Query end | Yes |
//! | 5  | Strand | No |
//! | 6  | Target name | No |
//! | 7  | Target length | No |
//! | 8  | Target start | Yes |
//! | 9  | Target end | Yes |
//! | 10 | Matching bases | Yes |
//! | 11 | Alignment block length | Yes |

use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

pub mod format;
pub mod paf;
pub mod sequences;
pub mod snps;
pub mod table;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Read '{name}' has length {alignment_length} in the alignments but {sequence_length} in the sequence file")]
    LengthMismatch {
        name: String,
        alignment_length: usize,
        sequence_length: usize,
    },

    #[error("Read '{0}' appears in the alignments but not in the sequence file")]
    UnknownRead(String),
}

/// Open a plain or gzip-compressed input, or stdin for `-`
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened and
/// `ParseError::UnsupportedFormat` for bzip2 or zip input.
pub fn open_input(path: &Path) -> Result<Box<dyn BufRead>, ParseError> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(BufReader::new(std::io::stdin())));
    }
    format::open_decompressed(path)
}
