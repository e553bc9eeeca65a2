//! Compression and sequence-format detection from file content.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::parsing::ParseError;

/// Compression detected from the leading magic bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    Plain,
    Gzip,
    Bzip2,
    Zip,
}

/// Sequence file type detected from the first character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceFormat {
    Fasta,
    Fastq,
}

impl Compression {
    /// Classify a file from its first bytes
    #[must_use]
    pub fn from_magic(start: &[u8]) -> Self {
        if start.starts_with(&[0x1f, 0x8b, 0x08]) {
            Compression::Gzip
        } else if start.starts_with(b"BZh") {
            Compression::Bzip2
        } else if start.starts_with(b"PK\x03\x04") {
            Compression::Zip
        } else {
            Compression::Plain
        }
    }
}

/// Detect compression by reading the first few bytes of a file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read.
pub fn detect_compression(path: &Path) -> Result<Compression, ParseError> {
    let mut start = Vec::with_capacity(4);
    File::open(path)?.take(4).read_to_end(&mut start)?;
    Ok(Compression::from_magic(&start))
}

/// Open a file, transparently decompressing gzip (including bgzip)
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened, or
/// `ParseError::UnsupportedFormat` for bzip2 and zip files.
pub fn open_decompressed(path: &Path) -> Result<Box<dyn BufRead>, ParseError> {
    match detect_compression(path)? {
        Compression::Plain => Ok(Box::new(BufReader::new(File::open(path)?))),
        Compression::Gzip => Ok(Box::new(BufReader::new(MultiGzDecoder::new(File::open(
            path,
        )?)))),
        Compression::Bzip2 => Err(ParseError::UnsupportedFormat(format!(
            "{}: bzip2 is not supported, use gzip instead",
            path.display()
        ))),
        Compression::Zip => Err(ParseError::UnsupportedFormat(format!(
            "{}: zip is not supported, use gzip instead",
            path.display()
        ))),
    }
}

/// Peek at the first byte of a reader to tell FASTA from FASTQ
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if the content starts with neither `>`
/// nor `@`, including empty input.
pub fn detect_sequence_format<R: BufRead>(reader: &mut R) -> Result<SequenceFormat, ParseError> {
    let buffer = reader.fill_buf()?;
    match buffer.first() {
        Some(b'>') => Ok(SequenceFormat::Fasta),
        Some(b'@') => Ok(SequenceFormat::Fastq),
        _ => Err(ParseError::InvalidFormat(
            "File is neither FASTA nor FASTQ".to_string(),
        )),
    }
}
