use std::io::{BufRead, Write};

use crate::core::types::ReadAccuracy;
use crate::parsing::ParseError;

/// Column names of the read accuracy table
pub const TABLE_HEADER: [&str; 4] = ["Name", "Length", "Identity", "Relative length"];

/// Format a float the way the table has always been written: shortest
/// round-trip digits, with `.0` kept on integral values
#[must_use]
pub fn format_float(value: f64) -> String {
    format!("{value:?}")
}

/// Write the read accuracy table, one row per read in the given order
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_read_table<W: Write>(writer: &mut W, rows: &[ReadAccuracy]) -> std::io::Result<()> {
    writeln!(writer, "{}", TABLE_HEADER.join("\t"))?;
    for row in rows {
        let relative_length = row.relative_length.map(format_float).unwrap_or_default();
        writeln!(
            writer,
            "{}\t{}\t{}\t{}",
            row.name,
            row.length,
            format_float(row.identity),
            relative_length
        )?;
    }
    Ok(())
}

/// Read the identity column from a read accuracy table.
///
/// Fields are whitespace-separated; the header row (first field `Name`) and
/// blank lines are skipped.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` for rows with fewer than three fields or
/// a non-numeric identity.
pub fn read_identities<R: BufRead>(reader: R) -> Result<Vec<f64>, ParseError> {
    let mut identities = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.first() {
            None => continue,
            Some(&"Name") => continue,
            Some(_) => {}
        }

        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;
        if fields.len() < 3 {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has fewer than 3 fields"
            )));
        }
        let identity: f64 = fields[2].parse().map_err(|_| {
            ParseError::InvalidFormat(format!(
                "Invalid identity on line {}: '{}'",
                line_num, fields[2]
            ))
        })?;
        identities.push(identity);
    }

    Ok(identities)
}
