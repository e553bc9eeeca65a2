use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::accuracy::identity::{reconcile_with_config, ReconcileConfig};
use crate::accuracy::summary::mean_aligned_identity;
use crate::cli::OutputFormat;
use crate::core::types::ReadAccuracy;
use crate::parsing::{self, paf, sequences, table};

#[derive(Args)]
pub struct IdentityArgs {
    /// Read or assembly-piece file (FASTA or FASTQ, optionally gzipped)
    #[arg(required = true)]
    pub reads: PathBuf,

    /// PAF alignments of the reads against the reference ('-' for stdin)
    #[arg(required = true)]
    pub alignments: PathBuf,

    /// Fraction of a read that must be aligned for it to be scored.
    /// Reads with less coverage get identity 0
    #[arg(long, default_value = "0.5", value_parser = parse_fraction)]
    pub min_aligned_fraction: f64,
}

fn parse_fraction(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is not between 0 and 1"))
    }
}

/// Execute the identity command
///
/// # Errors
///
/// Returns an error if either input cannot be parsed, if the PAF disagrees
/// with the read file, or if an alignment row is malformed.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: IdentityArgs, format: OutputFormat) -> anyhow::Result<()> {
    let config = ReconcileConfig {
        min_aligned_fraction: args.min_aligned_fraction,
    };

    let read_lengths = sequences::read_lengths(&args.reads)
        .with_context(|| format!("Failed to read {}", args.reads.display()))?;
    info!("Reads: {} sequences", read_lengths.len());

    let reader = parsing::open_input(&args.alignments)
        .with_context(|| format!("Failed to open {}", args.alignments.display()))?;
    let mut alignments = paf::collect_segments(reader, &read_lengths)
        .with_context(|| format!("Failed to parse {}", args.alignments.display()))?;

    // One identity track at a time; each read's segments are dropped once scored
    let mut rows = Vec::with_capacity(read_lengths.len());
    for (name, &length) in &read_lengths {
        let segments = alignments.remove(name).unwrap_or_default();
        rows.push(reconcile_with_config(name.as_str(), length, &segments, &config)?);
    }

    let identities: Vec<f64> = rows.iter().map(|r| r.identity).collect();
    let aligned = rows.iter().filter(|r| r.is_aligned()).count();
    info!(
        "Aligned reads: {} of {} (mean identity {})",
        aligned,
        rows.len(),
        mean_aligned_identity(&identities).map_or_else(|| "n/a".to_string(), |m| format!("{m:.3}"))
    );

    match format {
        OutputFormat::Tsv => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            table::write_read_table(&mut out, &rows)?;
            out.flush()?;
        }
        OutputFormat::Json => print_json_rows(&rows)?,
    }

    Ok(())
}

fn print_json_rows(rows: &[ReadAccuracy]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(rows)?);
    Ok(())
}
