//! Chop command - turn an assembly into fixed-size pseudo-reads.
//!
//! Aligning the pieces and running `identity` on them shows how accuracy is
//! distributed along an assembly.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::parsing::sequences;

#[derive(Args)]
pub struct ChopArgs {
    /// Assembly FASTA (optionally gzipped)
    #[arg(required = true)]
    pub assembly: PathBuf,

    /// Length of each piece; trailing pieces shorter than this are dropped
    #[arg(required = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub piece_size: u64,
}

/// Split a sequence into consecutive pieces of exactly `piece_size` bases
pub fn chop(sequence: &[u8], piece_size: usize) -> impl Iterator<Item = &[u8]> {
    sequence.chunks_exact(piece_size)
}

/// Execute the chop command
///
/// # Errors
///
/// Returns an error if the assembly cannot be read or output cannot be written.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: ChopArgs) -> anyhow::Result<()> {
    let piece_size = usize::try_from(args.piece_size).context("Piece size is too large")?;
    let contigs = sequences::read_fasta(&args.assembly)
        .with_context(|| format!("Failed to read {}", args.assembly.display()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut piece_num = 0usize;

    for contig in &contigs {
        for piece in chop(&contig.sequence, piece_size) {
            piece_num += 1;
            writeln!(out, ">{piece_num}")?;
            out.write_all(piece)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    info!(
        "Wrote {} pieces of {} bp from {} contigs",
        piece_num,
        piece_size,
        contigs.len()
    );

    Ok(())
}
