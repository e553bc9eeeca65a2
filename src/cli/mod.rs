//! Command-line interface for align-accuracy.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **identity**: Per-read identity and relative length from reads + PAF
//! - **errors**: Error-type rates for one contig pair from show-snps output
//! - **median**: Median identity of a read table
//! - **chop**: Cut an assembly into fixed-size pseudo-reads
//!
//! ## Usage
//!
//! ```text
//! # Score basecalled reads against a reference
//! minimap2 -c reference.fasta reads.fastq.gz > alignments.paf
//! align-accuracy identity reads.fastq.gz alignments.paf > reads.tsv
//!
//! # Summarise a read table, counting 10000 expected reads
//! align-accuracy median reads.tsv --total 10000
//!
//! # Score an assembly as 10 kbp pieces
//! align-accuracy chop assembly.fasta 10000 > pieces.fasta
//!
//! # Classify assembly errors
//! show-snps -ClrTH -x5 ref.filter | align-accuracy errors - chromosome tig00000001
//! ```

use clap::{Parser, Subcommand};

pub mod chop;
pub mod errors;
pub mod identity;
pub mod median;

#[derive(Parser)]
#[command(name = "align-accuracy")]
#[command(version)]
#[command(about = "Score read and assembly accuracy from alignments")]
#[command(
    long_about = "align-accuracy measures how accurate basecalled reads or assemblies are.\n\nFrom alignments against a trusted reference it provides:\n- Per-read identity and relative length, merging split and multi-mapped alignments\n- Error-type rates (Dcm motif, homopolymer and other indels, substitutions)\n- Median identity summaries"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "tsv")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Per-read identity and relative length from a read file and PAF alignments
    Identity(identity::IdentityArgs),

    /// Error-type rates for one contig pair from show-snps output
    Errors(errors::ErrorsArgs),

    /// Median identity of a read table
    Median(median::MedianArgs),

    /// Cut an assembly into fixed-size pseudo-reads
    Chop(chop::ChopArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Tsv,
    Json,
}
