//! Errors command - classify assembly errors from MUMmer show-snps output.
//!
//! Rates are per reference base, so assemblies of different genomes can be
//! compared directly.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::{info, warn};

use crate::accuracy::classify::{ClassifierConfig, DEFAULT_MIN_HOMOPOLYMER_LENGTH};
use crate::accuracy::tally::{format_rate_line, CategoryRate, ErrorTally};
use crate::cli::OutputFormat;
use crate::parsing;
use crate::parsing::snps::{self, ContigPair};

/// Arguments for the errors command
#[derive(Args)]
pub struct ErrorsArgs {
    /// show-snps -ClrTH -x5 output ('-' for stdin)
    #[arg(required = true)]
    pub snps: PathBuf,

    /// Reference contig to summarise
    #[arg(required = true)]
    pub reference_contig: String,

    /// Query (assembly) contig to summarise
    #[arg(required = true)]
    pub query_contig: String,

    /// Reference length to normalise by, instead of the value in the rows.
    /// Required when the contig pair has no variants at all
    #[arg(long)]
    pub reference_length: Option<u64>,

    /// Shortest reference run counted as a homopolymer
    #[arg(long, default_value_t = DEFAULT_MIN_HOMOPOLYMER_LENGTH)]
    pub min_homopolymer: usize,

    /// Print a header line with category names before the rates
    #[arg(long)]
    pub header: bool,
}

/// Execute the errors command
///
/// # Errors
///
/// Returns an error if the input cannot be read, a row is malformed or has a
/// context too short to classify, or no reference length is known.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: ErrorsArgs, format: OutputFormat) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.min_homopolymer > 0,
        "--min-homopolymer must be at least 1"
    );
    let config = ClassifierConfig {
        min_homopolymer_length: args.min_homopolymer,
        ..ClassifierConfig::default()
    };
    let pair = ContigPair {
        reference: args.reference_contig.clone(),
        query: args.query_contig.clone(),
    };

    let reader = parsing::open_input(&args.snps)
        .with_context(|| format!("Failed to open {}", args.snps.display()))?;
    let variants = snps::read_variants(reader, &pair)
        .with_context(|| format!("Failed to parse {}", args.snps.display()))?;

    let reference_length = match (args.reference_length, variants.reference_length) {
        (Some(given), Some(found)) if given != found => {
            warn!(
                "Using --reference-length {} instead of {} from the input",
                given, found
            );
            given
        }
        (Some(given), _) => given,
        (None, Some(found)) => found,
        (None, None) => anyhow::bail!(
            "No variants found for {} vs {}; pass --reference-length to report zero rates",
            pair.reference,
            pair.query
        ),
    };

    let mut tally = ErrorTally::new();
    for column in &variants.columns {
        tally.classify_and_record(column, &config)?;
    }
    info!(
        "Classified {} variants over {} reference bases",
        tally.total(),
        reference_length
    );

    let rates = tally.rates(reference_length)?;
    match format {
        OutputFormat::Tsv => print_tsv_rates(&rates, args.header),
        OutputFormat::Json => print_json_rates(&pair, reference_length, &rates)?,
    }

    Ok(())
}

fn print_tsv_rates(rates: &[CategoryRate], header: bool) {
    if header {
        let labels: Vec<&str> = rates.iter().map(|r| r.category.label()).collect();
        println!("{}", labels.join("\t"));
    }
    print!("{}", format_rate_line(rates));
}

fn print_json_rates(
    pair: &ContigPair,
    reference_length: u64,
    rates: &[CategoryRate],
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "reference_contig": pair.reference,
        "query_contig": pair.query,
        "reference_length": reference_length,
        "categories": rates,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
