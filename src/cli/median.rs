use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::accuracy::summary::median_identity;
use crate::parsing::{self, table};

#[derive(Args)]
pub struct MedianArgs {
    /// Read table written by the identity command ('-' for stdin)
    #[arg(required = true)]
    pub table: PathBuf,

    /// Expected total number of sequences; missing ones count as identity 0.
    /// Useful for basecallers that did not basecall every read
    #[arg(long)]
    pub total: Option<usize>,
}

/// Execute the median command
///
/// # Errors
///
/// Returns an error if the table cannot be read or holds no identities.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: MedianArgs) -> anyhow::Result<()> {
    let reader = parsing::open_input(&args.table)
        .with_context(|| format!("Failed to open {}", args.table.display()))?;
    let identities = table::read_identities(reader)
        .with_context(|| format!("Failed to parse {}", args.table.display()))?;
    info!("Table: {} sequences", identities.len());

    let median = median_identity(&identities, args.total)?;
    println!("{}", table::format_float(median));

    Ok(())
}
