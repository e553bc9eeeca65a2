use clap::Parser;
use tracing_subscriber::EnvFilter;

mod accuracy;
mod cli;
mod core;
mod parsing;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("align_accuracy=debug,info")
    } else {
        EnvFilter::new("align_accuracy=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Identity(args) => {
            cli::identity::run(args, cli.format)?;
        }
        cli::Commands::Errors(args) => {
            cli::errors::run(args, cli.format)?;
        }
        cli::Commands::Median(args) => {
            cli::median::run(args)?;
        }
        cli::Commands::Chop(args) => {
            cli::chop::run(args)?;
        }
    }

    Ok(())
}
