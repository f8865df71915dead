use clap::Parser;
use tracing_subscriber::EnvFilter;

mod classify;
mod cli;
mod core;
mod loading;
mod parsing;
mod pipeline;
mod session;
mod store;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("bar_loader=debug,info")
    } else {
        EnvFilter::new("bar_loader=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let options = cli::RunOptions::from(&cli);

    match cli.command {
        cli::Commands::Gff(args) => {
            cli::gff::run(args, &options)?;
        }
        cli::Commands::Tsv(args) => {
            cli::tsv::run(args, &options)?;
        }
        cli::Commands::Fasta(args) => {
            cli::fasta::run(args, &options)?;
        }
    }

    Ok(())
}
