use std::path::PathBuf;

use clap::Args;

use crate::cli::{run_files, RunOptions};
use crate::pipeline::ingest_fasta;

#[derive(Args)]
pub struct FastaArgs {
    /// NCBI FASTA files (plain or gzip compressed)
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,
}

/// Execute fasta subcommand
///
/// # Errors
///
/// Returns an error if a header names no known chromosome, a file cannot be
/// read, or the output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: FastaArgs, options: &RunOptions) -> anyhow::Result<()> {
    run_files(&args.inputs, options, |path, sink| ingest_fasta(path, sink))
}
