use std::path::PathBuf;

use clap::Args;

use crate::cli::{run_files, RunOptions};
use crate::core::types::Organism;
use crate::loading::descriptions::AnnotationShape;
use crate::pipeline::ingest_tsv;

#[derive(Args)]
pub struct TsvArgs {
    /// TAIR gene tables. Files are routed by name: `gene_aliases_*` or
    /// `Araport11_functional_descriptions_*`; other files are skipped
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// How functional descriptions are stored
    #[arg(long, value_enum, default_value = "decorate")]
    pub shape: AnnotationShape,
}

/// Execute tsv subcommand
///
/// Each file is loaded in its own session, so a gene named in both an alias
/// file and a description file is written once per file.
///
/// # Errors
///
/// Returns an error if a routed file cannot be loaded or the output cannot be
/// written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: TsvArgs, options: &RunOptions) -> anyhow::Result<()> {
    run_files(&args.inputs, options, |path, sink| {
        ingest_tsv(path, args.shape, Organism::default(), sink)
    })
}
