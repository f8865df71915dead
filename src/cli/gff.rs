use std::path::PathBuf;

use clap::Args;

use crate::classify::feature::FeatureClassifier;
use crate::classify::profile::{Source, SourceProfile};
use crate::cli::{run_files, RunOptions};
use crate::core::types::{Organism, ARABIDOPSIS_TAXON_ID};
use crate::pipeline::ingest_gff;

#[derive(Args)]
pub struct GffArgs {
    /// GFF3 files (plain or gzip compressed)
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Annotation source; selects the type table and identifier rules
    #[arg(short, long, value_enum, default_value = "tair")]
    pub source: Source,

    /// Sequence ID prefix of the chromosomes to load (default: `Chr` for
    /// TAIR, `NC_` for NCBI)
    #[arg(long)]
    pub chromosome_prefix: Option<String>,

    /// NCBI taxonomy ID attached to created proteins
    #[arg(long, default_value_t = ARABIDOPSIS_TAXON_ID)]
    pub taxon_id: u32,
}

/// Execute gff subcommand
///
/// # Errors
///
/// Returns an error if a file cannot be loaded or the output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: GffArgs, options: &RunOptions) -> anyhow::Result<()> {
    let mut profile = SourceProfile::for_source(args.source);
    if let Some(prefix) = &args.chromosome_prefix {
        profile = profile.with_chromosome_prefix(prefix.as_str());
    }

    let classifier = FeatureClassifier::new(profile);
    let organism = Organism::new(args.taxon_id);

    run_files(&args.inputs, options, |path, sink| {
        ingest_gff(path, &classifier, organism, sink)
    })
}
