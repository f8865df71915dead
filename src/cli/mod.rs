//! Command-line interface for bar-loader.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **gff**: Load TAIR or NCBI GFF3 feature tables
//! - **tsv**: Load TAIR gene alias and functional description tables
//! - **fasta**: Load NCBI chromosome sequences as chromosome entities
//!
//! Entities are written as JSON lines to `--output` (stdout by default). A
//! per-file summary is printed to stderr.
//!
//! ## Usage
//!
//! ```text
//! # Load the Araport11 annotation
//! bar-loader gff --source tair Araport11_GFF3_genes_transposons.current.gff.gz -o entities.jsonl
//!
//! # Load the RefSeq annotation, keeping going past broken files
//! bar-loader --keep-going gff --source ncbi GCF_000001735.4_TAIR10.1_genomic.gff
//!
//! # Gene tables are routed by file name
//! bar-loader tsv gene_aliases_20240331.txt Araport11_functional_descriptions_20240331.txt
//!
//! # JSON run summary
//! bar-loader --format json fasta GCF_000001735.4_TAIR10.1_genomic.fna
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::error;

use crate::pipeline::{FileReport, IngestError};
use crate::store::{EntitySink, JsonLinesSink};

pub mod fasta;
pub mod gff;
pub mod tsv;

#[derive(Parser)]
#[command(name = "bar-loader")]
#[command(version)]
#[command(about = "Load Arabidopsis annotation files into typed knowledge base entities")]
#[command(
    long_about = "bar-loader converts TAIR/Araport11 and NCBI RefSeq annotation files into typed, cross-referenced entities.\n\nEach input file is loaded in its own session; entities from a file are only written once the whole file loaded without error."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Run summary format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Entity output file (JSON lines, stdout if omitted)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Continue with the next file when a file fails to load
    #[arg(long, global = true)]
    pub keep_going: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load GFF3 feature tables
    Gff(gff::GffArgs),

    /// Load TAIR gene alias and functional description tables
    Tsv(tsv::TsvArgs),

    /// Load chromosomes from an NCBI FASTA file
    Fasta(fasta::FastaArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Options shared by all subcommands
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub keep_going: bool,
}

impl From<&Cli> for RunOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            output: cli.output.clone(),
            keep_going: cli.keep_going,
        }
    }
}

#[derive(Debug, Serialize)]
struct FailedFile {
    path: String,
    error: String,
}

#[derive(Debug, Serialize)]
struct RunSummary<'a> {
    files: &'a [FileReport],
    failed: &'a [FailedFile],
}

fn open_output(output: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Load each input with `ingest`, then print the run summary.
///
/// Without `--keep-going` the first failing file stops the run. With it the
/// failure is logged, later files are still loaded, and the run fails at the
/// end.
///
/// # Errors
///
/// Returns an error if the output cannot be opened or any file failed.
pub(crate) fn run_files<F>(
    inputs: &[PathBuf],
    options: &RunOptions,
    mut ingest: F,
) -> anyhow::Result<()>
where
    F: FnMut(&Path, &mut dyn EntitySink) -> Result<FileReport, IngestError>,
{
    let mut sink = JsonLinesSink::new(open_output(options.output.as_deref())?);
    let mut reports = Vec::with_capacity(inputs.len());
    let mut failed = Vec::new();

    for path in inputs {
        match ingest(path, &mut sink) {
            Ok(report) => reports.push(report),
            Err(e) if options.keep_going => {
                error!(file = %path.display(), error = %e, "file aborted; nothing from it was written");
                failed.push(FailedFile {
                    path: path.display().to_string(),
                    error: e.to_string(),
                });
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to load {}", path.display()));
            }
        }
    }

    print_summary(&reports, &failed, options.format)?;

    if !failed.is_empty() {
        anyhow::bail!("{} of {} files failed to load", failed.len(), inputs.len());
    }
    Ok(())
}

fn print_summary(
    reports: &[FileReport],
    failed: &[FailedFile],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for report in reports {
                print_text_report(report);
            }
            for failure in failed {
                eprintln!("{}: FAILED: {}", failure.path, failure.error);
            }
        }
        OutputFormat::Json => {
            let summary = RunSummary {
                files: reports,
                failed,
            };
            eprintln!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}

fn print_text_report(report: &FileReport) {
    if let Some(diagnostic) = report.diagnostic {
        eprintln!("{}: skipped ({diagnostic:?})", report.path);
        return;
    }

    eprintln!(
        "{}: read {} records, emitted {} entities",
        report.path,
        report.records_read,
        report.total_emitted()
    );
    for (class, count) in &report.emitted {
        eprintln!("  {class:<28} {count}");
    }
    for (reason, count) in &report.dropped {
        eprintln!("  dropped {reason:<20} {count}");
    }
    if report.rows_skipped > 0 {
        eprintln!("  rows skipped                 {}", report.rows_skipped);
    }
    if report.rows_ignored > 0 {
        eprintln!("  duplicate rows ignored       {}", report.rows_ignored);
    }
}
