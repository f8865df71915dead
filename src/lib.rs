//! # bar-loader
//!
//! A library for loading *Arabidopsis thaliana* annotation files into typed,
//! cross-referenced knowledge base entities.
//!
//! Annotation for Arabidopsis is spread over several loosely-typed sources:
//! Araport11 and RefSeq GFF3 feature tables, TAIR gene alias and functional
//! description tables, and NCBI chromosome FASTA files. `bar-loader` turns each
//! raw record into an entity of a fixed class vocabulary, sharing publication
//! and protein entities between the features that cite them.
//!
//! ## Features
//!
//! - **Table-driven classification**: GFF3 type tags map to feature classes through a static table per source
//! - **Cross-reference resolution**: `PMID:` and `UniProt:` references become one shared entity per key
//! - **Alias aggregation**: consecutive alias rows for a gene are merged into one list
//! - **First-wins annotations**: one functional description bundle per gene
//! - **Chromosome headers**: FASTA definition lines map to `Chr1`..`Chr5`, `ChrM` and `ChrC`
//! - **Atomic files**: nothing from a file that fails to load reaches the store
//!
//! ## Example
//!
//! ```rust,no_run
//! use bar_loader::{FeatureClassifier, Organism, Source, SourceProfile};
//! use bar_loader::pipeline::ingest_gff;
//! use bar_loader::store::JsonLinesSink;
//! use std::path::Path;
//!
//! let classifier = FeatureClassifier::new(SourceProfile::for_source(Source::Tair));
//! let mut sink = JsonLinesSink::new(std::io::stdout());
//!
//! let report = ingest_gff(
//!     Path::new("Araport11_GFF3_genes_transposons.current.gff"),
//!     &classifier,
//!     Organism::default(),
//!     &mut sink,
//! )
//! .unwrap();
//!
//! for (class, count) in &report.emitted {
//!     println!("{class}: {count}");
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Entity types and the feature class vocabulary
//! - [`classify`]: Feature classifier, cross-reference resolver and FASTA header classifier
//! - [`loading`]: Alias aggregator and functional description loader
//! - [`session`]: Per-file caches shared by the components
//! - [`parsing`]: GFF3, TSV and FASTA readers
//! - [`pipeline`]: Per-file ingestion with buffered commits
//! - [`store`]: Entity sinks
//! - [`cli`]: Command-line interface implementation

pub mod classify;
pub mod cli;
pub mod core;
pub mod loading;
pub mod parsing;
pub mod pipeline;
pub mod session;
pub mod store;
pub mod utils;

// Re-export commonly used types for convenience
pub use classify::feature::{Classification, DropReason, FeatureClassifier};
pub use classify::profile::{Source, SourceProfile};
pub use core::entity::Entity;
pub use core::types::*;
pub use pipeline::{FileReport, IngestError};
pub use session::Session;
