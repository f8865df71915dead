//! Readers that turn input files into records for the classifiers and loaders.
//!
//! This module provides readers for:
//!
//! - **GFF3 files**: via noodles, one [`RawFeatureRecord`](crate::core::feature::RawFeatureRecord) per feature line
//! - **TSV files**: tab-separated rows with the header row skipped
//! - **FASTA files**: definition line and sequence length per record, via noodles
//!
//! All readers accept plain or gzip/bgzip compressed input.
//!
//! ## Example
//!
//! ```rust,no_run
//! use bar_loader::parsing::gff::GffReader;
//! use std::path::Path;
//!
//! let mut reader = GffReader::new(bar_loader::parsing::open_text(Path::new("Araport11.gff3")).unwrap());
//! for record in reader.records() {
//!     let record = record.unwrap();
//!     println!("{} {}", record.sequence_id, record.feature_type);
//! }
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use thiserror::Error;

use crate::utils::validation::is_gzipped;

pub mod fasta;
pub mod gff;
pub mod tsv;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),
}

/// Open a text file for line-oriented reading, decompressing `.gz`/`.bgz` input
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened.
pub fn open_text(path: &Path) -> Result<Box<dyn BufRead>, ParseError> {
    let file = File::open(path)?;
    if is_gzipped(path) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}
