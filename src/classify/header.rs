use thiserror::Error;

use crate::core::types::ChromosomeId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeaderError {
    #[error("FASTA header does not name a known chromosome: {0}")]
    UnrecognizedHeader(String),
}

/// Substring rules, checked in order; the first contained marker wins
const HEADER_RULES: &[(&str, ChromosomeId)] = &[
    ("chromosome 1", ChromosomeId::Chr1),
    ("chromosome 2", ChromosomeId::Chr2),
    ("chromosome 3", ChromosomeId::Chr3),
    ("chromosome 4", ChromosomeId::Chr4),
    ("chromosome 5", ChromosomeId::Chr5),
    ("mitochondrion", ChromosomeId::ChrM),
    ("chloroplast", ChromosomeId::ChrC),
];

/// Map an NCBI FASTA definition line to a chromosome identifier.
///
/// # Errors
///
/// Returns `HeaderError::UnrecognizedHeader` if no rule matches.
pub fn classify_header(header: &str) -> Result<ChromosomeId, HeaderError> {
    HEADER_RULES
        .iter()
        .find(|(marker, _)| header.contains(marker))
        .map(|&(_, id)| id)
        .ok_or_else(|| HeaderError::UnrecognizedHeader(header.to_string()))
}
