//! FASTA header extraction using noodles.
//!
//! Only the definition line and the sequence length of each record are kept;
//! the sequence itself is discarded. Both uncompressed and gzip/bgzip
//! compressed files are supported.

use std::io::BufRead;
use std::path::Path;

use noodles::fasta;

use crate::parsing::{open_text, ParseError};

/// Definition line and sequence length of one FASTA record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaHeader {
    /// Full definition line without the leading `>`
    pub definition: String,
    pub length: u64,
}

/// Read all record headers of a FASTA file.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened, or
/// `ParseError::Noodles` if a record cannot be parsed.
pub fn read_fasta_headers(path: &Path) -> Result<Vec<FastaHeader>, ParseError> {
    read_fasta_headers_from(open_text(path)?)
}

/// Read all record headers from an open FASTA stream.
///
/// # Errors
///
/// Returns `ParseError::Noodles` if a record cannot be parsed.
pub fn read_fasta_headers_from<R: BufRead>(reader: R) -> Result<Vec<FastaHeader>, ParseError> {
    let mut fasta_reader = fasta::io::Reader::new(reader);
    let mut headers = Vec::new();

    for result in fasta_reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        let mut definition = String::from_utf8_lossy(record.name()).into_owned();
        if let Some(description) = record.description() {
            definition.push(' ');
            definition.push_str(&String::from_utf8_lossy(description));
        }

        headers.push(FastaHeader {
            definition,
            length: record.sequence().len() as u64,
        });
    }

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const NCBI_FASTA: &[u8] = b">NC_003070.9 Arabidopsis thaliana chromosome 1 sequence\nACGTACGT\nACGT\n>NC_037304.1 Arabidopsis thaliana ecotype Col-0 mitochondrion, complete genome\nGGGG\n";

    #[test]
    fn test_definition_includes_description() {
        let headers = read_fasta_headers_from(NCBI_FASTA).unwrap();
        assert_eq!(headers.len(), 2);
        assert_eq!(
            headers[0].definition,
            "NC_003070.9 Arabidopsis thaliana chromosome 1 sequence"
        );
        assert_eq!(headers[0].length, 12);
        assert_eq!(headers[1].length, 4);
    }

    #[test]
    fn test_name_only_header() {
        let headers = read_fasta_headers_from(&b">Chr1\nACGT\n"[..]).unwrap();
        assert_eq!(headers[0].definition, "Chr1");
    }

    #[test]
    fn test_reads_gzipped_file() {
        let mut temp = NamedTempFile::with_suffix(".fa.gz").unwrap();
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(NCBI_FASTA).unwrap();
        temp.write_all(&encoder.finish().unwrap()).unwrap();
        temp.flush().unwrap();

        let headers = read_fasta_headers(temp.path()).unwrap();
        assert_eq!(headers.len(), 2);
        assert!(headers[1].definition.contains("mitochondrion"));
    }

    #[test]
    fn test_empty_file_has_no_headers() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.flush().unwrap();
        assert!(read_fasta_headers(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file() {
        let result = read_fasta_headers(Path::new("/nonexistent/genome.fa"));
        assert!(matches!(result, Err(ParseError::Io(_))));
    }
}
