use std::io::BufRead;

use crate::parsing::ParseError;

/// One data row of a tab-separated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsvRow {
    /// 1-based line number in the file
    pub line_number: usize,
    pub fields: Vec<String>,
}

impl TsvRow {
    /// Field at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidFormat` if the row has too few columns.
    pub fn field(&self, index: usize) -> Result<&str, ParseError> {
        self.fields.get(index).map(String::as_str).ok_or_else(|| {
            ParseError::InvalidFormat(format!(
                "Line {} has {} fields, expected at least {}",
                self.line_number,
                self.fields.len(),
                index + 1
            ))
        })
    }
}

/// Row reader for TAIR tab-separated tables.
///
/// Comment and blank lines are skipped. The first remaining line is the
/// header and is never returned.
pub struct TsvReader<R> {
    inner: R,
    line: String,
    line_number: usize,
    header_seen: bool,
    done: bool,
}

impl<R: BufRead> TsvReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line: String::new(),
            line_number: 0,
            header_seen: false,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for TsvReader<R> {
    type Item = Result<TsvRow, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            self.line.clear();
            match self.inner.read_line(&mut self.line) {
                Ok(0) => self.done = true,
                Ok(_) => {
                    self.line_number += 1;
                    // Only line endings are stripped; trailing tabs are empty fields
                    let line = self.line.trim_end_matches(['\n', '\r']);
                    if line.trim().is_empty() || line.starts_with('#') {
                        continue;
                    }

                    if !self.header_seen {
                        self.header_seen = true;
                        continue;
                    }

                    return Some(Ok(TsvRow {
                        line_number: self.line_number,
                        fields: line.split('\t').map(str::to_string).collect(),
                    }));
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_is_skipped() {
        let tsv = "name\tfull_name\nAT1G01010\tANAC001\nAT1G01010\tNAC001\n";
        let rows: Vec<TsvRow> = TsvReader::new(tsv.as_bytes())
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].line_number, 2);
        assert_eq!(rows[1].field(1).unwrap(), "NAC001");
    }

    #[test]
    fn test_comments_before_header() {
        let tsv = "# TAIR export\n\nheader\nAT1G01020\tARV1\r\n";
        let rows: Vec<TsvRow> = TsvReader::new(tsv.as_bytes())
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].fields, vec!["AT1G01020", "ARV1"]);
    }

    #[test]
    fn test_trailing_empty_fields_are_kept() {
        let tsv = "h\nAT1G01010.1\tprotein_coding\tNAC 1\t\t\n";
        let rows: Vec<TsvRow> = TsvReader::new(tsv.as_bytes())
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(rows[0].fields.len(), 5);
        assert_eq!(rows[0].field(4).unwrap(), "");
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let row = TsvRow {
            line_number: 4,
            fields: vec!["AT1G01010".to_string()],
        };
        let err = row.field(1).unwrap_err();
        assert!(err.to_string().contains("Line 4"));
    }

    #[test]
    fn test_header_only_file() {
        assert_eq!(TsvReader::new("gene\talias\n".as_bytes()).count(), 0);
    }
}
