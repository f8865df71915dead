//! GFF3 feature reader using noodles.
//!
//! Only what the feature classifier consumes is kept: the reference sequence
//! name, the type and the attributes. noodles skips comments, stops at the
//! `##FASTA` directive and decodes `%XX` escapes in attribute values.
//!
//! The values of `Dbxref` become [`RawFeatureRecord::dbxrefs`] and the first
//! `Parent` value becomes [`RawFeatureRecord::parent`].

use std::collections::BTreeMap;
use std::io::BufRead;

use noodles::gff;
use noodles::gff::record_buf::attributes::field::Value;

use crate::core::feature::RawFeatureRecord;
use crate::parsing::ParseError;

const DBXREF_TAG: &str = "Dbxref";
const PARENT_TAG: &str = "Parent";

/// Reader over the feature lines of a GFF3 stream
pub struct GffReader<R> {
    inner: gff::io::Reader<R>,
}

impl<R: BufRead> GffReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner: gff::io::Reader::new(inner),
        }
    }

    /// Iterate over feature records.
    ///
    /// Each item is `Err(ParseError::Noodles)` if the line is not a valid
    /// GFF3 record.
    pub fn records(&mut self) -> impl Iterator<Item = Result<RawFeatureRecord, ParseError>> + '_ {
        self.inner.record_bufs().map(|result| {
            let record = result
                .map_err(|e| ParseError::Noodles(format!("Failed to parse GFF3 record: {e}")))?;

            let mut attributes: BTreeMap<String, Vec<String>> = BTreeMap::new();
            for (tag, value) in record.attributes().as_ref() {
                let values = attributes.entry(tag.to_string()).or_default();
                match value {
                    Value::String(s) => values.push(s.to_string()),
                    Value::Array(array) => values.extend(array.iter().map(|v| v.to_string())),
                }
            }

            let dbxrefs = attributes.get(DBXREF_TAG).cloned().unwrap_or_default();
            let parent = attributes
                .get(PARENT_TAG)
                .and_then(|values| values.first())
                .cloned();

            Ok(RawFeatureRecord {
                sequence_id: record.reference_sequence_name().to_string(),
                feature_type: record.ty().to_string(),
                attributes,
                dbxrefs,
                parent,
            })
        })
    }
}
