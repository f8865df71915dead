use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::core::types::FeatureType;
use crate::core::xref::{Protein, Publication};

/// A single GFF3 feature line as handed over by the tokenizer.
///
/// Attribute values keep the order they were listed in; "first value" always
/// refers to the first listed one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFeatureRecord {
    /// Column 1: sequence (chromosome) identifier
    pub sequence_id: String,

    /// Column 3: feature type tag
    pub feature_type: String,

    /// Column 9: attribute key -> values
    pub attributes: BTreeMap<String, Vec<String>>,

    /// Values of the `Dbxref` attribute, possibly compound
    pub dbxrefs: Vec<String>,

    /// First value of the `Parent` attribute
    pub parent: Option<String>,
}

impl RawFeatureRecord {
    pub fn new(sequence_id: impl Into<String>, feature_type: impl Into<String>) -> Self {
        Self {
            sequence_id: sequence_id.into(),
            feature_type: feature_type.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .entry(key.into())
            .or_default()
            .push(value.into());
        self
    }

    #[must_use]
    pub fn with_dbxref(mut self, dbxref: impl Into<String>) -> Self {
        self.dbxrefs.push(dbxref.into());
        self
    }

    /// Set the parent identifier, mirroring it into the `Parent` attribute
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        let parent = parent.into();
        self.attributes
            .entry("Parent".to_string())
            .or_default()
            .push(parent.clone());
        self.parent = Some(parent);
        self
    }

    /// First value of an attribute, if the key is present with at least one value
    pub fn first(&self, key: &str) -> Option<&str> {
        self.attributes
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

/// Link from a feature to its parent feature
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParentLink {
    /// Reference/collection name on the child (e.g. "gene", "transcripts")
    pub relation: &'static str,
    /// Primary identifier of the parent
    pub identifier: String,
}

/// A typed feature entity produced by the feature classifier
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedFeature {
    #[serde(rename = "class")]
    pub feature_type: FeatureType,

    pub primary_identifier: String,

    /// Sequence the feature is located on
    pub chromosome: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub brief_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_identifier: Option<String>,

    #[serde(
        skip_serializing_if = "Vec::is_empty",
        serialize_with = "serialize_publication_ids"
    )]
    pub publications: Vec<Arc<Publication>>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_protein_accession"
    )]
    pub protein: Option<Arc<Protein>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<ParentLink>,
}

impl ClassifiedFeature {
    pub fn new(
        feature_type: FeatureType,
        primary_identifier: impl Into<String>,
        chromosome: impl Into<String>,
    ) -> Self {
        Self {
            feature_type,
            primary_identifier: primary_identifier.into(),
            chromosome: chromosome.into(),
            symbol: None,
            name: None,
            brief_description: None,
            secondary_identifier: None,
            publications: Vec::new(),
            protein: None,
            parent: None,
        }
    }
}

// Shared entities are written as references by key, not inlined.
fn serialize_publication_ids<S: Serializer>(
    publications: &[Arc<Publication>],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(publications.iter().map(|p| p.pub_med_id.as_str()))
}

fn serialize_protein_accession<S: Serializer>(
    protein: &Option<Arc<Protein>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match protein {
        Some(p) => serializer.serialize_str(&p.primary_accession),
        None => serializer.serialize_none(),
    }
}
