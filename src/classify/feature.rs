use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::classify::profile::{
    AttributeRule, IdentifierRule, SourceProfile, TypeRule, REGION_TAG,
};
use crate::classify::xref::ResolveError;
use crate::core::entity::Entity;
use crate::core::feature::{ClassifiedFeature, ParentLink, RawFeatureRecord};
use crate::session::Session;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("{tag} record on {sequence_id} is missing required attribute '{attribute}'")]
    MissingAttribute {
        tag: String,
        sequence_id: String,
        attribute: String,
    },

    #[error(transparent)]
    Reference(#[from] ResolveError),
}

/// Why a record produced no feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// Administrative `region` record
    Region,
    /// Sequence outside the source's chromosome set
    ForeignSequence,
    /// Type tag not in the dispatch table
    UnrecognizedType,
}

impl DropReason {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Region => "region",
            Self::ForeignSequence => "foreign_sequence",
            Self::UnrecognizedType => "unrecognized_type",
        }
    }
}

/// Outcome of classifying one record
#[derive(Debug, Clone)]
pub enum Classification {
    Feature {
        feature: ClassifiedFeature,
        /// Shared entities first created while resolving this record
        created: Vec<Entity>,
    },
    Dropped(DropReason),
}

/// Maps raw GFF3 records to typed features using a [`SourceProfile`]
#[derive(Debug, Clone)]
pub struct FeatureClassifier {
    profile: SourceProfile,
}

impl FeatureClassifier {
    #[must_use]
    pub fn new(profile: SourceProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &SourceProfile {
        &self.profile
    }

    /// Classify one record.
    ///
    /// Drops are decided before any attribute is read, and the session cache is
    /// only consulted once every mandatory attribute has been extracted.
    ///
    /// # Errors
    ///
    /// Returns `ClassifyError::MissingAttribute` when an identifying attribute
    /// is absent, or `ClassifyError::Reference` when a cross-reference cannot
    /// be resolved.
    pub fn classify(
        &self,
        record: &RawFeatureRecord,
        session: &mut Session,
    ) -> Result<Classification, ClassifyError> {
        if !self.profile.accepts_sequence(&record.sequence_id) {
            debug!(sequence = %record.sequence_id, tag = %record.feature_type, "dropping feature on foreign sequence");
            return Ok(Classification::Dropped(DropReason::ForeignSequence));
        }

        if record.feature_type == REGION_TAG {
            return Ok(Classification::Dropped(DropReason::Region));
        }

        let Some(rule) = self.profile.rule_for(&record.feature_type) else {
            debug!(tag = %record.feature_type, "dropping unrecognized feature type");
            return Ok(Classification::Dropped(DropReason::UnrecognizedType));
        };

        let primary_identifier = primary_identifier(rule, record)?;
        let mut feature =
            ClassifiedFeature::new(rule.feature_type, primary_identifier, &record.sequence_id);
        feature.symbol = attribute(rule.symbol, record)?;
        feature.name = attribute(rule.name, record)?;
        feature.brief_description = attribute(rule.brief_description, record)?;
        feature.parent = rule
            .feature_type
            .parent_relation()
            .zip(record.parent.as_ref())
            .map(|(relation, parent)| ParentLink {
                relation,
                identifier: parent.clone(),
            });

        let mut created = Vec::new();
        if rule.resolves_references && !record.dbxrefs.is_empty() {
            let resolution = session.resolve_references(&record.dbxrefs)?;
            feature.publications = resolution.publications;
            // A feature holds one protein and one secondary identifier; the last listed wins
            feature.protein = resolution.proteins.last().cloned();
            feature.secondary_identifier = resolution.secondary_identifiers.last().cloned();
            created = resolution.created;
        }

        Ok(Classification::Feature { feature, created })
    }
}

fn missing(record: &RawFeatureRecord, attribute: &str) -> ClassifyError {
    ClassifyError::MissingAttribute {
        tag: record.feature_type.clone(),
        sequence_id: record.sequence_id.clone(),
        attribute: attribute.to_string(),
    }
}

fn required_value<'a>(record: &'a RawFeatureRecord, key: &str) -> Result<&'a str, ClassifyError> {
    record
        .first(key)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| missing(record, key))
}

/// Gene ID from the last `Dbxref` entry that carries the marker
fn marked_gene_id<'a>(
    record: &'a RawFeatureRecord,
    marker: &str,
) -> Result<&'a str, ClassifyError> {
    record
        .dbxrefs
        .iter()
        .filter(|r| r.contains(marker))
        .filter_map(|r| r.split(':').nth(1))
        .filter(|id| !id.is_empty())
        .last()
        .ok_or_else(|| missing(record, &format!("Dbxref ({marker})")))
}

fn primary_identifier(rule: &TypeRule, record: &RawFeatureRecord) -> Result<String, ClassifyError> {
    match rule.identifier {
        IdentifierRule::Attribute(key) => required_value(record, key).map(str::to_string),
        IdentifierRule::DbxrefMarker(marker) => marked_gene_id(record, marker).map(str::to_string),
        IdentifierRule::NumberedPart {
            number_from,
            marker,
        } => {
            let numbered = required_value(record, number_from)?;
            let gene_id = marked_gene_id(record, marker)?;
            // `numbered` is non-empty, so it has a last character
            let number = numbered.chars().last().unwrap_or_default();
            Ok(format!("{gene_id}.{number}"))
        }
    }
}

fn attribute(
    rule: Option<AttributeRule>,
    record: &RawFeatureRecord,
) -> Result<Option<String>, ClassifyError> {
    let Some(rule) = rule else {
        return Ok(None);
    };
    if rule.required {
        required_value(record, rule.key).map(|v| Some(v.to_string()))
    } else {
        Ok(record
            .first(rule.key)
            .filter(|v| !v.is_empty())
            .map(str::to_string))
    }
}
