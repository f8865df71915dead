use serde::Serialize;

use crate::utils::validation::non_blank;

/// A gene entity owned by the session gene registry.
///
/// Genes are decorated in place by the TSV loaders and written out once, when
/// the session finishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "class", rename_all = "camelCase")]
pub struct Gene {
    pub primary_identifier: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tair_aliases: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tair_short_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tair_curator_summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tair_computational_description: Option<String>,
}

impl Gene {
    pub fn new(primary_identifier: impl Into<String>) -> Self {
        Self {
            primary_identifier: primary_identifier.into(),
            tair_aliases: None,
            tair_short_description: None,
            tair_curator_summary: None,
            tair_computational_description: None,
        }
    }

    /// Copy the non-blank fields of an annotation onto this gene
    pub fn apply_annotation(&mut self, annotation: &GeneFunctionalAnnotation) {
        if let Some(ref s) = annotation.short_description {
            self.tair_short_description = Some(s.clone());
        }
        if let Some(ref s) = annotation.curator_summary {
            self.tair_curator_summary = Some(s.clone());
        }
        if let Some(ref s) = annotation.computational_description {
            self.tair_computational_description = Some(s.clone());
        }
    }
}

/// One aggregated alias group: a gene and its `", "`-joined aliases.
///
/// Not written to the store itself; the group is stored as the
/// `tairAliases` field of the decorated [`Gene`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneAliasRecord {
    pub gene_identifier: String,
    pub aliases: String,
}

/// Functional description bundle for one gene.
///
/// Blank fields are stored as `None`. When the loader runs in linked mode this
/// is written as its own entity referencing the gene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "class", rename = "TairFunctionalAnnotation", rename_all = "camelCase")]
pub struct GeneFunctionalAnnotation {
    #[serde(rename = "gene")]
    pub gene_identifier: String,

    #[serde(
        rename = "tairShortDescription",
        skip_serializing_if = "Option::is_none"
    )]
    pub short_description: Option<String>,

    #[serde(
        rename = "tairCuratorSummary",
        skip_serializing_if = "Option::is_none"
    )]
    pub curator_summary: Option<String>,

    #[serde(
        rename = "tairComputationalDescription",
        skip_serializing_if = "Option::is_none"
    )]
    pub computational_description: Option<String>,
}

impl GeneFunctionalAnnotation {
    pub fn new(
        gene_identifier: impl Into<String>,
        short_description: &str,
        curator_summary: &str,
        computational_description: &str,
    ) -> Self {
        Self {
            gene_identifier: gene_identifier.into(),
            short_description: non_blank(short_description),
            curator_summary: non_blank(curator_summary),
            computational_description: non_blank(computational_description),
        }
    }
}
