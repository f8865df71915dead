use serde::Serialize;

use crate::core::types::Organism;

/// A literature reference keyed by PubMed ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "class", rename_all = "camelCase")]
pub struct Publication {
    pub pub_med_id: String,
}

impl Publication {
    pub fn new(pub_med_id: impl Into<String>) -> Self {
        Self {
            pub_med_id: pub_med_id.into(),
        }
    }
}

/// A protein keyed by UniProt accession
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "class", rename_all = "camelCase")]
pub struct Protein {
    pub primary_accession: String,
    pub organism: Organism,
}

impl Protein {
    pub fn new(primary_accession: impl Into<String>, organism: Organism) -> Self {
        Self {
            primary_accession: primary_accession.into(),
            organism,
        }
    }
}
