use serde::Serialize;

/// Target feature class for a classified GFF3 record.
///
/// The serialized names are the class names of the knowledge base data model
/// and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum FeatureType {
    Gene,
    Transcript,
    #[serde(rename = "MRNA")]
    Mrna,
    Exon,
    #[serde(rename = "CDS")]
    Cds,
    #[serde(rename = "LncRNA")]
    LncRna,
    #[serde(rename = "AntisenseRNA")]
    AntisenseRna,
    #[serde(rename = "AntisenseLncRNA")]
    AntisenseLncRna,
    #[serde(rename = "MiRNAPrimaryTranscript")]
    MiRnaPrimaryTranscript,
    #[serde(rename = "NcRNA")]
    NcRna,
    #[serde(rename = "TRNA")]
    Trna,
    TranscriptRegion,
    PseudogenicTranscript,
    PseudogenicExon,
    #[serde(rename = "PseudogenicTRNA")]
    PseudogenicTrna,
    #[serde(rename = "UORF")]
    Uorf,
    TransposonFragment,
}

impl FeatureType {
    /// Class name as written to the entity store
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gene => "Gene",
            Self::Transcript => "Transcript",
            Self::Mrna => "MRNA",
            Self::Exon => "Exon",
            Self::Cds => "CDS",
            Self::LncRna => "LncRNA",
            Self::AntisenseRna => "AntisenseRNA",
            Self::AntisenseLncRna => "AntisenseLncRNA",
            Self::MiRnaPrimaryTranscript => "MiRNAPrimaryTranscript",
            Self::NcRna => "NcRNA",
            Self::Trna => "TRNA",
            Self::TranscriptRegion => "TranscriptRegion",
            Self::PseudogenicTranscript => "PseudogenicTranscript",
            Self::PseudogenicExon => "PseudogenicExon",
            Self::PseudogenicTrna => "PseudogenicTRNA",
            Self::Uorf => "UORF",
            Self::TransposonFragment => "TransposonFragment",
        }
    }

    /// Name of the reference or collection that links this feature to its parent.
    ///
    /// Genes are roots and have no parent relation.
    #[must_use]
    pub fn parent_relation(self) -> Option<&'static str> {
        match self {
            Self::Gene => None,
            Self::Exon | Self::Cds => Some("transcripts"),
            Self::Transcript
            | Self::Mrna
            | Self::LncRna
            | Self::AntisenseRna
            | Self::AntisenseLncRna
            | Self::MiRnaPrimaryTranscript
            | Self::NcRna
            | Self::Trna
            | Self::TranscriptRegion
            | Self::Uorf => Some("gene"),
            Self::PseudogenicTranscript | Self::PseudogenicTrna => Some("pseudogene"),
            Self::PseudogenicExon => Some("pseudogenicTranscripts"),
            Self::TransposonFragment => Some("transposableElement"),
        }
    }
}

impl std::fmt::Display for FeatureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Chromosome identifiers recognised in NCBI FASTA headers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ChromosomeId {
    Chr1,
    Chr2,
    Chr3,
    Chr4,
    Chr5,
    /// Mitochondrion
    ChrM,
    /// Chloroplast
    ChrC,
}

impl ChromosomeId {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Chr1 => "Chr1",
            Self::Chr2 => "Chr2",
            Self::Chr3 => "Chr3",
            Self::Chr4 => "Chr4",
            Self::Chr5 => "Chr5",
            Self::ChrM => "ChrM",
            Self::ChrC => "ChrC",
        }
    }
}

impl std::fmt::Display for ChromosomeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// NCBI taxonomy ID of *Arabidopsis thaliana*
pub const ARABIDOPSIS_TAXON_ID: u32 = 3702;

/// Organism context attached to entities created during a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Organism {
    pub taxon_id: u32,
}

impl Organism {
    #[must_use]
    pub fn new(taxon_id: u32) -> Self {
        Self { taxon_id }
    }
}

impl Default for Organism {
    fn default() -> Self {
        Self::new(ARABIDOPSIS_TAXON_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_type_wire_names() {
        assert_eq!(FeatureType::Mrna.as_str(), "MRNA");
        assert_eq!(FeatureType::PseudogenicTrna.as_str(), "PseudogenicTRNA");
        assert_eq!(
            serde_json::to_string(&FeatureType::MiRnaPrimaryTranscript).unwrap(),
            "\"MiRNAPrimaryTranscript\""
        );
        assert_eq!(serde_json::to_string(&FeatureType::Cds).unwrap(), "\"CDS\"");
    }

    #[test]
    fn test_parent_relations() {
        assert_eq!(FeatureType::Gene.parent_relation(), None);
        assert_eq!(FeatureType::Exon.parent_relation(), Some("transcripts"));
        assert_eq!(FeatureType::Mrna.parent_relation(), Some("gene"));
        assert_eq!(
            FeatureType::PseudogenicExon.parent_relation(),
            Some("pseudogenicTranscripts")
        );
        assert_eq!(
            FeatureType::TransposonFragment.parent_relation(),
            Some("transposableElement")
        );
    }

    #[test]
    fn test_default_organism_is_arabidopsis() {
        assert_eq!(Organism::default().taxon_id, 3702);
    }
}
