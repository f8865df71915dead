//! Per-source dispatch tables for GFF3 feature classification.
//!
//! A [`SourceProfile`] says which sequences a source keeps and how each
//! accepted type tag becomes a [`FeatureType`]. The tables are static data; the
//! classifier only interprets them.

use serde::Serialize;

use crate::core::types::FeatureType;

/// Type tag of administrative records that are never stored
pub const REGION_TAG: &str = "region";

/// Marker identifying Araport gene IDs inside NCBI `Dbxref` values
pub const ARAPORT_MARKER: &str = "Araport";

/// Annotation provider of a GFF3 file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// TAIR / Araport11 GFF3
    Tair,
    /// NCBI RefSeq GFF3
    Ncbi,
}

impl Source {
    /// Sequence identifier prefix of the chromosomes this source is loaded for
    #[must_use]
    pub fn default_chromosome_prefix(self) -> &'static str {
        match self {
            Self::Tair => "Chr",
            Self::Ncbi => "NC_",
        }
    }

    #[must_use]
    pub fn rules(self) -> &'static [TypeRule] {
        match self {
            Self::Tair => TAIR_RULES,
            Self::Ncbi => NCBI_RULES,
        }
    }
}

/// Where a feature's primary identifier comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierRule {
    /// First value of an attribute
    Attribute(&'static str),
    /// Second `:` segment of the last `Dbxref` entry containing the marker
    DbxrefMarker(&'static str),
    /// Marker gene ID from `Dbxref`, a `.`, then the last character of an attribute.
    /// `ID=exon-NM_099983.2-1` with `Araport:AT1G01010` gives `AT1G01010.1`.
    NumberedPart {
        number_from: &'static str,
        marker: &'static str,
    },
}

/// An optional or mandatory attribute copied onto the feature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeRule {
    pub key: &'static str,
    pub required: bool,
}

const fn optional(key: &'static str) -> Option<AttributeRule> {
    Some(AttributeRule {
        key,
        required: false,
    })
}

const fn required(key: &'static str) -> Option<AttributeRule> {
    Some(AttributeRule {
        key,
        required: true,
    })
}

/// One row of a dispatch table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeRule {
    pub tag: &'static str,
    /// Match the tag ignoring ASCII case
    pub case_insensitive: bool,
    pub feature_type: FeatureType,
    pub identifier: IdentifierRule,
    pub symbol: Option<AttributeRule>,
    pub name: Option<AttributeRule>,
    pub brief_description: Option<AttributeRule>,
    /// Resolve `Dbxref` values into publications/proteins
    pub resolves_references: bool,
}

impl TypeRule {
    const fn by_id(tag: &'static str, feature_type: FeatureType) -> Self {
        Self {
            tag,
            case_insensitive: false,
            feature_type,
            identifier: IdentifierRule::Attribute("ID"),
            symbol: None,
            name: None,
            brief_description: None,
            resolves_references: false,
        }
    }

    #[must_use]
    pub fn matches(&self, tag: &str) -> bool {
        if self.case_insensitive {
            self.tag.eq_ignore_ascii_case(tag)
        } else {
            self.tag == tag
        }
    }
}

const TAIR_RULES: &[TypeRule] = &[
    TypeRule {
        symbol: optional("symbol"),
        brief_description: optional("computational_description"),
        ..TypeRule::by_id("gene", FeatureType::Gene)
    },
    TypeRule {
        name: optional("Parent"),
        resolves_references: true,
        ..TypeRule::by_id("transcript", FeatureType::Transcript)
    },
    TypeRule {
        case_insensitive: true,
        name: optional("Parent"),
        resolves_references: true,
        ..TypeRule::by_id("mRNA", FeatureType::Mrna)
    },
    TypeRule::by_id("exon", FeatureType::Exon),
    TypeRule::by_id("CDS", FeatureType::Cds),
    TypeRule::by_id("lnc_RNA", FeatureType::LncRna),
    TypeRule::by_id("antisense_RNA", FeatureType::AntisenseRna),
    TypeRule::by_id("antisense_lncRNA", FeatureType::AntisenseLncRna),
    TypeRule::by_id("miRNA_primary_transcript", FeatureType::MiRnaPrimaryTranscript),
    TypeRule::by_id("ncRNA", FeatureType::NcRna),
    TypeRule::by_id("tRNA", FeatureType::Trna),
    TypeRule::by_id("transcript_region", FeatureType::TranscriptRegion),
    TypeRule::by_id("pseudogenic_transcript", FeatureType::PseudogenicTranscript),
    TypeRule::by_id("pseudogenic_exon", FeatureType::PseudogenicExon),
    TypeRule::by_id("pseudogenic_tRNA", FeatureType::PseudogenicTrna),
    TypeRule::by_id("uORF", FeatureType::Uorf),
    TypeRule::by_id("transposon_fragment", FeatureType::TransposonFragment),
];

const NCBI_RULES: &[TypeRule] = &[
    TypeRule {
        identifier: IdentifierRule::DbxrefMarker(ARAPORT_MARKER),
        symbol: required("Name"),
        brief_description: optional("description"),
        ..TypeRule::by_id("gene", FeatureType::Gene)
    },
    TypeRule {
        identifier: IdentifierRule::Attribute("transcript_id"),
        name: optional("product"),
        ..TypeRule::by_id("transcript", FeatureType::Transcript)
    },
    TypeRule {
        case_insensitive: true,
        identifier: IdentifierRule::Attribute("transcript_id"),
        name: optional("product"),
        ..TypeRule::by_id("mRNA", FeatureType::Mrna)
    },
    TypeRule {
        identifier: IdentifierRule::NumberedPart {
            number_from: "ID",
            marker: ARAPORT_MARKER,
        },
        name: optional("product"),
        ..TypeRule::by_id("exon", FeatureType::Exon)
    },
];

/// Classification settings for one source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceProfile {
    pub source: Source,
    pub chromosome_prefix: String,
    pub rules: &'static [TypeRule],
}

impl SourceProfile {
    #[must_use]
    pub fn for_source(source: Source) -> Self {
        Self {
            source,
            chromosome_prefix: source.default_chromosome_prefix().to_string(),
            rules: source.rules(),
        }
    }

    #[must_use]
    pub fn with_chromosome_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.chromosome_prefix = prefix.into();
        self
    }

    /// Whether features on this sequence are kept
    #[must_use]
    pub fn accepts_sequence(&self, sequence_id: &str) -> bool {
        sequence_id.starts_with(&self.chromosome_prefix)
    }

    /// First rule matching the tag, in table order
    #[must_use]
    pub fn rule_for(&self, tag: &str) -> Option<&'static TypeRule> {
        self.rules.iter().find(|rule| rule.matches(tag))
    }
}
