//! Core data types for annotation loading.
//!
//! This module provides the entity model shared by the classifiers and loaders:
//!
//! - [`RawFeatureRecord`](feature::RawFeatureRecord): a tokenized GFF3 feature line
//! - [`ClassifiedFeature`](feature::ClassifiedFeature): a typed feature ready for storage
//! - [`Publication`](xref::Publication), [`Protein`](xref::Protein): shared cross-reference entities
//! - [`Gene`](gene::Gene), [`GeneAliasRecord`](gene::GeneAliasRecord),
//!   [`GeneFunctionalAnnotation`](gene::GeneFunctionalAnnotation): TAIR gene data
//! - [`Chromosome`](chromosome::Chromosome): a sequence loaded from FASTA
//! - [`Entity`](entity::Entity): the union of everything written to the store
//!
//! ## Class names
//!
//! Serialized class and attribute names form the contract with the
//! knowledge base and follow its data model exactly:
//!
//! | Entity | Class | Key attribute |
//! |--------|-------|---------------|
//! | Feature | `Gene`, `MRNA`, `Exon`, ... | `primaryIdentifier` |
//! | Publication | `Publication` | `pubMedId` |
//! | Protein | `Protein` | `primaryAccession` |
//! | Functional annotation | `TairFunctionalAnnotation` | `gene` |
//! | Chromosome | `Chromosome` | `primaryIdentifier` |

pub mod chromosome;
pub mod entity;
pub mod feature;
pub mod gene;
pub mod types;
pub mod xref;
