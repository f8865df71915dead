//! Record classification and cross-reference resolution.
//!
//! - [`FeatureClassifier`](feature::FeatureClassifier): GFF3 record -> typed feature or drop
//! - [`SourceProfile`](profile::SourceProfile): per-source dispatch tables
//! - [`ReferenceCache`](xref::ReferenceCache): `Dbxref` -> shared publications and proteins
//! - [`classify_header`](header::classify_header): FASTA header -> chromosome ID
//!
//! ## Drops and errors
//!
//! Some records are expected to produce nothing and are *dropped*: features on
//! sequences outside the source's chromosome set, `region` records, and type
//! tags not in the dispatch table. Drops are counted, never raised.
//!
//! Everything else that cannot be classified is an error and aborts the file:
//! a missing identifying attribute, a malformed or unknown cross-reference,
//! or a FASTA header naming no known chromosome.

pub mod feature;
pub mod header;
pub mod profile;
pub mod xref;
