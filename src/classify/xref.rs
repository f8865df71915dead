//! Cross-reference resolution for GFF3 `Dbxref` values.
//!
//! Each `Dbxref` value may itself be a comma-separated compound. Every
//! sub-reference must look like `TAG:value`:
//!
//! | Tag | Result |
//! |-----|--------|
//! | `gene:`, `locus:` | Secondary identifier, copied verbatim |
//! | `PMID:` | Shared [`Publication`] |
//! | `UniProt:` | Shared [`Protein`] carrying the session organism |
//!
//! Anything else is an error. A call either resolves every sub-reference or
//! fails without touching the cache.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::core::entity::Entity;
use crate::core::types::Organism;
use crate::core::xref::{Protein, Publication};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("external reference not understood: '{0}'")]
    MalformedReference(String),

    #[error("unknown external reference type: '{0}'")]
    UnrecognizedReferenceType(String),
}

/// A validated sub-reference, borrowed from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedReference<'a> {
    /// `gene:` or `locus:` reference, kept whole
    Secondary(&'a str),
    /// Numeric PubMed ID
    PubMed(&'a str),
    /// UniProt accession
    UniProt(&'a str),
}

/// Parse a single trimmed sub-reference.
///
/// # Errors
///
/// Returns `ResolveError::MalformedReference` if there is no `:` separator, or
/// `ResolveError::UnrecognizedReferenceType` for an unknown database tag.
pub fn parse_reference(reference: &str) -> Result<ParsedReference<'_>, ResolveError> {
    let Some(colon) = reference.find(':') else {
        return Err(ResolveError::MalformedReference(reference.to_string()));
    };
    let value = &reference[colon + 1..];

    if reference.starts_with("gene:") || reference.starts_with("locus:") {
        Ok(ParsedReference::Secondary(reference))
    } else if reference.starts_with("PMID:") {
        Ok(ParsedReference::PubMed(value))
    } else if reference.starts_with("UniProt:") {
        Ok(ParsedReference::UniProt(value))
    } else {
        Err(ResolveError::UnrecognizedReferenceType(
            reference.to_string(),
        ))
    }
}

/// Result of resolving the references of one feature
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    pub publications: Vec<Arc<Publication>>,
    pub proteins: Vec<Arc<Protein>>,
    pub secondary_identifiers: Vec<String>,
    /// Entities created by this call; each is reported exactly once per session
    pub created: Vec<Entity>,
}

/// Session-scoped dedup cache for publications and proteins
#[derive(Debug, Default)]
pub struct ReferenceCache {
    publications: HashMap<String, Arc<Publication>>,
    proteins: HashMap<String, Arc<Protein>>,
}

impl ReferenceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publication(&self, pub_med_id: &str) -> Option<&Arc<Publication>> {
        self.publications.get(pub_med_id)
    }

    pub fn protein(&self, accession: &str) -> Option<&Arc<Protein>> {
        self.proteins.get(accession)
    }

    pub fn publication_count(&self) -> usize {
        self.publications.len()
    }

    pub fn protein_count(&self) -> usize {
        self.proteins.len()
    }

    /// Resolve a list of (possibly compound) references.
    ///
    /// All sub-references are validated before the cache is consulted.
    ///
    /// # Errors
    ///
    /// Returns the first `ResolveError` met while parsing; the cache is left
    /// unchanged in that case.
    pub fn resolve<S: AsRef<str>>(
        &mut self,
        references: &[S],
        organism: &Organism,
    ) -> Result<Resolution, ResolveError> {
        let parsed = references
            .iter()
            .flat_map(|r| r.as_ref().split(','))
            .map(str::trim)
            .map(parse_reference)
            .collect::<Result<Vec<_>, _>>()?;

        let mut resolution = Resolution::default();

        for reference in parsed {
            match reference {
                ParsedReference::Secondary(id) => {
                    resolution.secondary_identifiers.push(id.to_string());
                }
                ParsedReference::PubMed(pmid) => {
                    let publication = match self.publications.get(pmid) {
                        Some(existing) => Arc::clone(existing),
                        None => {
                            debug!(pmid, "new publication");
                            let created = Arc::new(Publication::new(pmid));
                            self.publications
                                .insert(pmid.to_string(), Arc::clone(&created));
                            resolution
                                .created
                                .push(Entity::Publication(Arc::clone(&created)));
                            created
                        }
                    };
                    if !resolution
                        .publications
                        .iter()
                        .any(|p| Arc::ptr_eq(p, &publication))
                    {
                        resolution.publications.push(publication);
                    }
                }
                ParsedReference::UniProt(accession) => {
                    let protein = match self.proteins.get(accession) {
                        Some(existing) => Arc::clone(existing),
                        None => {
                            debug!(accession, "new protein");
                            let created = Arc::new(Protein::new(accession, *organism));
                            self.proteins
                                .insert(accession.to_string(), Arc::clone(&created));
                            resolution
                                .created
                                .push(Entity::Protein(Arc::clone(&created)));
                            created
                        }
                    };
                    if !resolution.proteins.iter().any(|p| Arc::ptr_eq(p, &protein)) {
                        resolution.proteins.push(protein);
                    }
                }
            }
        }

        Ok(resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(cache: &mut ReferenceCache, refs: &[&str]) -> Result<Resolution, ResolveError> {
        cache.resolve(refs, &Organism::default())
    }

    #[test]
    fn test_parse_reference_kinds() {
        assert_eq!(
            parse_reference("locus:2200935"),
            Ok(ParsedReference::Secondary("locus:2200935"))
        );
        assert_eq!(
            parse_reference("PMID:12345"),
            Ok(ParsedReference::PubMed("12345"))
        );
        assert_eq!(
            parse_reference("UniProt:Q0WV96"),
            Ok(ParsedReference::UniProt("Q0WV96"))
        );
    }

    #[test]
    fn test_same_pmid_shares_instance() {
        let mut cache = ReferenceCache::new();
        let first = resolve(&mut cache, &["PMID:12345"]).unwrap();
        let second = resolve(&mut cache, &["PMID:12345"]).unwrap();

        assert!(Arc::ptr_eq(&first.publications[0], &second.publications[0]));
        assert_eq!(first.created.len(), 1);
        assert!(second.created.is_empty());
        assert_eq!(cache.publication_count(), 1);
    }

    #[test]
    fn test_compound_reference_is_split_and_trimmed() {
        let mut cache = ReferenceCache::new();
        let resolution = resolve(
            &mut cache,
            &["PMID:1, UniProt:Q9C9M1 ,gene:AT1G01010", "locus:2200935"],
        )
        .unwrap();

        assert_eq!(resolution.publications.len(), 1);
        assert_eq!(resolution.proteins.len(), 1);
        assert_eq!(resolution.proteins[0].primary_accession, "Q9C9M1");
        assert_eq!(
            resolution.secondary_identifiers,
            vec!["gene:AT1G01010".to_string(), "locus:2200935".to_string()]
        );
        assert_eq!(resolution.created.len(), 2);

        let cached = cache.protein("Q9C9M1").unwrap();
        assert!(Arc::ptr_eq(cached, &resolution.proteins[0]));
        assert!(cache.publication("1").is_some());
        assert!(cache.publication("2200935").is_none());
    }

    #[test]
    fn test_protein_gets_session_organism() {
        let mut cache = ReferenceCache::new();
        let resolution = cache
            .resolve(&["UniProt:P12345"], &Organism::new(3711))
            .unwrap();
        assert_eq!(resolution.proteins[0].organism.taxon_id, 3711);
    }

    #[test]
    fn test_malformed_reference_creates_nothing() {
        let mut cache = ReferenceCache::new();
        let err = resolve(&mut cache, &["PMID:1,PMID12345"]).unwrap_err();

        assert_eq!(err, ResolveError::MalformedReference("PMID12345".to_string()));
        // PMID:1 came first but must not have been cached
        assert_eq!(cache.publication_count(), 0);
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let mut cache = ReferenceCache::new();
        let err = resolve(&mut cache, &["GeneID:839580"]).unwrap_err();
        assert!(matches!(err, ResolveError::UnrecognizedReferenceType(_)));
        assert_eq!(cache.protein_count(), 0);
    }

    #[test]
    fn test_duplicate_within_one_call_listed_once() {
        let mut cache = ReferenceCache::new();
        let resolution = resolve(&mut cache, &["PMID:7", "PMID:7"]).unwrap();
        assert_eq!(resolution.publications.len(), 1);
        assert_eq!(resolution.created.len(), 1);
    }
}
