//! Session-scoped state.
//!
//! A [`Session`] owns every dedup cache used while loading one input file:
//! the publication/protein cache of the cross-reference resolver and the gene
//! registry shared by the TSV loaders. Sessions start empty and are consumed by
//! [`Session::finish`]; nothing is ever shared between two sessions.

use std::collections::HashMap;

use crate::classify::xref::{ReferenceCache, Resolution, ResolveError};
use crate::core::gene::Gene;
use crate::core::types::Organism;

/// Genes created during a session, in creation order
#[derive(Debug, Default)]
pub struct GeneRegistry {
    genes: Vec<Gene>,
    index: HashMap<String, usize>,
}

impl GeneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a gene, creating it on first sight.
    ///
    /// The boolean is `true` when the gene was created by this call.
    pub fn get_or_create(&mut self, primary_identifier: &str) -> (&mut Gene, bool) {
        let (idx, created) = match self.index.get(primary_identifier) {
            Some(&idx) => (idx, false),
            None => {
                self.genes.push(Gene::new(primary_identifier));
                let idx = self.genes.len() - 1;
                self.index.insert(primary_identifier.to_string(), idx);
                (idx, true)
            }
        };
        (&mut self.genes[idx], created)
    }

    pub fn get(&self, primary_identifier: &str) -> Option<&Gene> {
        self.index
            .get(primary_identifier)
            .map(|&idx| &self.genes[idx])
    }

    pub fn contains(&self, primary_identifier: &str) -> bool {
        self.index.contains_key(primary_identifier)
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Gene> {
        self.genes.iter()
    }

    fn into_genes(self) -> Vec<Gene> {
        self.genes
    }
}

/// All mutable state of one processing session
#[derive(Debug, Default)]
pub struct Session {
    organism: Organism,
    references: ReferenceCache,
    genes: GeneRegistry,
}

impl Session {
    #[must_use]
    pub fn new(organism: Organism) -> Self {
        Self {
            organism,
            references: ReferenceCache::new(),
            genes: GeneRegistry::new(),
        }
    }

    pub fn references(&self) -> &ReferenceCache {
        &self.references
    }

    pub fn genes(&self) -> &GeneRegistry {
        &self.genes
    }

    pub fn genes_mut(&mut self) -> &mut GeneRegistry {
        &mut self.genes
    }

    /// Resolve cross-references against this session's cache.
    ///
    /// # Errors
    ///
    /// Propagates `ResolveError` from [`ReferenceCache::resolve`].
    pub fn resolve_references<S: AsRef<str>>(
        &mut self,
        references: &[S],
    ) -> Result<Resolution, ResolveError> {
        self.references.resolve(references, &self.organism)
    }

    /// End the session, returning the genes to store. All caches are dropped.
    #[must_use]
    pub fn finish(self) -> Vec<Gene> {
        self.genes.into_genes()
    }
}
