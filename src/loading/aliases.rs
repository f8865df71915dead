//! Adjacency-based aggregation of TAIR gene aliases.
//!
//! Alias files list one `(gene, alias)` pair per row, sorted by gene. The
//! aggregator keeps a single open group and merges consecutive rows with the
//! same gene into one `", "`-joined alias string.
//!
//! Grouping relies on that ordering: a gene that shows up again after another
//! gene opens a *new* group and yields a second record. Input is never
//! re-sorted.
//!
//! A finished group only decorates its session [`Gene`](crate::core::gene::Gene):
//! the gene, written when the session finishes, is the stored form of the
//! group.

use std::collections::HashSet;

use tracing::warn;

use crate::core::gene::GeneAliasRecord;
use crate::session::Session;
use crate::utils::validation::normalize_alias_gene_id;

pub const ALIAS_SEPARATOR: &str = ", ";

/// Column of the gene key in alias files
pub const GENE_COLUMN: usize = 0;
/// Column of the alias symbol in alias files
pub const ALIAS_COLUMN: usize = 1;

/// Accept a raw alias-file gene key, normalizing it
#[must_use]
pub fn accept_gene_id(raw: &str) -> Option<String> {
    normalize_alias_gene_id(raw)
}

#[derive(Debug, Default)]
pub struct AliasAggregator {
    /// Open group: gene ID and accumulated aliases
    current: Option<(String, String)>,
    /// Genes already flushed, for spotting unsorted input
    flushed: HashSet<String>,
}

impl AliasAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one normalized pair, returning the previous group if it was closed.
    pub fn push(
        &mut self,
        gene_id: &str,
        alias: &str,
        session: &mut Session,
    ) -> Option<GeneAliasRecord> {
        match self.current.as_mut() {
            Some((current, aliases)) if current == gene_id => {
                aliases.push_str(ALIAS_SEPARATOR);
                aliases.push_str(alias);
                None
            }
            _ => {
                let closed = self.current.replace((gene_id.to_string(), alias.to_string()));
                closed.map(|(gene, aliases)| self.flush(gene, aliases, session))
            }
        }
    }

    /// Close the open group at end of input
    pub fn finish(mut self, session: &mut Session) -> Option<GeneAliasRecord> {
        self.current
            .take()
            .map(|(gene, aliases)| self.flush(gene, aliases, session))
    }

    fn flush(&mut self, gene_id: String, aliases: String, session: &mut Session) -> GeneAliasRecord {
        if !self.flushed.insert(gene_id.clone()) {
            warn!(gene = %gene_id, "gene aliases are not contiguous; emitting a separate group");
        }

        let (gene, _) = session.genes_mut().get_or_create(&gene_id);
        if gene.tair_aliases.is_none() && !aliases.is_empty() {
            gene.tair_aliases = Some(aliases.clone());
        }

        GeneAliasRecord {
            gene_identifier: gene_id,
            aliases,
        }
    }
}

/// Aggregate a whole sequence of already-normalized pairs
pub fn aggregate_aliases<'a, I>(pairs: I, session: &mut Session) -> Vec<GeneAliasRecord>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut aggregator = AliasAggregator::new();
    let mut records: Vec<GeneAliasRecord> = pairs
        .into_iter()
        .filter_map(|(gene, alias)| aggregator.push(gene, alias, session))
        .collect();
    records.extend(aggregator.finish(session));
    records
}
