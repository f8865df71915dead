//! Loaders for TAIR tab-separated gene tables.
//!
//! TAIR ships two kinds of gene tables, told apart by file name:
//!
//! | File name prefix | Loader | Columns used |
//! |------------------|--------|--------------|
//! | `gene_aliases_` | [`AliasAggregator`](aliases::AliasAggregator) | 0 gene, 1 alias |
//! | `Araport11_functional_descriptions_` | [`AnnotationLoader`](descriptions::AnnotationLoader) | 0 gene model, 2-4 descriptions |
//!
//! Files matching neither prefix are not loaded.

use std::fmt;

use serde::Serialize;

pub mod aliases;
pub mod descriptions;

pub const ALIAS_FILE_PREFIX: &str = "gene_aliases_";
pub const DESCRIPTION_FILE_PREFIX: &str = "Araport11_functional_descriptions_";

/// Which loader a TSV file is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TsvRoute {
    GeneAliases,
    FunctionalDescriptions,
}

impl TsvRoute {
    /// Route a file by its name, or `None` if no loader accepts it
    #[must_use]
    pub fn for_file_name(file_name: &str) -> Option<Self> {
        if file_name.starts_with(ALIAS_FILE_PREFIX) {
            Some(Self::GeneAliases)
        } else if file_name.starts_with(DESCRIPTION_FILE_PREFIX) {
            Some(Self::FunctionalDescriptions)
        } else {
            None
        }
    }
}

impl fmt::Display for TsvRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GeneAliases => write!(f, "gene aliases"),
            Self::FunctionalDescriptions => write!(f, "functional descriptions"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routing_by_prefix() {
        assert_eq!(
            TsvRoute::for_file_name("gene_aliases_20240331.txt"),
            Some(TsvRoute::GeneAliases)
        );
        assert_eq!(
            TsvRoute::for_file_name("Araport11_functional_descriptions_20240331.txt"),
            Some(TsvRoute::FunctionalDescriptions)
        );
        assert_eq!(TsvRoute::for_file_name("TAIR10_functional_descriptions.txt"), None);
        assert_eq!(TsvRoute::for_file_name("Gene_aliases_2024.txt"), None);
    }
}
