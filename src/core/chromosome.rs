use serde::Serialize;

use crate::core::types::ChromosomeId;

/// A chromosome sequence loaded from FASTA
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "class", rename_all = "camelCase")]
pub struct Chromosome {
    pub primary_identifier: ChromosomeId,
    pub length: u64,
}

impl Chromosome {
    #[must_use]
    pub fn new(primary_identifier: ChromosomeId, length: u64) -> Self {
        Self {
            primary_identifier,
            length,
        }
    }
}
