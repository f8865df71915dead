use std::sync::Arc;

use serde::Serialize;

use crate::core::chromosome::Chromosome;
use crate::core::feature::ClassifiedFeature;
use crate::core::gene::{Gene, GeneFunctionalAnnotation};
use crate::core::xref::{Protein, Publication};

/// Anything written to the entity store.
///
/// Every variant serializes to a flat object carrying a `class` field.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Entity {
    Feature(ClassifiedFeature),
    Publication(Arc<Publication>),
    Protein(Arc<Protein>),
    Gene(Gene),
    FunctionalAnnotation(GeneFunctionalAnnotation),
    Chromosome(Chromosome),
}

impl Entity {
    /// Store class name of this entity
    #[must_use]
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Feature(f) => f.feature_type.as_str(),
            Self::Publication(_) => "Publication",
            Self::Protein(_) => "Protein",
            Self::Gene(_) => "Gene",
            Self::FunctionalAnnotation(_) => "TairFunctionalAnnotation",
            Self::Chromosome(_) => "Chromosome",
        }
    }
}

impl From<ClassifiedFeature> for Entity {
    fn from(feature: ClassifiedFeature) -> Self {
        Self::Feature(feature)
    }
}

impl From<Gene> for Entity {
    fn from(gene: Gene) -> Self {
        Self::Gene(gene)
    }
}

impl From<Chromosome> for Entity {
    fn from(chromosome: Chromosome) -> Self {
        Self::Chromosome(chromosome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{ChromosomeId, FeatureType, Organism};

    #[test]
    fn test_class_names_match_serialized_class() {
        let entities = vec![
            Entity::from(ClassifiedFeature::new(FeatureType::Exon, "AT1G01010.1.1", "Chr1")),
            Entity::Publication(Arc::new(Publication::new("1"))),
            Entity::Protein(Arc::new(Protein::new("P1", Organism::default()))),
            Entity::from(Gene::new("AT1G01010")),
            Entity::FunctionalAnnotation(GeneFunctionalAnnotation::new("AT1G01010", "a", "", "")),
            Entity::from(Chromosome::new(ChromosomeId::ChrC, 154_478)),
        ];

        for entity in &entities {
            let json = serde_json::to_value(entity).unwrap();
            assert_eq!(json["class"], entity.class_name());
        }
    }

    #[test]
    fn test_protein_carries_organism() {
        let entity = Entity::Protein(Arc::new(Protein::new("Q9FX", Organism::new(3702))));
        let json = serde_json::to_value(&entity).unwrap();
        assert_eq!(json["primaryAccession"], "Q9FX");
        assert_eq!(json["organism"]["taxonId"], 3702);
    }

    #[test]
    fn test_chromosome_serialization() {
        let entity = Entity::from(Chromosome::new(ChromosomeId::Chr3, 23_459_830));
        let json = serde_json::to_value(&entity).unwrap();
        assert_eq!(json["primaryIdentifier"], "Chr3");
        assert_eq!(json["length"], 23_459_830);
    }
}
