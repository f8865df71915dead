//! At-most-once loading of TAIR functional descriptions.
//!
//! The first row for a gene wins. Later rows for the same gene are ignored,
//! even when they carry different values; nothing is merged.

use std::collections::HashSet;

use serde::Serialize;

use crate::core::gene::GeneFunctionalAnnotation;
use crate::session::Session;
use crate::utils::validation::normalize_description_gene_id;

/// Column of the gene model key
pub const GENE_MODEL_COLUMN: usize = 0;
/// Columns of short description, curator summary and computational description
pub const DESCRIPTION_COLUMNS: [usize; 3] = [2, 3, 4];

/// Accept a raw gene model key (`AT1G01010.1`), returning the gene ID
#[must_use]
pub fn accept_gene_model(raw: &str) -> Option<String> {
    normalize_description_gene_id(raw)
}

/// How an accepted annotation is stored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationShape {
    /// Set the descriptions as attributes of the gene entity
    #[default]
    Decorate,
    /// Store a separate annotation entity that references the gene
    Linked,
}

/// What happened to one annotation row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationOutcome {
    /// Fields were set on the session's gene entity
    Decorated,
    /// The annotation must be stored as its own entity
    Linked(GeneFunctionalAnnotation),
    /// The gene already had an annotation
    Ignored,
}

#[derive(Debug, Default)]
pub struct AnnotationLoader {
    shape: AnnotationShape,
    seen: HashSet<String>,
}

impl AnnotationLoader {
    #[must_use]
    pub fn new(shape: AnnotationShape) -> Self {
        Self {
            shape,
            seen: HashSet::new(),
        }
    }

    /// Attach an annotation to its gene unless the gene already has one.
    pub fn load(
        &mut self,
        annotation: GeneFunctionalAnnotation,
        session: &mut Session,
    ) -> AnnotationOutcome {
        if !self.seen.insert(annotation.gene_identifier.clone()) {
            return AnnotationOutcome::Ignored;
        }

        let (gene, _) = session
            .genes_mut()
            .get_or_create(&annotation.gene_identifier);

        match self.shape {
            AnnotationShape::Decorate => {
                gene.apply_annotation(&annotation);
                AnnotationOutcome::Decorated
            }
            AnnotationShape::Linked => AnnotationOutcome::Linked(annotation),
        }
    }
}
