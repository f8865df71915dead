//! Per-file ingestion.
//!
//! Every input file is processed in its own [`Session`]. Entities are
//! buffered while the file is read and handed to the sink only after the
//! whole file succeeded, so a fatal error leaves nothing from that file in
//! the store. Shared entities (publications, proteins) are committed before
//! the features that reference them; session genes before the annotations
//! that reference them.

use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::classify::feature::{Classification, ClassifyError, FeatureClassifier};
use crate::classify::header::{classify_header, HeaderError};
use crate::classify::profile::Source;
use crate::core::chromosome::Chromosome;
use crate::core::entity::Entity;
use crate::core::gene::GeneFunctionalAnnotation;
use crate::core::types::Organism;
use crate::loading::aliases::{accept_gene_id, AliasAggregator, ALIAS_COLUMN, GENE_COLUMN};
use crate::loading::descriptions::{
    accept_gene_model, AnnotationLoader, AnnotationOutcome, AnnotationShape, DESCRIPTION_COLUMNS,
    GENE_MODEL_COLUMN,
};
use crate::loading::TsvRoute;
use crate::parsing::fasta::{read_fasta_headers_from, FastaHeader};
use crate::parsing::gff::GffReader;
use crate::parsing::tsv::TsvReader;
use crate::parsing::{open_text, ParseError};
use crate::session::Session;
use crate::store::{EntitySink, SinkError};
use crate::utils::validation::file_name;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error(transparent)]
    Header(#[from] HeaderError),

    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Input file family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Gff,
    Tsv,
    Fasta,
}

/// Non-fatal condition that stopped a file from being loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Diagnostic {
    /// No loader accepts the file name
    UnroutableFile,
}

/// Summary of one loaded file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: String,
    pub kind: InputKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<TsvRoute>,
    /// Records or rows read, header and comments excluded
    pub records_read: usize,
    /// Entities committed, per class
    pub emitted: BTreeMap<&'static str, usize>,
    /// Dropped GFF3 records, per reason
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub dropped: BTreeMap<&'static str, usize>,
    /// TSV rows whose gene key was rejected
    pub rows_skipped: usize,
    /// Description rows for a gene that already had one
    pub rows_ignored: usize,
    /// Alias groups flushed
    pub alias_groups: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<Diagnostic>,
}

impl FileReport {
    fn new(path: &str, kind: InputKind) -> Self {
        Self {
            path: path.to_string(),
            kind,
            source: None,
            route: None,
            records_read: 0,
            emitted: BTreeMap::new(),
            dropped: BTreeMap::new(),
            rows_skipped: 0,
            rows_ignored: 0,
            alias_groups: 0,
            diagnostic: None,
        }
    }

    /// Total entities committed
    pub fn total_emitted(&self) -> usize {
        self.emitted.values().sum()
    }

    /// Total dropped records
    pub fn total_dropped(&self) -> usize {
        self.dropped.values().sum()
    }

    fn log_summary(&self) {
        info!(
            file = %self.path,
            read = self.records_read,
            emitted = self.total_emitted(),
            dropped = self.total_dropped(),
            skipped = self.rows_skipped,
            "loaded file"
        );
    }
}

/// Write buffered entities to the sink, counting them per class
fn commit(
    entities: Vec<Entity>,
    sink: &mut dyn EntitySink,
    report: &mut FileReport,
) -> Result<(), SinkError> {
    for entity in &entities {
        sink.store(entity)?;
        *report.emitted.entry(entity.class_name()).or_default() += 1;
    }
    sink.flush()
}

/// Load one GFF3 file.
///
/// # Errors
///
/// Returns `IngestError` on the first read, classification or sink error.
/// Nothing from the file reaches the sink in that case.
pub fn ingest_gff(
    path: &Path,
    classifier: &FeatureClassifier,
    organism: Organism,
    sink: &mut dyn EntitySink,
) -> Result<FileReport, IngestError> {
    let reader = open_text(path)?;
    ingest_gff_reader(&path.display().to_string(), reader, classifier, organism, sink)
}

/// Load GFF3 records from an open stream.
///
/// # Errors
///
/// See [`ingest_gff`].
pub fn ingest_gff_reader<R: BufRead>(
    name: &str,
    reader: R,
    classifier: &FeatureClassifier,
    organism: Organism,
    sink: &mut dyn EntitySink,
) -> Result<FileReport, IngestError> {
    let mut report = FileReport::new(name, InputKind::Gff);
    report.source = Some(classifier.profile().source);

    let mut session = Session::new(organism);
    let mut pending = Vec::new();

    let mut gff_reader = GffReader::new(reader);
    for record in gff_reader.records() {
        let record = record?;
        report.records_read += 1;

        match classifier.classify(&record, &mut session)? {
            Classification::Feature { feature, created } => {
                pending.extend(created);
                pending.push(Entity::from(feature));
            }
            Classification::Dropped(reason) => {
                *report.dropped.entry(reason.as_str()).or_default() += 1;
            }
        }
    }

    pending.extend(session.finish().into_iter().map(Entity::from));
    commit(pending, sink, &mut report)?;
    report.log_summary();
    Ok(report)
}

/// Load one TAIR gene table, routed by file name.
///
/// Files no loader accepts are reported with [`Diagnostic::UnroutableFile`]
/// and nothing is read from them.
///
/// # Errors
///
/// Returns `IngestError` on the first read or sink error, including a data
/// row with too few columns.
pub fn ingest_tsv(
    path: &Path,
    shape: AnnotationShape,
    organism: Organism,
    sink: &mut dyn EntitySink,
) -> Result<FileReport, IngestError> {
    let name = path.display().to_string();
    let Some(route) = TsvRoute::for_file_name(&file_name(path)) else {
        warn!(file = %name, "no loader for file name; skipping");
        let mut report = FileReport::new(&name, InputKind::Tsv);
        report.diagnostic = Some(Diagnostic::UnroutableFile);
        return Ok(report);
    };

    let reader = open_text(path)?;
    ingest_tsv_reader(&name, route, reader, shape, organism, sink)
}

/// Load TSV rows from an open stream with an explicit route.
///
/// # Errors
///
/// See [`ingest_tsv`].
pub fn ingest_tsv_reader<R: BufRead>(
    name: &str,
    route: TsvRoute,
    reader: R,
    shape: AnnotationShape,
    organism: Organism,
    sink: &mut dyn EntitySink,
) -> Result<FileReport, IngestError> {
    let mut report = FileReport::new(name, InputKind::Tsv);
    report.route = Some(route);

    let mut session = Session::new(organism);
    let rows = TsvReader::new(reader);

    let annotations = match route {
        TsvRoute::GeneAliases => {
            load_aliases(rows, &mut session, &mut report)?;
            Vec::new()
        }
        TsvRoute::FunctionalDescriptions => {
            load_descriptions(rows, shape, &mut session, &mut report)?
        }
    };

    let mut pending: Vec<Entity> = session.finish().into_iter().map(Entity::from).collect();
    pending.extend(annotations.into_iter().map(Entity::FunctionalAnnotation));
    commit(pending, sink, &mut report)?;
    report.log_summary();
    Ok(report)
}

fn load_aliases<R: BufRead>(
    rows: TsvReader<R>,
    session: &mut Session,
    report: &mut FileReport,
) -> Result<(), ParseError> {
    let mut aggregator = AliasAggregator::new();

    for row in rows {
        let row = row?;
        report.records_read += 1;

        let raw_gene = row.field(GENE_COLUMN)?;
        let alias = row.field(ALIAS_COLUMN)?;
        let Some(gene_id) = accept_gene_id(raw_gene) else {
            debug!(line = row.line_number, gene = raw_gene, "skipping alias row with unexpected gene key");
            report.rows_skipped += 1;
            continue;
        };

        if aggregator.push(&gene_id, alias, session).is_some() {
            report.alias_groups += 1;
        }
    }

    if aggregator.finish(session).is_some() {
        report.alias_groups += 1;
    }
    Ok(())
}

fn load_descriptions<R: BufRead>(
    rows: TsvReader<R>,
    shape: AnnotationShape,
    session: &mut Session,
    report: &mut FileReport,
) -> Result<Vec<GeneFunctionalAnnotation>, ParseError> {
    let mut loader = AnnotationLoader::new(shape);
    let mut linked = Vec::new();
    let [short_column, curator_column, computational_column] = DESCRIPTION_COLUMNS;

    for row in rows {
        let row = row?;
        report.records_read += 1;

        let raw_model = row.field(GENE_MODEL_COLUMN)?;
        let short_description = row.field(short_column)?;
        let curator_summary = row.field(curator_column)?;
        let computational_description = row.field(computational_column)?;

        let Some(gene_id) = accept_gene_model(raw_model) else {
            debug!(line = row.line_number, model = raw_model, "skipping non-representative gene model");
            report.rows_skipped += 1;
            continue;
        };

        let annotation = GeneFunctionalAnnotation::new(
            gene_id,
            short_description,
            curator_summary,
            computational_description,
        );
        match loader.load(annotation, session) {
            AnnotationOutcome::Decorated => {}
            AnnotationOutcome::Linked(annotation) => linked.push(annotation),
            AnnotationOutcome::Ignored => report.rows_ignored += 1,
        }
    }

    Ok(linked)
}

/// Load one NCBI FASTA file as chromosome entities.
///
/// # Errors
///
/// Returns `IngestError::Header` if a definition line names no known
/// chromosome, or `IngestError::Parse` if the file cannot be read.
pub fn ingest_fasta(path: &Path, sink: &mut dyn EntitySink) -> Result<FileReport, IngestError> {
    let reader = open_text(path)?;
    ingest_fasta_reader(&path.display().to_string(), reader, sink)
}

/// Load FASTA records from an open stream.
///
/// # Errors
///
/// See [`ingest_fasta`].
pub fn ingest_fasta_reader<R: BufRead>(
    name: &str,
    reader: R,
    sink: &mut dyn EntitySink,
) -> Result<FileReport, IngestError> {
    let mut report = FileReport::new(name, InputKind::Fasta);
    let headers = read_fasta_headers_from(reader)?;
    report.records_read = headers.len();

    let mut pending = Vec::with_capacity(headers.len());
    for FastaHeader { definition, length } in headers {
        let id = classify_header(&definition)?;
        debug!(header = %definition, chromosome = %id, "classified FASTA header");
        pending.push(Entity::from(Chromosome::new(id, length)));
    }

    commit(pending, sink, &mut report)?;
    report.log_summary();
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::profile::SourceProfile;
    use crate::store::MemorySink;

    fn tair_classifier() -> FeatureClassifier {
        FeatureClassifier::new(SourceProfile::for_source(Source::Tair))
    }

    #[test]
    fn test_gff_commits_shared_entities_before_features() {
        let gff = "##gff-version 3
Chr1\tAraport11\tgene\t3631\t5899\t.\t+\t.\tID=AT1G01010;symbol=NAC001
Chr1\tAraport11\tmRNA\t3631\t5899\t.\t+\t.\tID=AT1G01010.1;Parent=AT1G01010;Dbxref=PMID:11,UniProt:Q0WV96
Chr1\tAraport11\tmRNA\t3631\t5899\t.\t+\t.\tID=AT1G01010.2;Parent=AT1G01010;Dbxref=PMID:11
ChrC\tAraport11\tregion\t1\t154478\t.\t+\t.\tID=ChrC
scaffold_9\tAraport11\tgene\t1\t10\t.\t+\t.\tID=AT9G99999
";
        let mut sink = MemorySink::new();
        let report = ingest_gff_reader(
            "test.gff3",
            gff.as_bytes(),
            &tair_classifier(),
            Organism::default(),
            &mut sink,
        )
        .unwrap();

        let classes: Vec<&str> = sink.entities.iter().map(Entity::class_name).collect();
        assert_eq!(
            classes,
            vec!["Gene", "Publication", "Protein", "MRNA", "MRNA"]
        );
        assert_eq!(report.records_read, 5);
        assert_eq!(report.emitted["MRNA"], 2);
        assert_eq!(report.emitted["Publication"], 1);
        assert_eq!(report.dropped["region"], 1);
        assert_eq!(report.dropped["foreign_sequence"], 1);
    }

    #[test]
    fn test_gff_failure_commits_nothing() {
        let gff = "Chr1\tAraport11\tgene\t1\t10\t.\t+\t.\tID=AT1G01010
Chr1\tAraport11\tmRNA\t1\t10\t.\t+\t.\tID=AT1G01010.1;Dbxref=PMID12345
";
        let mut sink = MemorySink::new();
        let result = ingest_gff_reader(
            "bad.gff3",
            gff.as_bytes(),
            &tair_classifier(),
            Organism::default(),
            &mut sink,
        );
        assert!(matches!(result, Err(IngestError::Classify(_))));
        assert!(sink.entities.is_empty());
    }

    #[test]
    fn test_alias_file_emits_decorated_genes() {
        let tsv = "name\tfull_name\nAT1G01010\tANAC001\nAT1g01010\tNAC001\nAT1G01020\tARV1\nAT1G0102\tshort\n";
        let mut sink = MemorySink::new();
        let report = ingest_tsv_reader(
            "gene_aliases_20240331.txt",
            TsvRoute::GeneAliases,
            tsv.as_bytes(),
            AnnotationShape::Decorate,
            Organism::default(),
            &mut sink,
        )
        .unwrap();

        assert_eq!(report.alias_groups, 2);
        assert_eq!(report.rows_skipped, 1);
        let json = serde_json::to_value(&sink.entities[0]).unwrap();
        assert_eq!(json["primaryIdentifier"], "AT1G01010");
        assert_eq!(json["tairAliases"], "ANAC001, NAC001");
    }

    #[test]
    fn test_linked_descriptions_follow_genes() {
        let tsv = "Model_name\tType\tShort_description\tCurator_summary\tComputational_description
AT1G01010.1\tprotein_coding\tNAC domain 1\t\tNAC domain containing protein 1
AT1G01010.2\tprotein_coding\tNAC domain 1\t\tsecond model
AT1G01020.1\tprotein_coding\tARV1\tsummary\t
AT1G01020.1\tprotein_coding\tduplicate\t\t
";
        let mut sink = MemorySink::new();
        let report = ingest_tsv_reader(
            "Araport11_functional_descriptions_20240331.txt",
            TsvRoute::FunctionalDescriptions,
            tsv.as_bytes(),
            AnnotationShape::Linked,
            Organism::default(),
            &mut sink,
        )
        .unwrap();

        let classes: Vec<&str> = sink.entities.iter().map(Entity::class_name).collect();
        assert_eq!(
            classes,
            vec![
                "Gene",
                "Gene",
                "TairFunctionalAnnotation",
                "TairFunctionalAnnotation"
            ]
        );
        assert_eq!(report.rows_skipped, 1);
        assert_eq!(report.rows_ignored, 1);
    }

    #[test]
    fn test_short_row_is_fatal() {
        let tsv = "header\nAT1G01010.1\tprotein_coding\tNAC\n";
        let mut sink = MemorySink::new();
        let result = ingest_tsv_reader(
            "Araport11_functional_descriptions_x.txt",
            TsvRoute::FunctionalDescriptions,
            tsv.as_bytes(),
            AnnotationShape::Decorate,
            Organism::default(),
            &mut sink,
        );
        assert!(matches!(
            result,
            Err(IngestError::Parse(ParseError::InvalidFormat(_)))
        ));
        assert!(sink.entities.is_empty());
    }

    #[test]
    fn test_unroutable_file_is_a_diagnostic() {
        let mut sink = MemorySink::new();
        let report = ingest_tsv(
            Path::new("/nonexistent/TAIR10_locus_history.txt"),
            AnnotationShape::Decorate,
            Organism::default(),
            &mut sink,
        )
        .unwrap();
        assert_eq!(report.diagnostic, Some(Diagnostic::UnroutableFile));
        assert_eq!(report.records_read, 0);
        assert!(sink.entities.is_empty());
    }

    #[test]
    fn test_fasta_chromosomes() {
        let fasta = b">NC_003074.8 Arabidopsis thaliana chromosome 3 sequence\nACGTAC\n>NC_000932.1 Arabidopsis thaliana chloroplast, complete genome\nACG\n";
        let mut sink = MemorySink::new();
        let report = ingest_fasta_reader("genome.fna", &fasta[..], &mut sink).unwrap();

        assert_eq!(report.emitted["Chromosome"], 2);
        let first = serde_json::to_value(&sink.entities[0]).unwrap();
        assert_eq!(first["primaryIdentifier"], "Chr3");
        assert_eq!(first["length"], 6);
        let second = serde_json::to_value(&sink.entities[1]).unwrap();
        assert_eq!(second["primaryIdentifier"], "ChrC");
    }

    #[test]
    fn test_fasta_unknown_header_commits_nothing() {
        let fasta = b">NC_003070.9 Arabidopsis thaliana chromosome 1 sequence\nA\n>plasmid pX\nA\n";
        let mut sink = MemorySink::new();
        let result = ingest_fasta_reader("genome.fna", &fasta[..], &mut sink);
        assert!(matches!(result, Err(IngestError::Header(_))));
        assert!(sink.entities.is_empty());
    }
}
