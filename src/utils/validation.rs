//! Centralized validation and normalization helpers.

use std::path::Path;

/// Length of an AGI gene locus identifier such as `AT1G01010`
pub const GENE_ID_LENGTH: usize = 9;

/// Prefix shared by all *Arabidopsis thaliana* AGI locus identifiers
pub const GENE_ID_PREFIX: &str = "AT";

/// Suffix of the representative gene model in functional description files
pub const REPRESENTATIVE_MODEL_SUFFIX: &str = ".1";

/// Normalize a gene key from a TAIR alias file.
///
/// Accepts only keys of the form `AT1G01010` (prefix checked before
/// upper-casing, exact length). Returns `None` for anything else.
///
/// # Examples
///
/// ```
/// use bar_loader::utils::validation::normalize_alias_gene_id;
///
/// assert_eq!(normalize_alias_gene_id("AT1g01010"), Some("AT1G01010".to_string()));
/// assert_eq!(normalize_alias_gene_id("AT1G01010.1"), None);
/// assert_eq!(normalize_alias_gene_id("at1g01010"), None);
/// ```
#[must_use]
pub fn normalize_alias_gene_id(raw: &str) -> Option<String> {
    if raw.starts_with(GENE_ID_PREFIX) && raw.len() == GENE_ID_LENGTH {
        Some(raw.to_uppercase())
    } else {
        None
    }
}

/// Normalize a gene model key from a functional description file.
///
/// Accepts `AT1G01010.1` style keys (11 characters ending in `.1`), strips the
/// model suffix and upper-cases the rest.
///
/// # Examples
///
/// ```
/// use bar_loader::utils::validation::normalize_description_gene_id;
///
/// assert_eq!(normalize_description_gene_id("AT1G01010.1"), Some("AT1G01010".to_string()));
/// assert_eq!(normalize_description_gene_id("AT1G01010.2"), None);
/// assert_eq!(normalize_description_gene_id("AT1G01010"), None);
/// ```
#[must_use]
pub fn normalize_description_gene_id(raw: &str) -> Option<String> {
    if raw.starts_with(GENE_ID_PREFIX)
        && raw.ends_with(REPRESENTATIVE_MODEL_SUFFIX)
        && raw.len() == GENE_ID_LENGTH + REPRESENTATIVE_MODEL_SUFFIX.len()
    {
        let stripped = &raw[..raw.len() - REPRESENTATIVE_MODEL_SUFFIX.len()];
        Some(stripped.to_uppercase())
    } else {
        None
    }
}

/// Return the value as an owned string unless it is empty or whitespace
#[must_use]
pub fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Check if the path is a gzipped file
#[must_use]
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// File name component of a path, lossily converted
#[must_use]
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_gene_id_upper_cases() {
        assert_eq!(
            normalize_alias_gene_id("ATMG00010"),
            Some("ATMG00010".to_string())
        );
        assert_eq!(
            normalize_alias_gene_id("AT5g67640"),
            Some("AT5G67640".to_string())
        );
    }

    #[test]
    fn test_alias_gene_id_rejects_wrong_shape() {
        assert_eq!(normalize_alias_gene_id(""), None);
        assert_eq!(normalize_alias_gene_id("AT1G0101"), None);
        assert_eq!(normalize_alias_gene_id("locus_name"), None);
    }

    #[test]
    fn test_description_gene_id() {
        assert_eq!(
            normalize_description_gene_id("AT1g01020.1"),
            Some("AT1G01020".to_string())
        );
        assert_eq!(normalize_description_gene_id("AT1G01020.10"), None);
        assert_eq!(normalize_description_gene_id("Model_name"), None);
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank("x"), Some("x".to_string()));
        assert_eq!(non_blank(""), None);
        assert_eq!(non_blank(" \t"), None);
    }

    #[test]
    fn test_is_gzipped() {
        assert!(is_gzipped(Path::new("Araport11.gff3.gz")));
        assert!(is_gzipped(Path::new("genome.FA.BGZ")));
        assert!(!is_gzipped(Path::new("gene_aliases_20240101.txt")));
    }
}
