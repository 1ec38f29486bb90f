//! Internship catalog: loading from CSV (or the seed fixture) and exact-match filtering.

pub mod domain;
pub mod filter;
mod mapping;
mod parser;
mod seed;

use crate::config::CatalogConfig;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{info, warn};

pub use domain::{Catalog, CatalogSource, InternshipRecord};
pub use filter::{filter, Criterion, FilterCriteria, FilterOptions};
pub use mapping::CatalogField;
pub use parser::parse_catalog;
pub use seed::{seed_catalog, write_catalog};

/// Why the catalog data could not be produced.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read internship data: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid internship CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("internship CSV is missing required columns: {}", FieldList(.0))]
    MissingColumns(Vec<CatalogField>),
    #[error("internship CSV header '{header}' binds '{field}' more than once")]
    DuplicateColumn { field: CatalogField, header: String },
    #[error("could not write seed data to {}: {source}", .path.display())]
    Seed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

struct FieldList<'a>(&'a [CatalogField]);

impl fmt::Display for FieldList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, field) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}")?;
        }
        Ok(())
    }
}

/// Reads and parses the catalog file at `path`.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let file = std::fs::File::open(path)?;
    parse_catalog(file)
}

/// Outcome of a catalog load, including the degraded case.
#[derive(Debug, Clone, Serialize)]
pub struct LoadedCatalog {
    #[serde(skip)]
    pub catalog: Catalog,
    pub source: CatalogSource,
    pub path: PathBuf,
    /// User-facing notice when the data could not be loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl LoadedCatalog {
    pub fn is_available(&self) -> bool {
        self.source != CatalogSource::Unavailable
    }
}

/// Loads the catalog once and hands out the same result on every later call.
#[derive(Debug)]
pub struct CatalogLoader {
    path: PathBuf,
    loaded: OnceLock<LoadedCatalog>,
}

impl CatalogLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            loaded: OnceLock::new(),
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(config.data_path.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses the data file, or seeds it when absent. Failures degrade to an empty catalog.
    pub fn load(&self) -> &LoadedCatalog {
        self.loaded.get_or_init(|| load_or_seed(&self.path))
    }
}

fn load_or_seed(path: &Path) -> LoadedCatalog {
    let attempt = match path.try_exists() {
        Ok(false) => seed::seed_file(path).map(|catalog| (catalog, CatalogSource::Seeded)),
        _ => load_from_path(path).map(|catalog| (catalog, CatalogSource::File)),
    };

    match attempt {
        Ok((catalog, source)) => {
            info!(
                path = %path.display(),
                source = source.label(),
                postings = catalog.len(),
                "internship catalog loaded"
            );
            LoadedCatalog {
                catalog,
                source,
                path: path.to_path_buf(),
                warning: None,
            }
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "internship catalog unavailable");
            LoadedCatalog {
                catalog: Catalog::empty(),
                source: CatalogSource::Unavailable,
                path: path.to_path_buf(),
                warning: Some(format!(
                    "Internship data is unavailable ({err}); no postings can be shown."
                )),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_message_lists_fields() {
        let err = CatalogError::MissingColumns(vec![CatalogField::Stipend, CatalogField::Duration]);
        assert_eq!(
            err.to_string(),
            "internship CSV is missing required columns: stipend, duration"
        );
    }

    #[test]
    fn load_from_path_surfaces_io_errors() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = load_from_path(dir.path().join("absent.csv")).expect_err("no file");
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn loader_memoizes_first_result() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("internship_dataset.csv");
        let loader = CatalogLoader::new(&path);

        let first = loader.load().catalog.clone();
        std::fs::remove_file(&path).expect("seed file written");
        let second = loader.load();

        assert!(first.shares_rows_with(&second.catalog));
        assert_eq!(second.source, CatalogSource::Seeded);
        assert!(!path.exists(), "second call must not touch the filesystem");
    }

    #[test]
    fn unreadable_data_degrades_to_empty_catalog() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("internship_dataset.csv");
        std::fs::write(&path, "company,position\nAcme\n").expect("write fixture");

        let loaded = CatalogLoader::new(&path).load().clone();
        assert!(loaded.catalog.is_empty());
        assert!(!loaded.is_available());
        let warning = loaded.warning.expect("warning present");
        assert!(warning.contains("missing required columns"));
    }
}
