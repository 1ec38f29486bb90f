use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::sync::Arc;

/// One internship posting. Every field is carried as text exactly as loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternshipRecord {
    pub company: String,
    pub position: String,
    pub location: String,
    /// Free-text comma list; never split into individual skills.
    pub skills_required: String,
    pub education_level: String,
    pub duration: String,
    /// Currency and period text such as `₹15,000/month`.
    pub stipend: String,
    pub description: String,
}

/// Read-only, ordered set of postings shared by every consumer.
///
/// Clones are cheap and point at the same rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Arc<[InternshipRecord]>,
}

impl Catalog {
    pub fn new(records: Vec<InternshipRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn records(&self) -> &[InternshipRecord] {
        &self.records
    }

    /// True when both handles point at the same underlying rows.
    pub fn shares_rows_with(&self, other: &Catalog) -> bool {
        Arc::ptr_eq(&self.records, &other.records)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}

impl Deref for Catalog {
    type Target = [InternshipRecord];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl From<Vec<InternshipRecord>> for Catalog {
    fn from(records: Vec<InternshipRecord>) -> Self {
        Self::new(records)
    }
}

impl Serialize for Catalog {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.records().serialize(serializer)
    }
}

/// Where a loaded catalog came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogSource {
    /// Parsed from an existing data file.
    File,
    /// Data file was absent; the seed fixture was written and returned.
    Seeded,
    /// The data could not be read or seeded; the catalog is empty.
    Unavailable,
}

impl CatalogSource {
    pub fn label(&self) -> &'static str {
        match self {
            CatalogSource::File => "data file",
            CatalogSource::Seeded => "seed fixture",
            CatalogSource::Unavailable => "unavailable",
        }
    }
}
