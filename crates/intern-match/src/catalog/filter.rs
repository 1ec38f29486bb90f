use super::domain::{Catalog, InternshipRecord};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;

/// Dropdown value meaning "no constraint".
pub const ALL: &str = "All";

/// A single equality constraint on one column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Criterion {
    #[default]
    All,
    Exactly(String),
}

impl Criterion {
    /// Maps the `All` sentinel to no constraint; anything else, including "", must match exactly.
    pub fn parse(value: impl Into<String>) -> Self {
        let value = value.into();
        if value == ALL {
            Criterion::All
        } else {
            Criterion::Exactly(value)
        }
    }

    pub fn matches(&self, field: &str) -> bool {
        match self {
            Criterion::All => true,
            Criterion::Exactly(expected) => expected == field,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Criterion::All)
    }
}

impl Serialize for Criterion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Criterion::All => serializer.serialize_str(ALL),
            Criterion::Exactly(value) => serializer.serialize_str(value),
        }
    }
}

impl<'de> Deserialize<'de> for Criterion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Criterion::parse)
    }
}

/// User-selected constraints. Absent criteria default to `All`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub location: Criterion,
    #[serde(default)]
    pub duration: Criterion,
    #[serde(default)]
    pub education_level: Criterion,
}

impl FilterCriteria {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_location(mut self, value: impl Into<String>) -> Self {
        self.location = Criterion::parse(value);
        self
    }

    pub fn with_duration(mut self, value: impl Into<String>) -> Self {
        self.duration = Criterion::parse(value);
        self
    }

    pub fn with_education_level(mut self, value: impl Into<String>) -> Self {
        self.education_level = Criterion::parse(value);
        self
    }

    pub fn is_unconstrained(&self) -> bool {
        self.location.is_all() && self.duration.is_all() && self.education_level.is_all()
    }

    pub fn accepts(&self, record: &InternshipRecord) -> bool {
        self.location.matches(&record.location)
            && self.duration.matches(&record.duration)
            && self.education_level.matches(&record.education_level)
    }
}

/// Returns the records accepted by every active criterion, in catalog order.
pub fn filter<'a>(catalog: &'a Catalog, criteria: &FilterCriteria) -> Vec<&'a InternshipRecord> {
    catalog
        .iter()
        .filter(|record| criteria.accepts(record))
        .collect()
}

/// Distinct values per filterable column, sorted for display in dropdowns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub locations: Vec<String>,
    pub durations: Vec<String>,
    pub education_levels: Vec<String>,
}

impl FilterOptions {
    /// Blank cells are skipped.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            locations: distinct(catalog, |r| r.location.as_str()),
            durations: distinct(catalog, |r| r.duration.as_str()),
            education_levels: distinct(catalog, |r| r.education_level.as_str()),
        }
    }
}

fn distinct(catalog: &Catalog, pick: impl Fn(&InternshipRecord) -> &str) -> Vec<String> {
    catalog
        .iter()
        .map(pick)
        .filter(|value| !value.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
