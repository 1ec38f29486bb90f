use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Typed column of the canonical catalog schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CatalogField {
    Company,
    Position,
    Location,
    SkillsRequired,
    EducationLevel,
    Duration,
    Stipend,
    Description,
}

impl CatalogField {
    /// Canonical column order, used for the seed file header.
    pub const ALL: [CatalogField; 8] = [
        CatalogField::Company,
        CatalogField::Position,
        CatalogField::Location,
        CatalogField::SkillsRequired,
        CatalogField::EducationLevel,
        CatalogField::Duration,
        CatalogField::Stipend,
        CatalogField::Description,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            CatalogField::Company => "company",
            CatalogField::Position => "position",
            CatalogField::Location => "location",
            CatalogField::SkillsRequired => "skills_required",
            CatalogField::EducationLevel => "education_level",
            CatalogField::Duration => "duration",
            CatalogField::Stipend => "stipend",
            CatalogField::Description => "description",
        }
    }
}

impl fmt::Display for CatalogField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

static HEADER_MAP: OnceLock<HashMap<&'static str, CatalogField>> = OnceLock::new();

/// Binds an already trimmed header cell to a catalog field. Matching is exact.
pub(crate) fn field_for_header(header: &str) -> Option<CatalogField> {
    header_map().get(header).copied()
}

fn header_map() -> &'static HashMap<&'static str, CatalogField> {
    HEADER_MAP.get_or_init(|| {
        const ALIASES: &[(&str, CatalogField)] = &[
            // Older exports of the student-profile sheet
            ("Education", CatalogField::EducationLevel),
            ("location Preference", CatalogField::Location),
        ];

        let mut map = HashMap::with_capacity(CatalogField::ALL.len() + ALIASES.len());
        for field in CatalogField::ALL {
            map.insert(field.header(), field);
        }
        for (alias, field) in ALIASES {
            map.insert(*alias, *field);
        }
        map
    })
}

/// Positions of each canonical field within a header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ColumnBinding {
    positions: HashMap<CatalogField, usize>,
    pub(crate) unknown: Vec<String>,
}

impl ColumnBinding {
    pub(crate) fn position(&self, field: CatalogField) -> usize {
        self.positions[&field]
    }
}

/// Reasons a header row cannot be bound to the canonical schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BindingError {
    Missing(Vec<CatalogField>),
    Duplicate { field: CatalogField, header: String },
}

pub(crate) fn bind_headers<'a, I>(headers: I) -> Result<ColumnBinding, BindingError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut positions = HashMap::with_capacity(CatalogField::ALL.len());
    let mut unknown = Vec::new();

    for (index, header) in headers.into_iter().enumerate() {
        match field_for_header(header) {
            Some(field) => {
                if positions.insert(field, index).is_some() {
                    return Err(BindingError::Duplicate {
                        field,
                        header: header.to_string(),
                    });
                }
            }
            None => unknown.push(header.to_string()),
        }
    }

    let missing: Vec<CatalogField> = CatalogField::ALL
        .into_iter()
        .filter(|field| !positions.contains_key(field))
        .collect();
    if !missing.is_empty() {
        return Err(BindingError::Missing(missing));
    }

    Ok(ColumnBinding { positions, unknown })
}
