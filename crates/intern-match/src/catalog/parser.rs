use super::domain::{Catalog, InternshipRecord};
use super::mapping::{bind_headers, BindingError, CatalogField, ColumnBinding};
use super::CatalogError;
use csv::StringRecord;
use std::io::Read;
use tracing::warn;

/// Parses a catalog CSV. Header cells are trimmed before binding; data cells are kept as-is.
pub fn parse_catalog<R: Read>(reader: R) -> Result<Catalog, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let binding = bind_headers(csv_reader.headers()?.iter()).map_err(|err| match err {
        BindingError::Missing(fields) => CatalogError::MissingColumns(fields),
        BindingError::Duplicate { field, header } => {
            CatalogError::DuplicateColumn { field, header }
        }
    })?;

    if !binding.unknown.is_empty() {
        warn!(columns = ?binding.unknown, "ignoring unknown catalog columns");
    }

    let mut records = Vec::new();
    for row in csv_reader.records() {
        records.push(record_from_row(&binding, &row?));
    }

    Ok(Catalog::new(records))
}

fn record_from_row(binding: &ColumnBinding, row: &StringRecord) -> InternshipRecord {
    // Rows are length-checked by the csv reader, so every bound position exists.
    let cell = |field: CatalogField| row[binding.position(field)].to_string();

    InternshipRecord {
        company: cell(CatalogField::Company),
        position: cell(CatalogField::Position),
        location: cell(CatalogField::Location),
        skills_required: cell(CatalogField::SkillsRequired),
        education_level: cell(CatalogField::EducationLevel),
        duration: cell(CatalogField::Duration),
        stipend: cell(CatalogField::Stipend),
        description: cell(CatalogField::Description),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str =
        "company,position,location,skills_required,education_level,duration,stipend,description";

    #[test]
    fn parses_rows_in_file_order() {
        let csv = format!(
            "{HEADER}\n\
Acme,Intern A,Pune,Rust,Bachelor,3 months,₹1/month,First\n\
Beta,Intern B,Remote,\"Go, SQL\",Master,6 months,₹2/month,Second\n"
        );
        let catalog = parse_catalog(Cursor::new(csv)).expect("parses");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].company, "Acme");
        assert_eq!(catalog[1].skills_required, "Go, SQL");
        assert_eq!(catalog[1].location, "Remote");
    }

    #[test]
    fn trims_headers_but_not_cells() {
        let csv = " company , position,location ,skills_required,\tEducation ,duration,stipend,description\n\
Acme, Intern ,Pune ,Rust,Bachelor,3 months,₹1/month,Desc\n";
        let catalog = parse_catalog(Cursor::new(csv)).expect("parses");
        assert_eq!(catalog[0].education_level, "Bachelor");
        assert_eq!(catalog[0].position, " Intern ");
        assert_eq!(catalog[0].location, "Pune ");
    }

    #[test]
    fn header_only_file_is_an_empty_catalog() {
        let catalog = parse_catalog(Cursor::new(format!("{HEADER}\n"))).expect("parses");
        assert!(catalog.is_empty());
    }

    #[test]
    fn missing_columns_are_reported() {
        let err = parse_catalog(Cursor::new("company,position\nAcme,Intern\n"))
            .expect_err("schema incomplete");
        match err {
            CatalogError::MissingColumns(fields) => {
                assert!(fields.contains(&CatalogField::Description));
                assert!(!fields.contains(&CatalogField::Company));
            }
            other => panic!("expected missing columns, got {other:?}"),
        }
    }

    #[test]
    fn applicant_columns_are_ignored() {
        let csv = "company,position,location,skills_required,education_level,duration,stipend,description,Sector Interest\n\
Acme,Intern,Pune,Rust,Bachelor,3 months,₹1/month,Desc,Fintech\n";
        let catalog = parse_catalog(Cursor::new(csv)).expect("unknown column tolerated");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].description, "Desc");
        assert_eq!(catalog[0].education_level, "Bachelor");
    }

    #[test]
    fn alias_colliding_with_canonical_column_is_rejected() {
        let csv = format!("{HEADER},Education\nAcme,Intern,Pune,Rust,Bachelor,3 months,x,y,Master\n");
        let err = parse_catalog(Cursor::new(csv)).expect_err("two education columns");
        match err {
            CatalogError::DuplicateColumn { field, header } => {
                assert_eq!(field, CatalogField::EducationLevel);
                assert_eq!(header, "Education");
            }
            other => panic!("expected duplicate column, got {other:?}"),
        }
    }

    #[test]
    fn ragged_rows_fail_the_parse() {
        let csv = format!("{HEADER}\nAcme,Intern,Pune\n");
        let err = parse_catalog(Cursor::new(csv)).expect_err("short row");
        assert!(matches!(err, CatalogError::Csv(_)));
    }

    #[test]
    fn invalid_utf8_fails_the_parse() {
        let mut bytes = format!("{HEADER}\n").into_bytes();
        bytes.extend_from_slice(b"Acme,Intern,\xff\xfe,Rust,Bachelor,3 months,x,y\n");
        let err = parse_catalog(Cursor::new(bytes)).expect_err("bad encoding");
        assert!(matches!(err, CatalogError::Csv(_)));
    }
}
