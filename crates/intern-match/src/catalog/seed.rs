use super::domain::{Catalog, InternshipRecord};
use super::CatalogError;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

const SEED_ROWS: [[&str; 8]; 8] = [
    [
        "TechCorp Solutions",
        "Software Developer Intern",
        "Bangalore",
        "Python, Java, SQL",
        "Bachelor",
        "3 months",
        "₹15,000/month",
        "Build and test backend services alongside the platform engineering team.",
    ],
    [
        "DataWise Analytics",
        "Data Analyst Intern",
        "Mumbai",
        "Python, Excel, Statistics",
        "Bachelor",
        "6 months",
        "₹12,000/month",
        "Clean client datasets and prepare weekly dashboards for the analytics desk.",
    ],
    [
        "CloudTech Systems",
        "Product Manager Intern",
        "Remote",
        "Communication, Agile, Market Research",
        "Master",
        "3 months",
        "₹20,000/month",
        "Gather user feedback and help plan the roadmap for a cloud storage product.",
    ],
    [
        "GreenLeaf Energy",
        "Research Intern",
        "Pune",
        "Data Analysis, MATLAB, Research",
        "Master",
        "6 months",
        "₹18,000/month",
        "Model solar output for rural microgrid pilots with the research group.",
    ],
    [
        "FinEdge Capital",
        "Finance Intern",
        "Delhi",
        "Excel, Accounting, Financial Modeling",
        "Bachelor",
        "2 months",
        "₹10,000/month",
        "Support the investment team with company research and valuation models.",
    ],
    [
        "HealthPlus Labs",
        "Biotech Research Intern",
        "Hyderabad",
        "Biology, Lab Techniques, Documentation",
        "PhD",
        "6 months",
        "₹25,000/month",
        "Run assay experiments and document results for an ongoing diagnostics study.",
    ],
    [
        "BrightMinds EdTech",
        "Content Writing Intern",
        "Chennai",
        "Writing, Editing, SEO",
        "High School",
        "1 month",
        "₹5,000/month",
        "Write and edit short lessons and blog posts for school students.",
    ],
    [
        "PixelCraft Studios",
        "UI/UX Design Intern",
        "Bangalore",
        "Figma, Prototyping, User Research",
        "Bachelor",
        "3 months",
        "₹14,000/month",
        "Prototype mobile screens and run usability sessions with the design lead.",
    ],
];

/// The fixed eight-posting dataset used when no data file exists.
pub fn seed_catalog() -> Catalog {
    let records = SEED_ROWS
        .iter()
        .map(|row| InternshipRecord {
            company: row[0].to_string(),
            position: row[1].to_string(),
            location: row[2].to_string(),
            skills_required: row[3].to_string(),
            education_level: row[4].to_string(),
            duration: row[5].to_string(),
            stipend: row[6].to_string(),
            description: row[7].to_string(),
        })
        .collect();

    Catalog::new(records)
}

/// Writes `catalog` to `path` in the canonical schema, replacing any existing file.
///
/// Each call stages rows in its own temp file beside the target and persists it
/// over `path`, so readers only ever see a complete file.
pub fn write_catalog(path: &Path, catalog: &Catalog) -> Result<(), CatalogError> {
    let seed_err = |source: std::io::Error| CatalogError::Seed {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent).map_err(seed_err)?;
            parent
        }
        None => Path::new("."),
    };

    let mut staging = NamedTempFile::new_in(dir).map_err(seed_err)?;
    write_rows(staging.as_file_mut(), catalog).map_err(seed_err)?;
    staging.persist(path).map_err(|err| seed_err(err.error))?;
    Ok(())
}

/// Seeds `path` with the fixture and returns it.
pub(crate) fn seed_file(path: &Path) -> Result<Catalog, CatalogError> {
    let catalog = seed_catalog();
    write_catalog(path, &catalog)?;
    Ok(catalog)
}

fn write_rows<W: Write>(out: W, catalog: &Catalog) -> std::io::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for record in catalog.iter() {
        writer.serialize(record)?;
    }
    writer.flush()
}
