use chrono::Local;
use clap::Args;
use intern_match::catalog::{
    load_from_path, CatalogLoader, FilterCriteria, FilterOptions, InternshipRecord,
};
use intern_match::config::AppConfig;
use intern_match::context::{AppContext, InternshipListing};
use intern_match::error::AppError;
use intern_match::profile::{ApplicantProfile, ProfileSubmission};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Catalog CSV path (defaults to APP_CATALOG_PATH or internship_dataset.csv)
    #[arg(long)]
    pub(crate) data_path: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ListArgs {
    #[command(flatten)]
    pub(crate) catalog: CatalogArgs,
    /// Exact location to match ("All" for any)
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Exact duration to match, e.g. "3 months"
    #[arg(long)]
    pub(crate) duration: Option<String>,
    /// Exact education level to match, e.g. "Bachelor"
    #[arg(long)]
    pub(crate) education_level: Option<String>,
    /// Print the listing as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ProfileArgs {
    #[command(flatten)]
    pub(crate) catalog: CatalogArgs,
    #[arg(long)]
    pub(crate) name: Option<String>,
    #[arg(long)]
    pub(crate) education_level: Option<String>,
    #[arg(long)]
    pub(crate) preferred_location: Option<String>,
    #[arg(long)]
    pub(crate) preferred_duration: Option<String>,
    #[arg(long)]
    pub(crate) experience_level: Option<String>,
    /// Comma separated, e.g. "Python, Excel"
    #[arg(long)]
    pub(crate) skills: Option<String>,
    #[arg(long)]
    pub(crate) interests: Option<String>,
}

impl ListArgs {
    fn criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::all();
        if let Some(location) = &self.location {
            criteria = criteria.with_location(location.as_str());
        }
        if let Some(duration) = &self.duration {
            criteria = criteria.with_duration(duration.as_str());
        }
        if let Some(education_level) = &self.education_level {
            criteria = criteria.with_education_level(education_level.as_str());
        }
        criteria
    }
}

impl ProfileArgs {
    fn submission(&self) -> ProfileSubmission {
        ProfileSubmission {
            name: self.name.clone(),
            education_level: self.education_level.clone(),
            preferred_location: self.preferred_location.clone(),
            preferred_duration: self.preferred_duration.clone(),
            experience_level: self.experience_level.clone(),
            skills: self.skills.clone(),
            interests: self.interests.clone(),
        }
    }
}

fn resolve_data_path(args: &CatalogArgs) -> Result<PathBuf, AppError> {
    match &args.data_path {
        Some(path) => Ok(path.clone()),
        None => Ok(AppConfig::load()?.catalog.data_path),
    }
}

fn context_for(args: &CatalogArgs) -> Result<AppContext, AppError> {
    let path = resolve_data_path(args)?;
    Ok(AppContext::new(CatalogLoader::new(path)))
}

pub(crate) fn run_catalog_list(args: ListArgs) -> Result<(), AppError> {
    let context = context_for(&args.catalog)?;
    let listing = context.listing(&args.criteria());

    if args.json {
        match serde_json::to_string_pretty(&listing) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Listing payload unavailable: {err}"),
        }
    } else {
        render_listing(&listing);
    }

    Ok(())
}

pub(crate) fn run_catalog_options(args: CatalogArgs) -> Result<(), AppError> {
    let context = context_for(&args)?;
    if let Some(warning) = &context.loaded().warning {
        println!("Warning: {warning}");
    }
    render_options(&context.options());
    Ok(())
}

/// Strict parse of an existing file. Unlike the loader, this never seeds and never degrades.
pub(crate) fn run_catalog_check(args: CatalogArgs) -> Result<(), AppError> {
    let path = resolve_data_path(&args)?;
    let catalog = load_from_path(&path)?;
    println!(
        "{}: {} postings, schema OK",
        path.display(),
        catalog.len()
    );
    Ok(())
}

pub(crate) fn run_profile(args: ProfileArgs) -> Result<(), AppError> {
    let context = context_for(&args.catalog)?;
    let echo = context.submit_profile(args.submission(), &FilterCriteria::all())?;

    render_profile(&echo.profile);
    println!();
    render_listing(&echo.listing);
    Ok(())
}

pub(crate) fn render_profile(profile: &ApplicantProfile) {
    println!("Your input");
    println!("- Name: {}", profile.name);
    println!("- Education: {}", profile.education_level);
    println!("- Preferred location: {}", profile.preferred_location);
    println!("- Preferred duration: {}", profile.preferred_duration);
    println!("- Experience: {}", profile.experience_level);
    println!("- Skills: {}", profile.skills);
    println!("- Interests: {}", profile.interests);
    println!(
        "- Submitted: {}",
        profile
            .submitted_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
    );
}

pub(crate) fn render_listing(listing: &InternshipListing<'_>) {
    if let Some(warning) = listing.warning {
        println!("Warning: {warning}");
    }

    println!(
        "Internships ({} of {} from {})",
        listing.count(),
        listing.total,
        listing.source.label()
    );

    if listing.internships.is_empty() {
        println!("- none match the selected filters");
        return;
    }

    for record in &listing.internships {
        println!("{}", posting_line(record));
        println!("    {}", record.description);
    }
}

fn render_options(options: &FilterOptions) {
    println!("Locations: {}", options.locations.join(" | "));
    println!("Durations: {}", options.durations.join(" | "));
    println!("Education levels: {}", options.education_levels.join(" | "));
}

fn posting_line(record: &InternshipRecord) -> String {
    format!(
        "- {} @ {} | {} | {} | {} | {} | skills: {}",
        record.position,
        record.company,
        record.location,
        record.duration,
        record.education_level,
        record.stipend,
        record.skills_required
    )
}
