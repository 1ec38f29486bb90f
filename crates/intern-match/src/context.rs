use crate::catalog::{
    filter, Catalog, CatalogLoader, CatalogSource, FilterCriteria, FilterOptions,
    InternshipRecord, LoadedCatalog,
};
use crate::config::AppConfig;
use crate::profile::{ApplicantProfile, ProfileSubmission, SubmissionError};
use serde::Serialize;

/// Everything a request needs, built once at startup and shared read-only.
#[derive(Debug)]
pub struct AppContext {
    loader: CatalogLoader,
}

impl AppContext {
    pub fn new(loader: CatalogLoader) -> Self {
        Self { loader }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(CatalogLoader::from_config(&config.catalog))
    }

    /// The memoized load result. The first call performs the load, so startup
    /// calls this once instead of leaving it to the first request.
    pub fn loaded(&self) -> &LoadedCatalog {
        self.loader.load()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.loaded().catalog
    }

    pub fn listing(&self, criteria: &FilterCriteria) -> InternshipListing<'_> {
        let loaded = self.loaded();
        InternshipListing {
            source: loaded.source,
            total: loaded.catalog.len(),
            warning: loaded.warning.as_deref(),
            internships: filter(&loaded.catalog, criteria),
        }
    }

    pub fn options(&self) -> FilterOptions {
        FilterOptions::from_catalog(self.catalog())
    }

    /// Validates the submission and pairs the accepted profile with the requested listing.
    pub fn submit_profile(
        &self,
        submission: ProfileSubmission,
        criteria: &FilterCriteria,
    ) -> Result<ProfileEcho<'_>, SubmissionError> {
        let profile = submission.accept()?;
        Ok(ProfileEcho {
            profile,
            listing: self.listing(criteria),
        })
    }
}

/// Filtered postings plus the load metadata needed to render them.
#[derive(Debug, Clone, Serialize)]
pub struct InternshipListing<'a> {
    pub source: CatalogSource,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<&'a str>,
    pub internships: Vec<&'a InternshipRecord>,
}

impl InternshipListing<'_> {
    pub fn count(&self) -> usize {
        self.internships.len()
    }
}

/// Response to a profile submission: the accepted profile echoed back with postings.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileEcho<'a> {
    pub profile: ApplicantProfile,
    #[serde(flatten)]
    pub listing: InternshipListing<'a>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileField;

    fn seeded_context() -> (tempfile::TempDir, AppContext) {
        let dir = tempfile::tempdir().expect("tempdir");
        let loader = CatalogLoader::new(dir.path().join("internship_dataset.csv"));
        (dir, AppContext::new(loader))
    }

    #[test]
    fn listing_reports_totals_and_source() {
        let (_dir, context) = seeded_context();
        let listing = context.listing(&FilterCriteria::all().with_location("Remote"));
        assert_eq!(listing.source, CatalogSource::Seeded);
        assert_eq!(listing.total, 8);
        assert_eq!(listing.count(), 1);
        assert!(listing.warning.is_none());
    }

    #[test]
    fn loaded_and_catalog_share_the_same_rows() {
        let (_dir, context) = seeded_context();
        let warmed = context.loaded().catalog.clone();
        assert!(warmed.shares_rows_with(context.catalog()));
    }

    #[test]
    fn submit_profile_echoes_profile_without_filtering_by_it() {
        let (_dir, context) = seeded_context();
        let submission = ProfileSubmission {
            name: Some("Ravi".into()),
            education_level: Some("PhD".into()),
            preferred_location: Some("Chennai".into()),
            preferred_duration: Some("1 month".into()),
            experience_level: Some("Intermediate".into()),
            skills: Some("Rust".into()),
            interests: Some("Systems".into()),
        };

        let echo = context
            .submit_profile(submission, &FilterCriteria::all())
            .expect("accepted");
        assert_eq!(echo.profile.name, "Ravi");
        assert_eq!(echo.listing.count(), 8);
    }

    #[test]
    fn submit_profile_rejects_incomplete_input() {
        let (_dir, context) = seeded_context();
        let submission = ProfileSubmission {
            name: Some("Ravi".into()),
            ..ProfileSubmission::default()
        };
        let err = context
            .submit_profile(submission, &FilterCriteria::all())
            .expect_err("incomplete");
        let SubmissionError::Incomplete { missing } = err;
        assert!(!missing.contains(&ProfileField::Name));
        assert_eq!(missing.len(), 6);
    }
}
