use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fields a student must fill in before a profile is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Name,
    EducationLevel,
    PreferredLocation,
    PreferredDuration,
    ExperienceLevel,
    Skills,
    Interests,
}

impl ProfileField {
    pub const REQUIRED: [ProfileField; 7] = [
        ProfileField::Name,
        ProfileField::EducationLevel,
        ProfileField::PreferredLocation,
        ProfileField::PreferredDuration,
        ProfileField::ExperienceLevel,
        ProfileField::Skills,
        ProfileField::Interests,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Name => "Name",
            ProfileField::EducationLevel => "Education level",
            ProfileField::PreferredLocation => "Preferred location",
            ProfileField::PreferredDuration => "Preferred duration",
            ProfileField::ExperienceLevel => "Experience level",
            ProfileField::Skills => "Skills",
            ProfileField::Interests => "Interests",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw form input. Any field may be absent until validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSubmission {
    pub name: Option<String>,
    pub education_level: Option<String>,
    pub preferred_location: Option<String>,
    pub preferred_duration: Option<String>,
    pub experience_level: Option<String>,
    pub skills: Option<String>,
    pub interests: Option<String>,
}

impl ProfileSubmission {
    pub(crate) fn value(&self, field: ProfileField) -> Option<&str> {
        let value = match field {
            ProfileField::Name => &self.name,
            ProfileField::EducationLevel => &self.education_level,
            ProfileField::PreferredLocation => &self.preferred_location,
            ProfileField::PreferredDuration => &self.preferred_duration,
            ProfileField::ExperienceLevel => &self.experience_level,
            ProfileField::Skills => &self.skills,
            ProfileField::Interests => &self.interests,
        };
        value.as_deref()
    }
}

/// An accepted submission. Lives only as long as the request that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicantProfile {
    pub name: String,
    pub education_level: String,
    pub preferred_location: String,
    pub preferred_duration: String,
    pub experience_level: String,
    pub skills: String,
    pub interests: String,
    pub submitted_at: DateTime<Utc>,
}

/// Submission rejected before a profile could be built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("please fill in all required fields (missing: {})", missing_labels(.missing))]
    Incomplete { missing: Vec<ProfileField> },
}

fn missing_labels(fields: &[ProfileField]) -> String {
    fields
        .iter()
        .map(ProfileField::label)
        .collect::<Vec<_>>()
        .join(", ")
}
