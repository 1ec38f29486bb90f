//! Applicant profile capture with all-or-nothing presence checks.

pub mod domain;

use chrono::{DateTime, Utc};

pub use domain::{ApplicantProfile, ProfileField, ProfileSubmission, SubmissionError};

impl ProfileSubmission {
    /// Accepts the submission now. See [`ProfileSubmission::accept_at`].
    pub fn accept(self) -> Result<ApplicantProfile, SubmissionError> {
        self.accept_at(Utc::now())
    }

    /// Rejects the submission if any required field is absent or blank.
    ///
    /// Only presence is checked; accepted values are kept exactly as submitted.
    pub fn accept_at(
        self,
        submitted_at: DateTime<Utc>,
    ) -> Result<ApplicantProfile, SubmissionError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(SubmissionError::Incomplete { missing });
        }

        let ProfileSubmission {
            name,
            education_level,
            preferred_location,
            preferred_duration,
            experience_level,
            skills,
            interests,
        } = self;

        Ok(ApplicantProfile {
            name: name.unwrap_or_default(),
            education_level: education_level.unwrap_or_default(),
            preferred_location: preferred_location.unwrap_or_default(),
            preferred_duration: preferred_duration.unwrap_or_default(),
            experience_level: experience_level.unwrap_or_default(),
            skills: skills.unwrap_or_default(),
            interests: interests.unwrap_or_default(),
            submitted_at,
        })
    }

    /// Required fields that are absent or whitespace-only, in form order.
    pub fn missing_fields(&self) -> Vec<ProfileField> {
        ProfileField::REQUIRED
            .into_iter()
            .filter(|field| {
                self.value(*field)
                    .map_or(true, |value| value.trim().is_empty())
            })
            .collect()
    }
}
