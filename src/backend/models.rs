//! Request and response payloads for the backend capability surface.
//!
//! These types cross the worker boundary as JSON, so every one of them is
//! `Serialize + Deserialize`.

use crate::domain::error::{JobFinderError, Result};
use crate::domain::job::{JobListing, JobType, VacancyStatus};
use serde::{Deserialize, Serialize};

/// Payload for posting a vacancy. The backend assigns the id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewVacancy {
    pub title: String,
    pub company: String,
    pub country: String,
    pub state: String,
    pub city: String,
    /// Falls back to `city` when blank.
    pub district: String,
    pub job_type: JobType,
    pub salary_min: u64,
    pub salary_max: u64,
    pub salary_currency: String,
    pub description: String,
    pub status: VacancyStatus,
}

impl NewVacancy {
    /// Checks the invariants the backend enforces on every posted listing.
    ///
    /// # Errors
    ///
    /// Returns [`JobFinderError::InvalidVacancy`] if a required field is blank
    /// or the salary range is inverted.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("title", &self.title),
            ("company", &self.company),
            ("description", &self.description),
        ] {
            if value.trim().is_empty() {
                return Err(JobFinderError::InvalidVacancy(format!("{field} is required")));
            }
        }

        if self.salary_min > self.salary_max {
            return Err(JobFinderError::InvalidVacancy(format!(
                "salary range {}..{} is inverted",
                self.salary_min, self.salary_max
            )));
        }

        Ok(())
    }

    /// Converts the payload into a stored listing.
    ///
    /// Text fields are trimmed; blank optional fields become `None`.
    #[must_use]
    pub fn into_listing(self, job_id: String, date_posted: i64) -> JobListing {
        fn optional(value: &str) -> Option<String> {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }

        let district = if self.district.trim().is_empty() {
            self.city.trim().to_string()
        } else {
            self.district.trim().to_string()
        };

        JobListing {
            job_id,
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            description: self.description.trim().to_string(),
            country: optional(&self.country),
            state: self.state.trim().to_string(),
            city: optional(&self.city),
            district,
            job_type: self.job_type,
            salary_min: self.salary_min,
            salary_max: self.salary_max,
            salary_currency: self.salary_currency,
            date_posted,
            status: Some(self.status),
        }
    }
}

/// An application as submitted from the apply form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRequest {
    pub job_id: String,
    pub applicant_name: String,
    pub email: String,
    pub phone: String,
    pub cover_letter: String,
}

/// Outcome of a submission the backend actually processed.
///
/// Transport failures are not represented here; they surface as a worker
/// error response instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ApplicationResult {
    Accepted { application_id: String },
    Rejected { message: String },
}

impl ApplicationResult {
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected { message: message.into() }
    }

    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Listing count per job type. Every type is always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JobTypeCounts {
    pub full_time: usize,
    pub part_time: usize,
    pub contract: usize,
    pub remote: usize,
}

impl JobTypeCounts {
    /// Tallies the job types of `jobs`.
    pub fn tally<'a>(jobs: impl IntoIterator<Item = &'a JobListing>) -> Self {
        let mut counts = Self::default();
        for job in jobs {
            *counts.slot_mut(job.job_type) += 1;
        }
        counts
    }

    #[must_use]
    pub const fn get(&self, job_type: JobType) -> usize {
        match job_type {
            JobType::FullTime => self.full_time,
            JobType::PartTime => self.part_time,
            JobType::Contract => self.contract,
            JobType::Remote => self.remote,
        }
    }

    fn slot_mut(&mut self, job_type: JobType) -> &mut usize {
        match job_type {
            JobType::FullTime => &mut self.full_time,
            JobType::PartTime => &mut self.part_time,
            JobType::Contract => &mut self.contract,
            JobType::Remote => &mut self.remote,
        }
    }
}

/// Backend-wide totals for the overview panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoardSummary {
    pub job_count: usize,
    pub application_count: usize,
    pub job_types: JobTypeCounts,
}
