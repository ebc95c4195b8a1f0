//! Job listing and application domain models.
//!
//! Listings are created once (from regional fixtures or by posting a vacancy)
//! and never mutated afterwards. Applications are only ever created by the
//! backend's submit operation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Employment arrangement for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Remote,
}

impl JobType {
    /// Every job type, in filter-cycling order.
    pub const ALL: [Self; 4] = [Self::FullTime, Self::PartTime, Self::Contract, Self::Remote];

    /// Human-readable label shown on job cards and filter chips.
    ///
    /// # Example
    ///
    /// ```
    /// use jobfinder::domain::JobType;
    ///
    /// assert_eq!(JobType::FullTime.label(), "Full-time");
    /// assert_eq!(JobType::Remote.label(), "Remote");
    /// ```
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
            Self::Contract => "Contract",
            Self::Remote => "Remote",
        }
    }

    /// Wire key, matching the serialized form (`fullTime`, `partTime`, ...).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::FullTime => "fullTime",
            Self::PartTime => "partTime",
            Self::Contract => "contract",
            Self::Remote => "remote",
        }
    }

    /// Parses a wire key. Unknown keys yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|job_type| job_type.key() == raw)
    }

    /// Returns the next job type in [`JobType::ALL`], wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Returns the previous job type in [`JobType::ALL`], wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Publication status of a vacancy.
///
/// Listings without an explicit status are treated as [`VacancyStatus::New`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VacancyStatus {
    /// Published and accepting applications.
    New,
    /// Closed to applications.
    Old,
    /// Saved but not yet published.
    Draft,
}

impl VacancyStatus {
    /// Every status, in form-cycling order.
    pub const ALL: [Self; 3] = [Self::New, Self::Old, Self::Draft];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Old => "Old",
            Self::Draft => "Draft",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// A single job posting.
///
/// `salary_min <= salary_max` holds for every listing the catalog or backend
/// produces. `date_posted` is nanoseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    /// Unique within a collection.
    pub job_id: String,
    pub title: String,
    pub company: String,
    pub description: String,

    /// Only populated on posted vacancies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub state: String,
    /// Only populated on posted vacancies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub district: String,

    pub job_type: JobType,
    pub salary_min: u64,
    pub salary_max: u64,
    /// ISO-4217 style code, e.g. `MYR` or `INR`.
    pub salary_currency: String,
    pub date_posted: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<VacancyStatus>,
}

impl JobListing {
    /// Status with the implicit default applied.
    #[must_use]
    pub fn effective_status(&self) -> VacancyStatus {
        self.status.unwrap_or(VacancyStatus::New)
    }

    /// `"District, State"` as shown under the company name.
    ///
    /// # Example
    ///
    /// ```
    /// use jobfinder::catalog::JobCatalog;
    /// use jobfinder::domain::Region;
    ///
    /// let catalog = JobCatalog::seeded(Region::Malaysia);
    /// let job = catalog.get("job-1").unwrap();
    /// assert_eq!(job.location_label(), "Bukit Bintang, Kuala Lumpur");
    /// ```
    #[must_use]
    pub fn location_label(&self) -> String {
        if self.district.is_empty() {
            self.state.clone()
        } else if self.state.is_empty() {
            self.district.clone()
        } else {
            format!("{}, {}", self.district, self.state)
        }
    }
}

/// A candidate's application to one listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobApplication {
    pub application_id: String,
    pub job_id: String,
    pub applicant_name: String,
    pub email: String,
    pub phone: String,
    pub cover_letter: String,
    /// Nanoseconds since the Unix epoch.
    pub submitted_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_type_keys_match_serde_names() {
        for job_type in JobType::ALL {
            let encoded = serde_json::to_string(&job_type).unwrap();
            assert_eq!(encoded, format!("\"{}\"", job_type.key()));
            assert_eq!(JobType::parse(job_type.key()), Some(job_type));
        }
        assert_eq!(JobType::parse("internship"), None);
    }

    #[test]
    fn job_type_cycles_both_ways() {
        assert_eq!(JobType::Remote.next(), JobType::FullTime);
        assert_eq!(JobType::FullTime.prev(), JobType::Remote);
        assert_eq!(JobType::PartTime.next().prev(), JobType::PartTime);
    }

    #[test]
    fn missing_status_reads_as_new() {
        let json = r#"{
            "job_id": "job-x",
            "title": "Tester",
            "company": "Acme",
            "description": "",
            "state": "Johor",
            "district": "Johor Bahru",
            "job_type": "contract",
            "salary_min": 1000,
            "salary_max": 2000,
            "salary_currency": "MYR",
            "date_posted": 0
        }"#;
        let job: JobListing = serde_json::from_str(json).unwrap();
        assert_eq!(job.status, None);
        assert_eq!(job.effective_status(), VacancyStatus::New);
        assert_eq!(job.job_type, JobType::Contract);
    }
}
