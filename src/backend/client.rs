//! Backend capability surface.
//!
//! This module defines the [`JobBackend`] trait, the typed boundary between the
//! job board and whatever persists jobs and applications. The plugin never
//! calls it directly: every call is made by the background worker in response
//! to a serialized request, which keeps the UI thread free of I/O.
//!
//! The trait is deliberately narrow. Each method corresponds to one screen or
//! flow that needs it; the filter engine needs none of them.

use crate::backend::models::{ApplicationRequest, ApplicationResult, JobTypeCounts, NewVacancy};
use crate::domain::error::Result;
use crate::domain::job::{JobApplication, JobListing, VacancyStatus};

/// Abstraction over job board backends.
///
/// # Implementations
///
/// - [`JsonBackend`](crate::backend::JsonBackend): fixtures in memory, posted
///   vacancies, applications and preferences in a JSON file
///
/// # Examples
///
/// ```no_run
/// use jobfinder::backend::{JobBackend, JsonBackend};
/// use jobfinder::catalog::JobCatalog;
/// use jobfinder::domain::Region;
/// use std::path::PathBuf;
///
/// let seed = JobCatalog::seeded(Region::Malaysia).jobs().to_vec();
/// let backend = JsonBackend::new(PathBuf::from("/tmp/jobs-malaysia.json"), seed)?;
/// let jobs = backend.get_all_jobs()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait JobBackend: Send {
    /// Every listing the backend knows, posted vacancies first.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn get_all_jobs(&self) -> Result<Vec<JobListing>>;

    /// Looks up one listing. Returns `Ok(None)` for unknown ids.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn get_job_by_id(&self, job_id: &str) -> Result<Option<JobListing>>;

    /// Records an application.
    ///
    /// Business-rule refusals (unknown job, closed vacancy, duplicate
    /// applicant) come back as [`ApplicationResult::Rejected`], not as `Err`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the application could not be persisted.
    fn submit_application(&mut self, request: &ApplicationRequest) -> Result<ApplicationResult>;

    /// Stores a new vacancy and returns its freshly assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`JobFinderError::InvalidVacancy`](crate::domain::JobFinderError::InvalidVacancy)
    /// for payloads that fail validation, or a storage error if the write fails.
    fn post_vacancy(&mut self, vacancy: &NewVacancy) -> Result<String>;

    /// Listings with the given status, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn get_vacancies_by_status(&self, status: VacancyStatus) -> Result<Vec<JobListing>>;

    /// Listing count per job type.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn count_job_types(&self) -> Result<JobTypeCounts>;

    /// Applications received for one listing, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn get_applications_for_job(&self, job_id: &str) -> Result<Vec<JobApplication>>;

    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn get_job_count(&self) -> Result<usize>;

    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn get_application_count(&self) -> Result<usize>;

    /// Reads a stored user preference.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn get_preference(&self, key: &str) -> Result<Option<String>>;

    /// Writes a user preference, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn set_preference(&mut self, key: &str, value: &str) -> Result<()>;
}
