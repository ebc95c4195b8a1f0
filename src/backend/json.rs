//! JSON file-based backend.
//!
//! Region fixtures are held in memory and never written; everything the user
//! creates (posted vacancies, applications, preferences) is persisted to a
//! single JSON file using atomic writes (write-to-temp + rename).
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "posted": [ { "job_id": "user-1718000000000", "title": "...", ... } ],
//!   "applications": [ { "application_id": "app-1", "job_id": "job-3", ... } ],
//!   "next_application": 2,
//!   "preferences": { "jobfinder-theme": "dark" }
//! }
//! ```

use crate::backend::client::JobBackend;
use crate::backend::models::{ApplicationRequest, ApplicationResult, JobTypeCounts, NewVacancy};
use crate::catalog::unique_job_id;
use crate::domain::error::{JobFinderError, Result};
use crate::domain::filter::sort_by_date_desc;
use crate::domain::format::now_nanos;
use crate::domain::job::{JobApplication, JobListing, VacancyStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Rejection shown when the job id is not known to the backend.
pub const JOB_NOT_FOUND: &str = "Job not found";
/// Rejection shown when the same email applies twice to one job.
pub const ALREADY_APPLIED: &str = "You have already applied for this job";
/// Rejection shown for vacancies marked old.
pub const VACANCY_CLOSED: &str = "This vacancy is no longer accepting applications";
/// Rejection shown for drafts.
pub const VACANCY_UNPUBLISHED: &str = "This vacancy has not been published";
/// Rejection shown when a request bypassed client validation with blank fields.
pub const FIELDS_REQUIRED: &str = "All fields are required";

/// On-disk container.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BoardData {
    /// Storage format version for future migrations.
    version: u32,

    /// Vacancies posted through the plugin, newest first.
    #[serde(default)]
    posted: Vec<JobListing>,

    #[serde(default)]
    applications: Vec<JobApplication>,

    /// Sequence number for the next `app-<n>` id.
    #[serde(default = "first_application_number")]
    next_application: u64,

    #[serde(default)]
    preferences: BTreeMap<String, String>,
}

const fn first_application_number() -> u64 {
    1
}

impl Default for BoardData {
    fn default() -> Self {
        Self {
            version: 1,
            posted: Vec::new(),
            applications: Vec::new(),
            next_application: first_application_number(),
            preferences: BTreeMap::new(),
        }
    }
}

/// JSON file backend.
///
/// # Thread Safety
///
/// `Send` but not `Sync`; owned by the single worker thread.
pub struct JsonBackend {
    file_path: PathBuf,

    /// Region fixtures. Read-only, never persisted.
    seed: Vec<JobListing>,

    /// Last state known to be on disk.
    data: BoardData,
}

impl JsonBackend {
    /// Opens (or creates) the board file at `file_path`, layered over `seed`.
    ///
    /// Parent directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - The file exists but contains invalid JSON
    /// - The file cannot be read
    pub fn new(file_path: PathBuf, seed: Vec<JobListing>) -> Result<Self> {
        tracing::debug!(path = ?file_path, seed_count = seed.len(), "opening JSON backend");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("no board file yet, starting empty");
            BoardData::default()
        };

        tracing::debug!(
            posted = data.posted.len(),
            applications = data.applications.len(),
            "backend initialized"
        );

        Ok(Self {
            file_path,
            seed,
            data,
        })
    }

    /// Path of the backing JSON file.
    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<BoardData> {
        let contents = std::fs::read_to_string(path)?;
        let data: BoardData = serde_json::from_str(&contents)
            .map_err(|e| JobFinderError::Storage(format!("failed to parse board file: {e}")))?;

        tracing::debug!(version = data.version, "loaded board data");
        Ok(data)
    }

    /// Writes `data` atomically: temp file first, then rename.
    fn save_to_file(&self, data: &BoardData) -> Result<()> {
        let json = serde_json::to_string_pretty(data)
            .map_err(|e| JobFinderError::Storage(format!("failed to serialize board: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!(path = ?self.file_path, "board saved");
        Ok(())
    }

    /// Persists `next` and only then adopts it as the in-memory state.
    ///
    /// On failure the backend keeps its previous state, so the caller may
    /// retry the same operation.
    fn commit(&mut self, next: BoardData) -> Result<()> {
        if let Err(e) = self.save_to_file(&next) {
            tracing::warn!(error = %e, "board save failed, change discarded");
            return Err(e);
        }
        self.data = next;
        Ok(())
    }

    fn all_jobs(&self) -> impl Iterator<Item = &JobListing> {
        self.data.posted.iter().chain(self.seed.iter())
    }

    fn find_job(&self, job_id: &str) -> Option<&JobListing> {
        self.all_jobs().find(|job| job.job_id == job_id)
    }

    /// Applies business rules to a submission. `None` means it may be stored.
    fn rejection_for(&self, request: &ApplicationRequest) -> Option<&'static str> {
        let fields = [
            &request.applicant_name,
            &request.email,
            &request.phone,
            &request.cover_letter,
        ];
        if fields.iter().any(|value| value.trim().is_empty()) {
            return Some(FIELDS_REQUIRED);
        }

        let Some(job) = self.find_job(&request.job_id) else {
            return Some(JOB_NOT_FOUND);
        };

        match job.effective_status() {
            VacancyStatus::Old => return Some(VACANCY_CLOSED),
            VacancyStatus::Draft => return Some(VACANCY_UNPUBLISHED),
            VacancyStatus::New => {}
        }

        let email = request.email.trim().to_lowercase();
        let duplicate = self
            .data
            .applications
            .iter()
            .any(|app| app.job_id == request.job_id && app.email.trim().to_lowercase() == email);

        duplicate.then_some(ALREADY_APPLIED)
    }
}

impl JobBackend for JsonBackend {
    fn get_all_jobs(&self) -> Result<Vec<JobListing>> {
        let _span = tracing::debug_span!("json_get_all_jobs").entered();

        let jobs: Vec<JobListing> = self.all_jobs().cloned().collect();
        tracing::debug!(count = jobs.len(), "retrieved jobs");
        Ok(jobs)
    }

    fn get_job_by_id(&self, job_id: &str) -> Result<Option<JobListing>> {
        let _span = tracing::debug_span!("json_get_job_by_id", job_id = %job_id).entered();

        let job = self.find_job(job_id).cloned();
        tracing::debug!(found = job.is_some(), "job lookup complete");
        Ok(job)
    }

    fn submit_application(&mut self, request: &ApplicationRequest) -> Result<ApplicationResult> {
        let _span = tracing::debug_span!("json_submit_application",
            job_id = %request.job_id
        ).entered();

        if let Some(message) = self.rejection_for(request) {
            tracing::debug!(reason = message, "application rejected");
            return Ok(ApplicationResult::rejected(message));
        }

        let mut next = self.data.clone();
        let application_id = format!("app-{}", next.next_application);
        next.next_application = next.next_application.saturating_add(1);

        next.applications.push(JobApplication {
            application_id: application_id.clone(),
            job_id: request.job_id.clone(),
            applicant_name: request.applicant_name.trim().to_string(),
            email: request.email.trim().to_string(),
            phone: request.phone.trim().to_string(),
            cover_letter: request.cover_letter.trim().to_string(),
            submitted_at: now_nanos(),
        });
        self.commit(next)?;

        tracing::debug!(application_id = %application_id, "application stored");
        Ok(ApplicationResult::Accepted { application_id })
    }

    fn post_vacancy(&mut self, vacancy: &NewVacancy) -> Result<String> {
        let _span = tracing::debug_span!("json_post_vacancy",
            title = %vacancy.title,
            company = %vacancy.company
        ).entered();

        vacancy.validate()?;

        let job_id = unique_job_id(
            self.all_jobs().map(|job| job.job_id.as_str()),
            chrono::Utc::now().timestamp_millis(),
        );
        let listing = vacancy.clone().into_listing(job_id.clone(), now_nanos());

        let mut next = self.data.clone();
        next.posted.insert(0, listing);
        self.commit(next)?;

        tracing::debug!(job_id = %job_id, "vacancy posted");
        Ok(job_id)
    }

    fn get_vacancies_by_status(&self, status: VacancyStatus) -> Result<Vec<JobListing>> {
        let _span = tracing::debug_span!("json_get_vacancies_by_status", status = ?status).entered();

        let mut jobs: Vec<JobListing> = self
            .all_jobs()
            .filter(|job| job.effective_status() == status)
            .cloned()
            .collect();
        sort_by_date_desc(&mut jobs);

        tracing::debug!(count = jobs.len(), "retrieved vacancies");
        Ok(jobs)
    }

    fn count_job_types(&self) -> Result<JobTypeCounts> {
        Ok(JobTypeCounts::tally(self.all_jobs()))
    }

    fn get_applications_for_job(&self, job_id: &str) -> Result<Vec<JobApplication>> {
        let _span = tracing::debug_span!("json_get_applications_for_job", job_id = %job_id).entered();

        let applications: Vec<JobApplication> = self
            .data
            .applications
            .iter()
            .filter(|app| app.job_id == job_id)
            .cloned()
            .collect();

        tracing::debug!(count = applications.len(), "retrieved applications");
        Ok(applications)
    }

    fn get_job_count(&self) -> Result<usize> {
        Ok(self.data.posted.len() + self.seed.len())
    }

    fn get_application_count(&self) -> Result<usize> {
        Ok(self.data.applications.len())
    }

    fn get_preference(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.preferences.get(key).cloned())
    }

    fn set_preference(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_set_preference", key = %key, value = %value).entered();

        if self.data.preferences.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }

        let mut next = self.data.clone();
        next.preferences.insert(key.to_string(), value.to_string());
        self.commit(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::JobCatalog;
    use crate::domain::job::JobType;
    use crate::domain::region::Region;
    use tempfile::TempDir;

    fn open(dir: &TempDir) -> JsonBackend {
        let seed = JobCatalog::seeded(Region::Malaysia).jobs().to_vec();
        JsonBackend::new(dir.path().join("board").join("jobs-malaysia.json"), seed).unwrap()
    }

    fn request(job_id: &str, email: &str) -> ApplicationRequest {
        ApplicationRequest {
            job_id: job_id.to_string(),
            applicant_name: "Nur Aisyah".to_string(),
            email: email.to_string(),
            phone: "+60 12-345 6789".to_string(),
            cover_letter: "I would love to join.".to_string(),
        }
    }

    fn vacancy(title: &str) -> NewVacancy {
        NewVacancy {
            title: title.to_string(),
            company: "Kopi Co".to_string(),
            country: "Malaysia".to_string(),
            state: "Melaka".to_string(),
            city: "Melaka City".to_string(),
            district: String::new(),
            job_type: JobType::PartTime,
            salary_min: 1800,
            salary_max: 2400,
            salary_currency: "MYR".to_string(),
            description: "Pull great shots.".to_string(),
            status: VacancyStatus::New,
        }
    }

    #[test]
    fn accepts_first_application_and_rejects_duplicate() {
        let dir = TempDir::new().unwrap();
        let mut backend = open(&dir);

        let first = backend.submit_application(&request("job-3", "aisyah@example.com")).unwrap();
        assert_eq!(first, ApplicationResult::Accepted { application_id: "app-1".to_string() });

        let again = backend.submit_application(&request("job-3", " AISYAH@example.com ")).unwrap();
        assert_eq!(again, ApplicationResult::rejected(ALREADY_APPLIED));

        let other_job = backend.submit_application(&request("job-4", "aisyah@example.com")).unwrap();
        assert!(other_job.is_accepted());
        assert_eq!(backend.get_application_count().unwrap(), 2);
    }

    #[test]
    fn rejects_unknown_closed_and_draft_jobs() {
        let dir = TempDir::new().unwrap();
        let mut backend = open(&dir);

        let cases = [
            ("job-999", JOB_NOT_FOUND),
            ("job-21", VACANCY_CLOSED),
            ("job-22", VACANCY_UNPUBLISHED),
        ];
        for (job_id, expected) in cases {
            let result = backend.submit_application(&request(job_id, "a@b.co")).unwrap();
            assert_eq!(result, ApplicationResult::rejected(expected), "{job_id}");
        }
        assert_eq!(backend.get_application_count().unwrap(), 0);
    }

    #[test]
    fn rejects_blank_fields() {
        let dir = TempDir::new().unwrap();
        let mut backend = open(&dir);
        let mut blank = request("job-1", "a@b.co");
        blank.phone = "   ".to_string();
        assert_eq!(
            backend.submit_application(&blank).unwrap(),
            ApplicationResult::rejected(FIELDS_REQUIRED)
        );
    }

    #[test]
    fn posted_vacancy_gets_fresh_id_and_is_listed_first() {
        let dir = TempDir::new().unwrap();
        let mut backend = open(&dir);
        let before = backend.get_job_count().unwrap();

        let id = backend.post_vacancy(&vacancy("Barista")).unwrap();
        assert!(id.starts_with("user-"));

        let jobs = backend.get_all_jobs().unwrap();
        assert_eq!(jobs.len(), before + 1);
        assert_eq!(jobs[0].job_id, id);
        assert_eq!(jobs[0].district, "Melaka City");

        let second = backend.post_vacancy(&vacancy("Cashier")).unwrap();
        assert_ne!(second, id);
        assert_eq!(backend.get_job_by_id(&second).unwrap().unwrap().title, "Cashier");
    }

    #[test]
    fn post_vacancy_rejects_inverted_salary() {
        let dir = TempDir::new().unwrap();
        let mut backend = open(&dir);
        let mut bad = vacancy("Barista");
        bad.salary_min = 5000;
        assert!(matches!(backend.post_vacancy(&bad), Err(JobFinderError::InvalidVacancy(_))));
    }

    #[test]
    fn user_data_survives_reopen_but_seed_is_not_written() {
        let dir = TempDir::new().unwrap();
        let path = {
            let mut backend = open(&dir);
            backend.post_vacancy(&vacancy("Barista")).unwrap();
            backend.submit_application(&request("job-5", "dev@example.com")).unwrap();
            backend.set_preference("jobfinder-theme", "light").unwrap();
            backend.file_path().to_path_buf()
        };

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(!raw.contains("Axiata Digital"));

        let reopened = open(&dir);
        assert_eq!(reopened.get_preference("jobfinder-theme").unwrap().as_deref(), Some("light"));
        assert_eq!(reopened.get_applications_for_job("job-5").unwrap().len(), 1);
        assert_eq!(reopened.get_vacancies_by_status(VacancyStatus::New).unwrap()[0].title, "Barista");
    }

    #[test]
    fn application_ids_continue_after_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let mut backend = open(&dir);
            backend.submit_application(&request("job-1", "one@example.com")).unwrap();
        }
        let mut backend = open(&dir);
        let result = backend.submit_application(&request("job-1", "two@example.com")).unwrap();
        assert_eq!(result, ApplicationResult::Accepted { application_id: "app-2".to_string() });
    }

    /// Makes the next atomic write fail by putting a directory where the
    /// temp file goes.
    fn block_writes(backend: &JsonBackend) -> PathBuf {
        let tmp = backend.file_path().with_extension("tmp");
        std::fs::create_dir_all(&tmp).unwrap();
        tmp
    }

    #[test]
    fn failed_save_discards_application_and_allows_retry() {
        let dir = TempDir::new().unwrap();
        let mut backend = open(&dir);
        let blocker = block_writes(&backend);

        let failed = backend.submit_application(&request("job-3", "aisyah@example.com"));
        assert!(matches!(failed, Err(JobFinderError::Io(_))));
        assert_eq!(backend.get_application_count().unwrap(), 0);
        assert!(backend.get_applications_for_job("job-3").unwrap().is_empty());

        std::fs::remove_dir(&blocker).unwrap();
        let retry = backend.submit_application(&request("job-3", "aisyah@example.com")).unwrap();
        assert_eq!(retry, ApplicationResult::Accepted { application_id: "app-1".to_string() });
        assert_eq!(backend.get_application_count().unwrap(), 1);
    }

    #[test]
    fn failed_save_discards_posted_vacancy() {
        let dir = TempDir::new().unwrap();
        let mut backend = open(&dir);
        let before = backend.get_job_count().unwrap();
        let blocker = block_writes(&backend);

        assert!(backend.post_vacancy(&vacancy("Barista")).is_err());
        assert_eq!(backend.get_job_count().unwrap(), before);
        assert!(backend.get_all_jobs().unwrap().iter().all(|job| job.title != "Barista"));

        drop(backend);
        std::fs::remove_dir(&blocker).unwrap();
        let reopened = open(&dir);
        assert_eq!(reopened.get_job_count().unwrap(), before);
    }

    #[test]
    fn failed_save_keeps_previous_preference() {
        let dir = TempDir::new().unwrap();
        let mut backend = open(&dir);
        backend.set_preference("jobfinder-theme", "light").unwrap();
        let blocker = block_writes(&backend);

        assert!(backend.set_preference("jobfinder-theme", "dark").is_err());
        assert_eq!(backend.get_preference("jobfinder-theme").unwrap().as_deref(), Some("light"));

        std::fs::remove_dir(&blocker).unwrap();
        backend.set_preference("jobfinder-theme", "dark").unwrap();
        let reopened = open(&dir);
        assert_eq!(reopened.get_preference("jobfinder-theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("jobs.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            JsonBackend::new(path, Vec::new()),
            Err(JobFinderError::Storage(_))
        ));
    }

    #[test]
    fn job_type_counts_cover_every_listing() {
        let dir = TempDir::new().unwrap();
        let backend = open(&dir);
        let counts = backend.count_job_types().unwrap();
        let total: usize = JobType::ALL.iter().map(|t| counts.get(*t)).sum();
        assert_eq!(total, backend.get_job_count().unwrap());
        assert_eq!(counts.remote, 3);
    }
}
