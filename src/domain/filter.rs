//! The job filter engine.
//!
//! [`filter_jobs`] is a pure function from an ordered job list and a
//! [`Filters`] value to the ordered subset of jobs that satisfy every active
//! criterion. It never reorders, never fails, and has no side effects, so the
//! application layer can call it on every keystroke.
//!
//! # Matching rules
//!
//! A job is kept when all of the following hold:
//!
//! 1. The trimmed, lowercased search query is empty, or it is a substring of
//!    the lowercased title or the lowercased company.
//! 2. The job-type selector is [`Selector::All`] or equals the job's type.
//! 3. The state selector is [`Selector::All`] or equals the job's state exactly.
//! 4. The district selector is [`Selector::All`] or equals the job's district
//!    exactly.
//!
//! # Example
//!
//! ```
//! use jobfinder::catalog::JobCatalog;
//! use jobfinder::domain::{filter_jobs, Filters, JobType, Region, Selector};
//!
//! let catalog = JobCatalog::seeded(Region::Malaysia);
//! let filters = Filters {
//!     job_type: Selector::Only(JobType::Remote),
//!     state: Selector::Only("Penang".to_string()),
//!     ..Filters::default()
//! };
//!
//! let jobs = filter_jobs(catalog.jobs(), &filters);
//! assert_eq!(jobs.len(), 1);
//! assert_eq!(jobs[0].company, "Shopee Malaysia");
//! ```

use crate::domain::job::{JobListing, JobType};

/// A filter dimension that is either unconstrained or pinned to one value.
///
/// Replaces the `"all"` sentinel string used by raw filter input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector<T> {
    All,
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T> Selector<T> {
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::All => None,
            Self::Only(value) => Some(value),
        }
    }
}

impl<T: PartialEq> Selector<T> {
    /// Returns `true` if `value` passes this selector.
    #[must_use]
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }
}

impl Selector<String> {
    /// Parses raw filter input: empty or `"all"` means unconstrained.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw == "all" {
            Self::All
        } else {
            Self::Only(raw.to_string())
        }
    }
}

impl Selector<JobType> {
    /// Parses a raw job-type key. Unknown keys are treated as unconstrained.
    #[must_use]
    pub fn parse_job_type(raw: &str) -> Self {
        JobType::parse(raw).map_or(Self::All, Self::Only)
    }
}

/// The active filter criteria. Owned by the application state, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    /// Free-text query, matched against title and company.
    pub search: String,
    pub job_type: Selector<JobType>,
    pub state: Selector<String>,
    pub district: Selector<String>,
}

impl Filters {
    /// Builds filters from the raw string form (`"all"` sentinels included).
    ///
    /// # Example
    ///
    /// ```
    /// use jobfinder::domain::{Filters, JobType, Selector};
    ///
    /// let filters = Filters::from_raw("  Nurse ", "fullTime", "all", "");
    /// assert_eq!(filters.job_type, Selector::Only(JobType::FullTime));
    /// assert!(filters.state.is_all());
    /// assert!(filters.district.is_all());
    /// ```
    #[must_use]
    pub fn from_raw(search: &str, job_type: &str, state: &str, district: &str) -> Self {
        Self {
            search: search.to_string(),
            job_type: Selector::parse_job_type(job_type),
            state: Selector::parse(state),
            district: Selector::parse(district),
        }
    }

    /// The normalized search query: trimmed and lowercased.
    #[must_use]
    pub fn query(&self) -> String {
        self.search.trim().to_lowercase()
    }

    /// `true` when no criterion constrains the result.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.job_type.is_all()
            && self.state.is_all()
            && self.district.is_all()
    }

    /// Tests a single job against these filters.
    ///
    /// `query` must be the value of [`Filters::query`]; it is passed in so the
    /// normalization happens once per filter pass rather than once per job.
    fn matches_with_query(&self, job: &JobListing, query: &str) -> bool {
        if !query.is_empty()
            && !job.title.to_lowercase().contains(query)
            && !job.company.to_lowercase().contains(query)
        {
            return false;
        }

        self.job_type.admits(&job.job_type)
            && self.state.admits(&job.state)
            && self.district.admits(&job.district)
    }

    /// Tests a single job against these filters.
    #[must_use]
    pub fn matches(&self, job: &JobListing) -> bool {
        self.matches_with_query(job, &self.query())
    }
}

/// Returns the jobs satisfying `filters`, preserving input order.
///
/// Empty filters return a copy of the input unchanged.
#[must_use]
pub fn filter_jobs(jobs: &[JobListing], filters: &Filters) -> Vec<JobListing> {
    let _span = tracing::debug_span!("filter_jobs",
        total_jobs = jobs.len(),
        query_len = filters.search.len(),
        job_type = ?filters.job_type,
        state = ?filters.state,
        district = ?filters.district
    ).entered();

    let query = filters.query();

    let filtered: Vec<JobListing> = jobs
        .iter()
        .filter(|job| filters.matches_with_query(job, &query))
        .cloned()
        .collect();

    tracing::debug!(filtered_count = filtered.len(), "filters applied");
    filtered
}

/// Sorts listings newest first. Stable, so equal timestamps keep input order.
pub fn sort_by_date_desc(jobs: &mut [JobListing]) {
    jobs.sort_by(|a, b| b.date_posted.cmp(&a.date_posted));
}
