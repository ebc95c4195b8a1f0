//! In-memory job catalog.
//!
//! [`JobCatalog`] holds every listing the plugin knows about: the regional
//! fixtures plus vacancies posted during the session. Browsing, filter option
//! derivation and the locations panel all read from the *published* subset
//! (listings whose status is `New`); the vacancy panels read by status.
//!
//! The catalog is the plugin-side mirror of the backend. It is seeded
//! synchronously at startup so the board renders immediately, then replaced
//! wholesale when the worker reports the backend's job list.

mod fixtures;

use crate::domain::filter::sort_by_date_desc;
use crate::domain::format::now_nanos;
use crate::domain::job::{JobListing, VacancyStatus};
use crate::domain::region::Region;
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Number of published listings in one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateCount {
    pub state: String,
    pub count: usize,
}

/// States of one regional group, alphabetically, with their counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateGroup {
    pub name: &'static str,
    pub states: Vec<StateCount>,
}

/// Headline numbers for the board overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogStats {
    pub jobs: usize,
    pub states: usize,
    pub companies: usize,
}

/// The plugin's job collection.
#[derive(Debug, Clone)]
pub struct JobCatalog {
    region: Region,
    jobs: Vec<JobListing>,
}

impl JobCatalog {
    /// Seeds the catalog with `region`'s fixtures, dated relative to now.
    #[must_use]
    pub fn seeded(region: Region) -> Self {
        Self::seeded_at(region, now_nanos())
    }

    /// Seeds the catalog with `region`'s fixtures, dated relative to `now_nanos`.
    #[must_use]
    pub fn seeded_at(region: Region, now_nanos: i64) -> Self {
        Self {
            region,
            jobs: fixtures::seed(region, now_nanos),
        }
    }

    /// Builds a catalog from an explicit job list.
    #[must_use]
    pub const fn from_jobs(region: Region, jobs: Vec<JobListing>) -> Self {
        Self { region, jobs }
    }

    #[must_use]
    pub const fn region(&self) -> Region {
        self.region
    }

    /// Every listing, in catalog order (posted vacancies first).
    #[must_use]
    pub fn jobs(&self) -> &[JobListing] {
        &self.jobs
    }

    /// Listings open to applications, in catalog order.
    #[must_use]
    pub fn published(&self) -> Vec<JobListing> {
        self.jobs
            .iter()
            .filter(|job| job.effective_status() == VacancyStatus::New)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn get(&self, job_id: &str) -> Option<&JobListing> {
        self.jobs.iter().find(|job| job.job_id == job_id)
    }

    #[must_use]
    pub fn contains(&self, job_id: &str) -> bool {
        self.get(job_id).is_some()
    }

    /// Replaces the whole collection, typically with the backend's list.
    pub fn replace_all(&mut self, jobs: Vec<JobListing>) {
        tracing::debug!(count = jobs.len(), "catalog replaced");
        self.jobs = jobs;
    }

    /// Inserts a freshly posted vacancy at the front of the catalog.
    ///
    /// Returns `false` and leaves the catalog untouched when the id is already
    /// present. Ids are assigned by the backend, so the caller should reload
    /// the full list instead.
    pub fn insert_posted(&mut self, job: JobListing) -> bool {
        if self.contains(&job.job_id) {
            tracing::debug!(job_id = %job.job_id, "posted job id already in catalog");
            return false;
        }

        self.jobs.insert(0, job);
        true
    }

    /// Distinct states among published listings, sorted.
    ///
    /// # Example
    ///
    /// ```
    /// use jobfinder::catalog::JobCatalog;
    /// use jobfinder::domain::Region;
    ///
    /// let catalog = JobCatalog::seeded(Region::Malaysia);
    /// let states = catalog.states();
    /// assert_eq!(states.first().map(String::as_str), Some("Johor"));
    /// assert!(states.windows(2).all(|w| w[0] < w[1]));
    /// ```
    #[must_use]
    pub fn states(&self) -> Vec<String> {
        self.published_iter()
            .map(|job| job.state.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct districts within `state` among published listings, sorted.
    ///
    /// Unknown states yield an empty list.
    #[must_use]
    pub fn districts_for_state(&self, state: &str) -> Vec<String> {
        self.published_iter()
            .filter(|job| job.state == state)
            .map(|job| job.district.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Published listing count per state, sorted by state name.
    #[must_use]
    pub fn state_counts(&self) -> Vec<StateCount> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for job in self.published_iter() {
            *counts.entry(job.state.as_str()).or_insert(0) += 1;
        }
        counts
            .into_iter()
            .map(|(state, count)| StateCount { state: state.to_string(), count })
            .collect()
    }

    /// Groups [`JobCatalog::state_counts`] by the region's groups, in group
    /// order, followed by an `Other` bucket. Empty groups are omitted.
    #[must_use]
    pub fn group_by_region(&self) -> Vec<StateGroup> {
        let mut grouped: BTreeMap<&'static str, Vec<StateCount>> = BTreeMap::new();
        for entry in self.state_counts() {
            grouped
                .entry(self.region.group_of(&entry.state))
                .or_default()
                .push(entry);
        }

        self.region
            .groups()
            .iter()
            .map(|group| group.name)
            .chain(std::iter::once(crate::domain::region::OTHER_GROUP))
            .filter_map(|name| {
                grouped
                    .remove(name)
                    .map(|states| StateGroup { name, states })
            })
            .collect()
    }

    /// Listings with the given status, newest first.
    #[must_use]
    pub fn by_status(&self, status: VacancyStatus) -> Vec<JobListing> {
        let mut jobs: Vec<JobListing> = self
            .jobs
            .iter()
            .filter(|job| job.effective_status() == status)
            .cloned()
            .collect();
        sort_by_date_desc(&mut jobs);
        jobs
    }

    /// Counts over published listings.
    #[must_use]
    pub fn stats(&self) -> CatalogStats {
        let companies: HashSet<&str> = self.published_iter().map(|j| j.company.as_str()).collect();
        CatalogStats {
            jobs: self.published_iter().count(),
            states: self.state_counts().len(),
            companies: companies.len(),
        }
    }

    fn published_iter(&self) -> impl Iterator<Item = &JobListing> {
        self.jobs
            .iter()
            .filter(|job| job.effective_status() == VacancyStatus::New)
    }
}

/// Generates a `user-<millis>` id not present in `existing`.
///
/// On collision a numeric suffix is appended (`user-<millis>-1`, `-2`, ...).
///
/// # Example
///
/// ```
/// use jobfinder::catalog::unique_job_id;
///
/// assert_eq!(unique_job_id(["job-1"], 42), "user-42");
/// assert_eq!(unique_job_id(["user-42", "user-42-1"], 42), "user-42-2");
/// ```
#[must_use]
pub fn unique_job_id<'a>(existing: impl IntoIterator<Item = &'a str>, now_millis: i64) -> String {
    let taken: HashSet<&str> = existing.into_iter().collect();
    let base = format!("user-{now_millis}");
    if !taken.contains(base.as_str()) {
        return base;
    }

    (1_u64..)
        .map(|n| format!("{base}-{n}"))
        .find(|candidate| !taken.contains(candidate.as_str()))
        .unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::job::JobType;

    fn posted(id: &str) -> JobListing {
        JobListing {
            job_id: id.to_string(),
            title: "Barista".to_string(),
            company: "Kopi Co".to_string(),
            description: "Pull shots.".to_string(),
            country: Some("Malaysia".to_string()),
            state: "Melaka".to_string(),
            city: Some("Melaka City".to_string()),
            district: "Melaka City".to_string(),
            job_type: JobType::PartTime,
            salary_min: 1800,
            salary_max: 2400,
            salary_currency: "MYR".to_string(),
            date_posted: now_nanos(),
            status: None,
        }
    }

    #[test]
    fn malaysia_seed_has_twenty_published_listings() {
        let catalog = JobCatalog::seeded(Region::Malaysia);
        assert_eq!(catalog.published().len(), 20);
        assert_eq!(catalog.by_status(VacancyStatus::Old).len(), 1);
        assert_eq!(catalog.by_status(VacancyStatus::Draft).len(), 1);
    }

    #[test]
    fn states_are_unique_and_sorted() {
        let catalog = JobCatalog::seeded(Region::Malaysia);
        assert_eq!(
            catalog.states(),
            vec![
                "Johor", "Kedah", "Kuala Lumpur", "Negeri Sembilan", "Pahang",
                "Penang", "Perak", "Sabah", "Sarawak", "Selangor",
            ]
        );
    }

    #[test]
    fn districts_for_state_are_unique_and_sorted() {
        let catalog = JobCatalog::seeded(Region::Malaysia);
        assert_eq!(
            catalog.districts_for_state("Selangor"),
            vec!["Klang", "Petaling Jaya", "Sepang", "Shah Alam"]
        );
        assert!(catalog.districts_for_state("Atlantis").is_empty());
    }

    #[test]
    fn drafts_do_not_leak_into_filter_options() {
        let catalog = JobCatalog::seeded(Region::Malaysia);
        assert!(!catalog.districts_for_state("Penang").contains(&"Batu Ferringhi".to_string()));
    }

    #[test]
    fn india_groups_include_other_bucket_last() {
        let catalog = JobCatalog::seeded(Region::India);
        let groups = catalog.group_by_region();
        let names: Vec<&str> = groups.iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["North India", "West India", "South India", "East India", "Other"]);

        let other = groups.last().unwrap();
        let other_states: Vec<&str> = other.states.iter().map(|s| s.state.as_str()).collect();
        assert_eq!(other_states, vec!["Haryana", "Kerala"]);

        let total: usize = groups.iter().flat_map(|g| &g.states).map(|s| s.count).sum();
        assert_eq!(total, catalog.stats().jobs);
    }

    #[test]
    fn by_status_is_newest_first() {
        let catalog = JobCatalog::seeded(Region::India);
        let old = catalog.by_status(VacancyStatus::Old);
        let companies: Vec<&str> = old.iter().map(|j| j.company.as_str()).collect();
        assert_eq!(companies, vec!["TCS", "Infosys", "Wipro"]);
    }

    #[test]
    fn insert_posted_refuses_known_ids() {
        let mut catalog = JobCatalog::seeded(Region::Malaysia);
        let before = catalog.jobs().to_vec();

        assert!(!catalog.insert_posted(posted("job-1")));
        assert_eq!(catalog.jobs(), before.as_slice());

        let ids: HashSet<&str> = catalog.jobs().iter().map(|j| j.job_id.as_str()).collect();
        assert_eq!(ids.len(), catalog.jobs().len());
    }

    #[test]
    fn insert_posted_prepends_fresh_ids() {
        let mut catalog = JobCatalog::seeded(Region::Malaysia);
        let before = catalog.jobs().len();
        assert!(catalog.insert_posted(posted("user-1")));
        assert_eq!(catalog.jobs().len(), before + 1);
        assert_eq!(catalog.jobs()[0].job_id, "user-1");
        assert!(catalog.states().contains(&"Melaka".to_string()));
    }

    #[test]
    fn unique_job_id_skips_taken_suffixes() {
        assert_eq!(unique_job_id(Vec::<&str>::new(), 7), "user-7");
        assert_eq!(unique_job_id(["user-7", "user-7-1", "user-7-2"], 7), "user-7-3");
    }

    #[test]
    fn stats_count_distinct_companies() {
        let catalog = JobCatalog::seeded(Region::Malaysia);
        let stats = catalog.stats();
        assert_eq!(stats.jobs, 20);
        assert_eq!(stats.states, 10);
        assert_eq!(stats.companies, 20);
    }
}
