//! Domain layer for the JobFinder plugin.
//!
//! Core job-board types and pure business rules, independent of Zellij APIs,
//! persistence, or rendering. Everything here is deterministic except
//! [`format::time_ago`], which reads the wall clock and delegates to the pure
//! [`format::time_ago_at`].
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`job`]: Job listings, applications, job types and vacancy status
//! - [`filter`]: The filter engine (search, job type, state, district)
//! - [`format`]: Salary and relative-time display helpers
//! - [`region`]: Regional variants (Malaysia, India)
//!
//! # Examples
//!
//! ```
//! use jobfinder::domain::{filter_jobs, Filters};
//! use jobfinder::catalog::JobCatalog;
//! use jobfinder::domain::Region;
//!
//! let catalog = JobCatalog::seeded(Region::Malaysia);
//! let filters = Filters {
//!     search: "engineer".to_string(),
//!     ..Filters::default()
//! };
//! let matches = filter_jobs(catalog.jobs(), &filters);
//! assert!(matches.iter().all(|job| {
//!     job.title.to_lowercase().contains("engineer")
//!         || job.company.to_lowercase().contains("engineer")
//! }));
//! ```

pub mod error;
pub mod filter;
pub mod format;
pub mod job;
pub mod region;

pub use error::{JobFinderError, Result};
pub use filter::{filter_jobs, sort_by_date_desc, Filters, Selector};
pub use format::{format_salary, time_ago, time_ago_at, SalaryNotation};
pub use job::{JobApplication, JobListing, JobType, VacancyStatus};
pub use region::{Region, RegionGroup};
