//! Error types for the JobFinder plugin.
//!
//! This module defines the centralized error type [`JobFinderError`] and a type alias
//! [`Result`] used across the catalog, backend, worker and application layers. All
//! variants are implemented with `thiserror`.
//!
//! Validation failures on the apply form never become a `JobFinderError`; they are
//! kept as per-field messages on the form itself. This type covers everything that
//! crosses a layer boundary.

use thiserror::Error;

/// The main error type for JobFinder operations.
///
/// # Examples
///
/// ```
/// use jobfinder::domain::JobFinderError;
///
/// fn check_salary(min: u64, max: u64) -> Result<(), JobFinderError> {
///     if min > max {
///         return Err(JobFinderError::InvalidVacancy(
///             "Minimum salary cannot exceed maximum".to_string(),
///         ));
///     }
///     Ok(())
/// }
///
/// assert!(check_salary(9000, 4000).is_err());
/// ```
#[derive(Debug, Error)]
pub enum JobFinderError {
    /// Reading or writing the persisted board file failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Automatically converts from `std::io::Error`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed.
    ///
    /// Raised for worker payloads and the on-disk board file alike.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// The background worker could not service a request.
    ///
    /// Typically raised when a request arrives before the worker has been told
    /// which region's board to open.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The backend refused an operation for a reason other than I/O.
    #[error("Backend error: {0}")]
    Backend(String),

    /// A vacancy payload failed backend-side validation.
    #[error("Invalid vacancy: {0}")]
    InvalidVacancy(String),
}

/// A specialized `Result` type for JobFinder operations.
pub type Result<T> = std::result::Result<T, JobFinderError>;
