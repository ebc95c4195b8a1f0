//! Path utilities for the Zellij sandbox environment.
//!
//! The host filesystem is mounted under `/host`. Board files, the trace file
//! and user theme files are all resolved relative to that mount.

use crate::domain::region::Region;
use std::path::PathBuf;

/// Returns the data directory for JobFinder storage.
///
/// The directory is `/host/.local/share/zellij/jobfinder` in the Zellij
/// sandbox. `/host` points to the cwd of the last focused terminal, or the
/// folder where Zellij was started, which is usually the user's home.
///
/// # Examples
///
/// ```
/// use jobfinder::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str(), Some("/host/.local/share/zellij/jobfinder"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("jobfinder")
}

/// Board file for one region. Each region keeps its own posted vacancies,
/// applications and preferences.
///
/// # Examples
///
/// ```
/// use jobfinder::domain::Region;
/// use jobfinder::infrastructure::board_file;
///
/// assert!(board_file(Region::India).ends_with("jobs-india.json"));
/// ```
#[must_use]
pub fn board_file(region: Region) -> PathBuf {
    get_data_dir().join(format!("jobs-{}.json", region.key()))
}

/// Expands tilde paths to use the `/host` prefix.
///
/// Used for the `theme_file` option, which users write as a home-relative path.
///
/// # Examples
///
/// ```
/// use jobfinder::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/mine.toml"), "/host/themes/mine.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

/// Removes the `/host` prefix so paths read as they do on the host.
///
/// # Examples
///
/// ```
/// use jobfinder::infrastructure::strip_host_prefix;
///
/// assert_eq!(
///     strip_host_prefix("/host/.local/share/zellij/jobfinder"),
///     "/.local/share/zellij/jobfinder"
/// );
/// assert_eq!(strip_host_prefix("/tmp/board.json"), "/tmp/board.json");
/// ```
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    path.strip_prefix("/host").unwrap_or(path).to_string()
}
