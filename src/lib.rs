//! JobFinder: a Zellij plugin for browsing and posting job vacancies.
//!
//! JobFinder provides:
//! - A job board with title search plus job type, state and district filters
//! - An application form with validation and a guarded submission flow
//! - Vacancy posting and per-status vacancy lists
//! - Side panels for locations, board totals, applications and themes
//! - Malaysia and India variants selected by configuration
//! - Persistent storage in a JSON file, owned by a Zellij worker thread

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, forms, panels                    │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog       │   │ Worker Layer  │
//! │ (ui/)         │   │ (catalog/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - Fixtures    │   │ - IPC bridge  │
//! │ - Theming     │   │ - Grouping    │   │ - Backend     │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Backend & Infrastructure                   │
//! │  - Job model, filter engine, formatting (domain/)   │
//! │  - JobBackend trait and JSON store (backend/)       │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Tracing and span export (observability/)         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Event Flow
//!
//! 1. Zellij delivers a key or worker message to `main.rs`
//! 2. The shim translates it into an [`Event`]
//! 3. [`handle_event`] mutates [`AppState`] and returns [`Action`]s
//! 4. The shim executes the actions (post to worker, hide pane)
//! 5. The worker answers with a `WorkerResponse`, which re-enters at step 2
//!
//! # Example
//!
//! ```
//! use jobfinder::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! handle_event(&mut state, &Event::CycleJobType)?;
//! assert!(!state.filters.job_type.is_all());
//! # Ok::<(), jobfinder::JobFinderError>(())
//! ```

pub mod app;
pub mod backend;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, KeyContext, Screen, SearchFocus};
pub use domain::{JobFinderError, JobListing, Region, Result};
pub use ui::{Theme, ThemePreference};

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/jobfinder.wasm" {
///     region "india"
///     theme "light"
///     theme_file "~/.config/jobfinder/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Which country's board to serve. Default: Malaysia.
    pub region: Region,

    /// Preference to render with until the stored one loads.
    pub theme: Option<ThemePreference>,

    /// Path to a custom TOML palette. Overrides every preference palette.
    /// See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Missing keys take their defaults. An unrecognized `region` is logged
    /// and falls back to Malaysia; `theme_file` has `~` expanded.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use jobfinder::{Config, Region, ThemePreference};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("region".to_string(), "India".to_string());
    /// map.insert("theme".to_string(), "dark".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.region, Region::India);
    /// assert_eq!(config.theme, Some(ThemePreference::Dark));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let region = config.get("region").map_or(Ok(Region::default()), |raw| parse_region(raw));
        let region = region.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "using default region");
            Region::default()
        });

        Self {
            region,
            theme: config.get("theme").map(|raw| ThemePreference::parse(raw)),
            theme_file: config
                .get("theme_file")
                .map(|path| infrastructure::paths::expand_tilde(path)),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Parses the `region` configuration value.
///
/// # Errors
///
/// Returns [`JobFinderError::Config`] for anything but `malaysia` or `india`.
pub fn parse_region(raw: &str) -> Result<Region> {
    Region::parse(raw).ok_or_else(|| JobFinderError::Config(format!("unknown region '{raw}'")))
}

/// Creates the initial [`AppState`] for a configuration.
///
/// The board is seeded with the region's fixtures so it renders before the
/// worker answers. A `theme_file` that fails to load is logged and ignored.
///
/// # Example
///
/// ```
/// use jobfinder::{initialize, Config, Region};
///
/// let state = initialize(&Config { region: Region::India, ..Config::default() });
/// assert!(state.filtered_jobs.iter().all(|job| job.salary_currency == "INR"));
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(region = config.region.key(), "initializing jobfinder plugin");

    let custom_theme = config.theme_file.as_ref().and_then(|theme_file| {
        Theme::from_file(theme_file)
            .map_err(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using built-in palettes");
            })
            .ok()
    });

    AppState::new(config.region, config.theme.unwrap_or_default(), custom_theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_region_is_a_config_error() {
        assert!(matches!(parse_region("mars"), Err(JobFinderError::Config(_))));

        let mut map = BTreeMap::new();
        map.insert("region".to_string(), "mars".to_string());
        assert_eq!(Config::from_zellij(&map).region, Region::Malaysia);
    }

    #[test]
    fn missing_theme_file_falls_back() {
        let config = Config {
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            theme: Some(ThemePreference::Light),
            ..Config::default()
        };
        let state = initialize(&config);
        assert!(!state.custom_theme);
        assert_eq!(state.theme.name, "jobfinder-light");
    }

    #[test]
    fn theme_file_overrides_preference() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("mine.toml");
        let dark = include_str!("../themes/jobfinder-dark.toml").replace("jobfinder-dark", "mine");
        std::fs::write(&path, dark).unwrap();

        let config = Config {
            theme_file: Some(path.to_string_lossy().to_string()),
            theme: Some(ThemePreference::Light),
            ..Config::default()
        };
        let state = initialize(&config);
        assert!(state.custom_theme);
        assert_eq!(state.theme.name, "mine");
    }
}
