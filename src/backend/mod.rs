//! Backend layer: the typed client boundary and its local implementation.
//!
//! # Modules
//!
//! - `client`: the [`JobBackend`] trait every backend implements
//! - `json`: JSON file implementation layered over region fixtures
//! - `models`: request/response payloads shared with the worker protocol

pub mod client;
pub mod json;
pub mod models;

pub use client::JobBackend;
pub use json::JsonBackend;
pub use models::{ApplicationRequest, ApplicationResult, BoardSummary, JobTypeCounts, NewVacancy};

/// Preference key under which the theme choice is stored.
pub const THEME_PREFERENCE_KEY: &str = "jobfinder-theme";
