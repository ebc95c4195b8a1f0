//! Theme management and ANSI escape sequence generation.
//!
//! JobFinder ships a light and a dark palette. The user's choice is a
//! [`ThemePreference`] (light, dark or follow-the-system) that is persisted by
//! the backend; a custom TOML palette configured with `theme_file` overrides
//! both built-ins.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#f9fafb"
//! header_bg = "#1e3a8a"        # optional
//! accent = "#60a5fa"
//! selection_fg = "#0f172a"
//! selection_bg = "#60a5fa"
//! text_normal = "#e5e7eb"
//! text_dim = "#9ca3af"
//! border = "#374151"
//! search_bar_border = "#60a5fa"
//! match_highlight_fg = "#0f172a"
//! match_highlight_bg = "#facc15"
//! empty_state_fg = "#93c5fd"
//! salary_fg = "#34d399"
//! success_fg = "#4ade80"
//! error_fg = "#f87171"
//! ```
//!
//! # Example
//!
//! ```
//! use jobfinder::ui::theme::{Theme, ThemePreference};
//!
//! let theme = Theme::for_preference(ThemePreference::Light);
//! print!("{}JobFinder{}", Theme::fg(&theme.colors.accent), Theme::reset());
//! ```

use crate::domain::error::{JobFinderError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Which palette the user asked for.
///
/// Stored as `"light"`, `"dark"` or `"system"`. Terminals give a plugin no
/// reliable way to query the host's appearance, so `System` renders with the
/// dark palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::System];

    /// Parses a stored or configured value. Anything unrecognized reads as
    /// [`ThemePreference::System`].
    ///
    /// # Example
    ///
    /// ```
    /// use jobfinder::ui::theme::ThemePreference;
    ///
    /// assert_eq!(ThemePreference::parse("Dark"), ThemePreference::Dark);
    /// assert_eq!(ThemePreference::parse("sepia"), ThemePreference::System);
    /// ```
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Self::Light,
            "dark" => Self::Dark,
            _ => Self::System,
        }
    }

    /// Value written to the preference store.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }

    /// Built-in palette name this preference renders with.
    #[must_use]
    pub const fn palette(self) -> &'static str {
        match self {
            Self::Light => LIGHT,
            Self::Dark | Self::System => DARK,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const LIGHT: &str = "jobfinder-light";
const DARK: &str = "jobfinder-dark";

/// Color scheme used by every component.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`"#rrggbb"`) for each UI element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    /// Header bar fill. Omit for a transparent header.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Brand color for titles, active filters and the menu marker.
    pub accent: String,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer hints, companies, timestamps.
    pub text_dim: String,

    pub border: String,
    pub search_bar_border: String,

    /// Search match highlight.
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    pub salary_fg: String,
    pub success_fg: String,
    /// Field errors and rejected submissions.
    pub error_fg: String,
}

impl Theme {
    /// Loads a built-in palette by name.
    ///
    /// Supported names: `jobfinder-light`, `jobfinder-dark`.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the name is recognized
    /// - `None` otherwise
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            LIGHT => include_str!("../../themes/jobfinder-light.toml"),
            DARK => include_str!("../../themes/jobfinder-dark.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Built-in palette for a preference.
    #[must_use]
    pub fn for_preference(preference: ThemePreference) -> Self {
        Self::from_name(preference.palette()).unwrap_or_default()
    }

    /// Loads a custom palette from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`JobFinderError::Theme`] if the file cannot be read or the
    /// TOML does not describe a complete palette.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            JobFinderError::Theme(format!("failed to read {}: {e}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| JobFinderError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Parses `#rrggbb`; anything malformed renders as white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the dark palette.
    ///
    /// # Panics
    ///
    /// Panics if the embedded dark palette fails to parse, which the test
    /// suite rules out.
    fn default() -> Self {
        Self::from_name(DARK).expect("Built-in jobfinder-dark theme should always parse")
    }
}
