//! Regional variants of the job board.
//!
//! Malaysia and India differ only in data (fixtures, currency, salary notation,
//! tagline, and how states are grouped on the locations panel), so they are a
//! single configuration value rather than separate code paths.

use crate::domain::format::SalaryNotation;
use serde::{Deserialize, Serialize};

/// A named group of states shown together on the locations panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionGroup {
    pub name: &'static str,
    pub states: &'static [&'static str],
}

const MALAYSIA_GROUPS: &[RegionGroup] = &[
    RegionGroup {
        name: "Central Region",
        states: &["Kuala Lumpur", "Negeri Sembilan", "Putrajaya", "Selangor"],
    },
    RegionGroup { name: "Northern Region", states: &["Kedah", "Penang", "Perak", "Perlis"] },
    RegionGroup { name: "Southern Region", states: &["Johor", "Melaka"] },
    RegionGroup { name: "East Coast", states: &["Kelantan", "Pahang", "Terengganu"] },
    RegionGroup { name: "East Malaysia", states: &["Labuan", "Sabah", "Sarawak"] },
];

const INDIA_GROUPS: &[RegionGroup] = &[
    RegionGroup { name: "North India", states: &["Delhi", "Jammu & Kashmir", "Uttar Pradesh"] },
    RegionGroup { name: "West India", states: &["Gujarat", "Maharashtra"] },
    RegionGroup {
        name: "South India",
        states: &["Andhra Pradesh", "Karnataka", "Tamil Nadu", "Telangana"],
    },
    RegionGroup { name: "East India", states: &["West Bengal"] },
];

/// States and federal territories offered when posting, sorted.
const MALAYSIA_STATES: &[&str] = &[
    "Johor", "Kedah", "Kelantan", "Kuala Lumpur", "Labuan", "Melaka", "Negeri Sembilan", "Pahang",
    "Penang", "Perak", "Perlis", "Putrajaya", "Sabah", "Sarawak", "Selangor", "Terengganu",
];

const INDIA_STATES: &[&str] = &[
    "Andhra Pradesh", "Arunachal Pradesh", "Assam", "Bihar", "Chhattisgarh", "Delhi", "Goa",
    "Gujarat", "Haryana", "Himachal Pradesh", "Jammu & Kashmir", "Jharkhand", "Karnataka",
    "Kerala", "Madhya Pradesh", "Maharashtra", "Manipur", "Meghalaya", "Mizoram", "Nagaland",
    "Odisha", "Punjab", "Rajasthan", "Sikkim", "Tamil Nadu", "Telangana", "Tripura",
    "Uttar Pradesh", "Uttarakhand", "West Bengal",
];

/// Name of the bucket for states not covered by any [`RegionGroup`].
pub const OTHER_GROUP: &str = "Other";

/// Which country's board the plugin serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    Malaysia,
    India,
}

impl Region {
    /// Parses a config value, case-insensitively. Unknown values yield `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use jobfinder::domain::Region;
    ///
    /// assert_eq!(Region::parse("India"), Some(Region::India));
    /// assert_eq!(Region::parse(" malaysia "), Some(Region::Malaysia));
    /// assert_eq!(Region::parse("atlantis"), None);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "malaysia" | "my" => Some(Self::Malaysia),
            "india" | "in" => Some(Self::India),
            _ => None,
        }
    }

    /// Lowercase identifier used in file names.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Malaysia => "malaysia",
            Self::India => "india",
        }
    }

    #[must_use]
    pub const fn country(self) -> &'static str {
        match self {
            Self::Malaysia => "Malaysia",
            Self::India => "India",
        }
    }

    #[must_use]
    pub const fn currency(self) -> &'static str {
        match self {
            Self::Malaysia => "MYR",
            Self::India => "INR",
        }
    }

    #[must_use]
    pub const fn salary_notation(self) -> SalaryNotation {
        match self {
            Self::Malaysia => SalaryNotation::Thousands,
            Self::India => SalaryNotation::Lakh,
        }
    }

    /// Subtitle shown in the header next to the product name.
    #[must_use]
    pub const fn tagline(self) -> &'static str {
        match self {
            Self::Malaysia => "Malaysia's Job Board",
            Self::India => "India's Job Board",
        }
    }

    /// Ordered regional groupings for the locations panel.
    #[must_use]
    pub const fn groups(self) -> &'static [RegionGroup] {
        match self {
            Self::Malaysia => MALAYSIA_GROUPS,
            Self::India => INDIA_GROUPS,
        }
    }

    /// Every state a vacancy may be posted in, sorted.
    #[must_use]
    pub const fn states(self) -> &'static [&'static str] {
        match self {
            Self::Malaysia => MALAYSIA_STATES,
            Self::India => INDIA_STATES,
        }
    }

    /// Name of the group containing `state`, or [`OTHER_GROUP`].
    #[must_use]
    pub fn group_of(self, state: &str) -> &'static str {
        self.groups()
            .iter()
            .find(|group| group.states.contains(&state))
            .map_or(OTHER_GROUP, |group| group.name)
    }
}
