//! Listing sort orders.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sort order applied to a country listing.
///
/// Serialized with the same keys the session has always been persisted with
/// (`name`, `nameDesc`, `population`, `populationDesc`). Any other persisted
/// value deserializes to [`SortKey::Unsorted`], which leaves the input order
/// untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "nameDesc")]
    NameDesc,
    #[serde(rename = "population")]
    Population,
    #[serde(rename = "populationDesc")]
    PopulationDesc,
    #[serde(rename = "unsorted", other)]
    Unsorted,
}

impl SortKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::NameDesc => "nameDesc",
            Self::Population => "population",
            Self::PopulationDesc => "populationDesc",
            Self::Unsorted => "unsorted",
        }
    }

    /// Parses a key leniently: unknown keys map to [`SortKey::Unsorted`].
    ///
    /// # Examples
    ///
    /// ```
    /// use country_explorer::domain::SortKey;
    ///
    /// assert_eq!(SortKey::parse_lenient("populationDesc"), SortKey::PopulationDesc);
    /// assert_eq!(SortKey::parse_lenient("area"), SortKey::Unsorted);
    /// ```
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        raw.parse().unwrap_or(Self::Unsorted)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "nameDesc" => Ok(Self::NameDesc),
            "population" => Ok(Self::Population),
            "populationDesc" => Ok(Self::PopulationDesc),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}
