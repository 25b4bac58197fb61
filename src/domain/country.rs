//! Country record as delivered by the catalog.
//!
//! Records are read-only snapshots. Every attribute except the common name has
//! a default so partial payloads still deserialize; the catalog omits fields
//! such as `capital` or `borders` for some territories.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Common, official and native names of a country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryName {
    pub common: String,
    #[serde(default)]
    pub official: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub native_name: BTreeMap<String, NativeName>,
}

/// Name of a country in one of its own languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeName {
    #[serde(default)]
    pub common: String,
    #[serde(default)]
    pub official: String,
}

/// Flag image references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub png: String,
    #[serde(default)]
    pub svg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// A currency entry keyed by its ISO code in [`Country::currencies`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

/// Map links published alongside a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Maps {
    #[serde(default)]
    pub google_maps: String,
    #[serde(default)]
    pub open_street_maps: String,
}

/// A country record identified by its three-letter `cca3` code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    #[serde(default)]
    pub cca3: String,
    pub name: CountryName,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subregion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capital: Option<Vec<String>>,
    /// Language code to display name. Unordered in the catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default)]
    pub area: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currencies: Option<BTreeMap<String, Currency>>,
    #[serde(default)]
    pub timezones: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub borders: Option<Vec<String>>,
    #[serde(default)]
    pub latlng: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub independent: Option<bool>,
    #[serde(default)]
    pub un_member: bool,
    #[serde(default)]
    pub maps: Maps,
}

impl Country {
    /// Builds a minimal record. Mostly useful for tests and fixtures.
    ///
    /// # Examples
    ///
    /// ```
    /// use country_explorer::domain::Country;
    ///
    /// let country = Country::new("BRA", "Brazil");
    /// assert_eq!(country.common_name(), "Brazil");
    /// assert!(country.language_names().next().is_none());
    /// ```
    #[must_use]
    pub fn new(cca3: impl Into<String>, common_name: impl Into<String>) -> Self {
        Self {
            cca3: cca3.into(),
            name: CountryName {
                common: common_name.into(),
                official: String::new(),
                native_name: BTreeMap::new(),
            },
            population: 0,
            region: String::new(),
            subregion: None,
            capital: None,
            languages: None,
            flags: Flags::default(),
            area: 0.0,
            currencies: None,
            timezones: Vec::new(),
            borders: None,
            latlng: Vec::new(),
            independent: None,
            un_member: false,
            maps: Maps::default(),
        }
    }

    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    #[must_use]
    pub fn with_population(mut self, population: u64) -> Self {
        self.population = population;
        self
    }

    #[must_use]
    pub fn with_language(mut self, code: impl Into<String>, name: impl Into<String>) -> Self {
        self.languages
            .get_or_insert_with(BTreeMap::new)
            .insert(code.into(), name.into());
        self
    }

    #[must_use]
    pub fn common_name(&self) -> &str {
        &self.name.common
    }

    /// Display names of the country's languages.
    pub fn language_names(&self) -> impl Iterator<Item = &str> {
        self.languages
            .iter()
            .flat_map(|langs| langs.values().map(String::as_str))
    }

    /// Comma-joined capitals, or `"N/A"` when the record has none.
    #[must_use]
    pub fn capital_label(&self) -> String {
        match &self.capital {
            Some(capitals) if !capitals.is_empty() => capitals.join(", "),
            _ => "N/A".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_catalog_payload_deserializes() {
        let json = r#"{"name":{"common":"Brazil"},"region":"Americas","languages":{"por":"Portuguese"}}"#;
        let country: Country = serde_json::from_str(json).unwrap();

        assert_eq!(country.common_name(), "Brazil");
        assert_eq!(country.region, "Americas");
        assert_eq!(country.population, 0);
        assert_eq!(country.language_names().collect::<Vec<_>>(), vec!["Portuguese"]);
        assert!(country.cca3.is_empty());
    }

    #[test]
    fn full_catalog_payload_deserializes() {
        let json = r#"{
            "cca3": "ARG",
            "name": {"common": "Argentina", "official": "Argentine Republic",
                     "nativeName": {"spa": {"common": "Argentina", "official": "República Argentina"}}},
            "population": 45376763,
            "region": "Americas",
            "subregion": "South America",
            "capital": ["Buenos Aires"],
            "languages": {"grn": "Guaraní", "spa": "Spanish"},
            "flags": {"png": "a.png", "svg": "a.svg", "alt": "Three bands"},
            "area": 2780400.0,
            "currencies": {"ARS": {"name": "Argentine peso", "symbol": "$"}},
            "timezones": ["UTC-03:00"],
            "borders": ["BOL", "BRA"],
            "latlng": [-34.0, -64.0],
            "independent": true,
            "unMember": true,
            "maps": {"googleMaps": "g", "openStreetMaps": "o"}
        }"#;
        let country: Country = serde_json::from_str(json).unwrap();

        assert_eq!(country.cca3, "ARG");
        assert_eq!(country.name.native_name["spa"].official, "República Argentina");
        assert_eq!(country.capital_label(), "Buenos Aires");
        assert!(country.un_member);
        assert_eq!(country.currencies.unwrap()["ARS"].symbol.as_deref(), Some("$"));
    }

    #[test]
    fn capital_label_falls_back() {
        assert_eq!(Country::new("ATA", "Antarctica").capital_label(), "N/A");
    }
}
