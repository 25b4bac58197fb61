//! Facet extraction: the distinct regions and languages present in a listing.

use crate::domain::Country;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Filter options derived from a set of countries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facets {
    /// Distinct non-empty regions, alphabetically sorted.
    pub regions: Vec<String>,
    /// Distinct language display names, alphabetically sorted.
    pub languages: Vec<String>,
}

impl Facets {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty() && self.languages.is_empty()
    }
}

/// Collects every region and language display name, deduplicated and sorted.
///
/// # Examples
///
/// ```
/// use country_explorer::filters::distinct_facets;
///
/// assert!(distinct_facets(&[]).is_empty());
/// ```
#[must_use]
pub fn distinct_facets(countries: &[Country]) -> Facets {
    let mut regions = BTreeSet::new();
    let mut languages = BTreeSet::new();

    for country in countries {
        if !country.region.is_empty() {
            regions.insert(country.region.clone());
        }
        languages.extend(country.language_names().map(str::to_string));
    }

    tracing::debug!(
        countries = countries.len(),
        regions = regions.len(),
        languages = languages.len(),
        "facets extracted"
    );

    Facets {
        regions: regions.into_iter().collect(),
        languages: languages.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_facets() {
        assert_eq!(distinct_facets(&[]), Facets::default());
    }

    #[test]
    fn facets_are_deduplicated_and_sorted() {
        let countries = vec![
            Country::new("FRA", "France").with_region("Europe").with_language("fra", "French"),
            Country::new("BRA", "Brazil").with_region("Americas").with_language("por", "Portuguese"),
            Country::new("CAN", "Canada")
                .with_region("Americas")
                .with_language("eng", "English")
                .with_language("fra", "French"),
            Country::new("ATA", "Antarctica"),
        ];

        let facets = distinct_facets(&countries);

        assert_eq!(facets.regions, vec!["Americas", "Europe"]);
        assert_eq!(facets.languages, vec!["English", "French", "Portuguese"]);
    }
}
