//! Listing sort orders.
//!
//! Name ordering approximates a locale-aware collation: comparison is
//! case-insensitive with common Latin diacritics folded to their base letter,
//! so "Åland Islands" sorts among the A's. Ties on the folded key fall back to
//! ordinal comparison of the raw names so the order stays total.

use crate::domain::{Country, SortKey};
use std::cmp::Ordering;

/// Returns a new vector ordered by `key`.
///
/// The sort is stable. [`SortKey::Unsorted`] returns the input order.
///
/// # Examples
///
/// ```
/// use country_explorer::domain::{Country, SortKey};
/// use country_explorer::filters::sort_countries;
///
/// let countries = vec![Country::new("CHL", "Chile"), Country::new("ALA", "Åland Islands")];
/// let sorted = sort_countries(&countries, SortKey::Name);
/// assert_eq!(sorted[0].common_name(), "Åland Islands");
/// ```
#[must_use]
pub fn sort_countries(countries: &[Country], key: SortKey) -> Vec<Country> {
    let _span = tracing::debug_span!("sort_countries", count = countries.len(), key = %key).entered();

    let mut sorted = countries.to_vec();
    match key {
        SortKey::Name => sorted.sort_by(|a, b| compare_names(a.common_name(), b.common_name())),
        SortKey::NameDesc => sorted.sort_by(|a, b| compare_names(b.common_name(), a.common_name())),
        SortKey::Population => sorted.sort_by_key(|c| c.population),
        SortKey::PopulationDesc => sorted.sort_by(|a, b| b.population.cmp(&a.population)),
        SortKey::Unsorted => {}
    }
    sorted
}

/// Sorts by a raw key string, leaving the order unchanged for unknown keys.
#[must_use]
pub fn sort_countries_by(countries: &[Country], raw_key: &str) -> Vec<Country> {
    sort_countries(countries, SortKey::parse_lenient(raw_key))
}

/// Compares two display names the way a listing should present them.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

fn collation_key(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .map(fold_diacritic)
        .collect()
}

const fn fold_diacritic(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' => 'a',
        'ç' | 'č' | 'ć' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'ē' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' => 'i',
        'ñ' | 'ń' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' => 'u',
        'ý' | 'ÿ' => 'y',
        'š' | 'ś' => 's',
        'ž' | 'ź' | 'ż' => 'z',
        other => other,
    }
}
