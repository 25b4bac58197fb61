//! Client-side refinement applied on top of catalog queries.
//!
//! The catalog only supports single-region queries and has no language query,
//! so multi-region and language selections are narrowed here.

use crate::domain::Country;

/// Keeps countries whose region is one of `regions`.
///
/// Region matching is exact, the same as the catalog's own region values.
#[must_use]
pub fn refine_by_regions(countries: Vec<Country>, regions: &[String]) -> Vec<Country> {
    countries
        .into_iter()
        .filter(|country| regions.iter().any(|region| region == &country.region))
        .collect()
}

/// Keeps countries speaking at least one of `languages`, compared case-insensitively.
///
/// Countries without any language data never match.
#[must_use]
pub fn refine_by_languages(countries: Vec<Country>, languages: &[String]) -> Vec<Country> {
    let wanted: Vec<String> = languages.iter().map(|l| l.to_lowercase()).collect();

    countries
        .into_iter()
        .filter(|country| {
            country
                .language_names()
                .any(|lang| wanted.contains(&lang.to_lowercase()))
        })
        .collect()
}
