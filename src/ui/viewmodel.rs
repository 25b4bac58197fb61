//! View models: display-ready projections of application state.
//!
//! View models are computed from [`AppState`] and the current [`ListingView`]
//! and contain no business logic. Anything a renderer would otherwise have to
//! derive (formatted numbers, capital fallbacks, favorite and comparison
//! markers, fuzzy match highlight ranges) is pre-computed here.

use crate::app::{AppState, MAX_COMPARED};
use crate::domain::Country;
use crate::orchestrator::ListingView;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Renderable state of the main listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingViewModel {
    pub rows: Vec<CountryRow>,
    pub status: ListingStatus,
    /// Summary line, e.g. `"2 countries"`.
    pub summary: String,
    pub search_bar: SearchBarInfo,
    /// Whether the comparison action is available (at least two selected).
    pub can_compare: bool,
}

/// What the listing area shows besides (or instead of) rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingStatus {
    Idle,
    Loading,
    Ready,
    Message(String),
}

/// One country row in the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRow {
    pub code: String,
    pub name: String,
    pub region: String,
    pub capital: String,
    /// Population with thousands separators.
    pub population: String,
    pub flag_url: String,
    pub is_favorite: bool,
    pub is_compared: bool,
    /// Character ranges of `name` matched by the search query.
    ///
    /// Each tuple is `(start, end)` in character indices, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    /// Active region and language chips, regions first.
    pub chips: Vec<String>,
}

/// Side-by-side comparison of the selected countries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonViewModel {
    /// Country names, one column each.
    pub columns: Vec<String>,
    pub rows: Vec<ComparisonRow>,
    /// Free slots left in the comparison set.
    pub remaining_slots: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    pub label: String,
    /// One value per column.
    pub values: Vec<String>,
}

impl ListingViewModel {
    /// Computes the listing view model.
    #[must_use]
    pub fn compute(state: &AppState, view: &ListingView) -> Self {
        let _span = tracing::debug_span!("compute_listing_viewmodel").entered();

        let query = state.session.search_query.trim();
        let matcher = (!query.is_empty()).then(SkimMatcherV2::default);

        let rows: Vec<CountryRow> = view
            .countries()
            .iter()
            .map(|country| CountryRow {
                code: country.cca3.clone(),
                name: country.common_name().to_string(),
                region: country.region.clone(),
                capital: country.capital_label(),
                population: format_population(country.population),
                flag_url: country.flags.png.clone(),
                is_favorite: state.is_favorite(country),
                is_compared: state.is_compared(country),
                highlight_ranges: matcher
                    .as_ref()
                    .map_or_else(Vec::new, |m| highlight_ranges(m, country.common_name(), query)),
            })
            .collect();

        let status = match view {
            ListingView::Idle => ListingStatus::Idle,
            ListingView::Loading => ListingStatus::Loading,
            ListingView::Success(_) => ListingStatus::Ready,
            ListingView::Error(message) => ListingStatus::Message(message.clone()),
        };

        let summary = match rows.len() {
            1 => "1 country".to_string(),
            n => format!("{n} countries"),
        };

        let chips = state
            .session
            .selected_regions
            .iter()
            .chain(&state.session.selected_languages)
            .cloned()
            .collect();

        Self {
            rows,
            status,
            summary,
            search_bar: SearchBarInfo {
                query: state.session.search_query.clone(),
                chips,
            },
            can_compare: state.compare.countries.len() >= 2,
        }
    }
}

impl ComparisonViewModel {
    /// Computes the comparison table from the comparison set.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn compute(state: &AppState) -> Self {
        let countries = &state.compare.countries;
        let row = |label: &str, value: fn(&Country) -> String| ComparisonRow {
            label: label.to_string(),
            values: countries.iter().map(value).collect(),
        };

        Self {
            columns: countries.iter().map(|c| c.common_name().to_string()).collect(),
            rows: vec![
                row("Capital", Country::capital_label),
                row("Region", |c| c.region.clone()),
                row("Subregion", |c| c.subregion.clone().unwrap_or_else(|| "N/A".to_string())),
                row("Population", |c| format_population(c.population)),
                row("Area", |c| format!("{} km²", format_population(c.area.round() as u64))),
                row("Languages", |c| {
                    let names: Vec<_> = c.language_names().collect();
                    if names.is_empty() { "N/A".to_string() } else { names.join(", ") }
                }),
                row("Currencies", |c| {
                    c.currencies.as_ref().map_or_else(
                        || "N/A".to_string(),
                        |currencies| {
                            currencies
                                .values()
                                .map(|currency| currency.name.clone())
                                .collect::<Vec<_>>()
                                .join(", ")
                        },
                    )
                }),
                row("Timezones", |c| c.timezones.join(", ")),
            ],
            remaining_slots: MAX_COMPARED.saturating_sub(countries.len()),
        }
    }
}

/// Formats a number with comma thousands separators.
#[must_use]
pub fn format_population(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Coalesces fuzzy match indices into contiguous `(start, end)` ranges.
fn highlight_ranges(matcher: &SkimMatcherV2, text: &str, query: &str) -> Vec<(usize, usize)> {
    let Some((_score, indices)) = matcher.fuzzy_indices(text, query) else {
        return Vec::new();
    };

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}
