//! Session/query slice: search text, facet selections and sort order.
//!
//! This is the only slice whose every transition is persisted. The persisted
//! JSON shape is camelCase and every field is optional on read, so a document
//! written by an older build (or an empty one) rehydrates to the defaults.

use crate::domain::SortKey;
use serde::{Deserialize, Serialize};

/// Current listing query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionState {
    pub search_query: String,
    /// Selected languages in selection order. No duplicates.
    pub selected_languages: Vec<String>,
    /// Selected regions in selection order. No duplicates.
    pub selected_regions: Vec<String>,
    pub sort_by: SortKey,
}

/// Transitions of the session slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    SetQuery(String),
    /// Adds a language. Adding one that is already selected is a no-op.
    AddLanguage(String),
    /// Removes a language. Removing one that is not selected is a no-op.
    RemoveLanguage(String),
    /// Toggles a region: adding an already-selected region removes it.
    AddRegion(String),
    RemoveRegion(String),
    /// Empties both selections; query and sort are kept.
    ClearFilters,
    SetSortBy(SortKey),
}

impl SessionState {
    /// Applies `action`, returning whether the state changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use country_explorer::app::session::{SessionAction, SessionState};
    ///
    /// let mut session = SessionState::default();
    /// assert!(session.reduce(&SessionAction::AddRegion("Europe".into())));
    /// assert!(session.reduce(&SessionAction::AddRegion("Europe".into())));
    /// assert!(session.selected_regions.is_empty());
    /// ```
    pub fn reduce(&mut self, action: &SessionAction) -> bool {
        match action {
            SessionAction::SetQuery(query) => {
                if &self.search_query == query {
                    return false;
                }
                self.search_query.clone_from(query);
                true
            }
            SessionAction::AddLanguage(language) => {
                if self.selected_languages.contains(language) {
                    return false;
                }
                self.selected_languages.push(language.clone());
                true
            }
            SessionAction::RemoveLanguage(language) => remove_value(&mut self.selected_languages, language),
            SessionAction::AddRegion(region) => {
                if !remove_value(&mut self.selected_regions, region) {
                    self.selected_regions.push(region.clone());
                }
                true
            }
            SessionAction::RemoveRegion(region) => remove_value(&mut self.selected_regions, region),
            SessionAction::ClearFilters => {
                let changed = !self.selected_languages.is_empty() || !self.selected_regions.is_empty();
                self.selected_languages.clear();
                self.selected_regions.clear();
                changed
            }
            SessionAction::SetSortBy(key) => {
                let changed = self.sort_by != *key;
                self.sort_by = *key;
                changed
            }
        }
    }

    /// Whether any facet is selected.
    #[must_use]
    pub fn has_filters(&self) -> bool {
        !self.selected_languages.is_empty() || !self.selected_regions.is_empty()
    }
}

fn remove_value(values: &mut Vec<String>, value: &str) -> bool {
    let before = values.len();
    values.retain(|v| v != value);
    values.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_language_is_idempotent() {
        let mut session = SessionState::default();
        assert!(session.reduce(&SessionAction::AddLanguage("Spanish".into())));
        assert!(!session.reduce(&SessionAction::AddLanguage("Spanish".into())));
        assert_eq!(session.selected_languages, vec!["Spanish"]);
    }

    #[test]
    fn remove_absent_language_is_a_no_op() {
        let mut session = SessionState::default();
        assert!(!session.reduce(&SessionAction::RemoveLanguage("French".into())));
    }

    #[test]
    fn selection_order_is_preserved() {
        let mut session = SessionState::default();
        for region in ["Europe", "Asia", "Africa"] {
            session.reduce(&SessionAction::AddRegion(region.into()));
        }
        session.reduce(&SessionAction::RemoveRegion("Asia".into()));
        assert_eq!(session.selected_regions, vec!["Europe", "Africa"]);
    }

    #[test]
    fn clear_filters_keeps_query_and_sort() {
        let mut session = SessionState::default();
        session.reduce(&SessionAction::SetQuery("an".into()));
        session.reduce(&SessionAction::SetSortBy(SortKey::PopulationDesc));
        session.reduce(&SessionAction::AddRegion("Asia".into()));
        session.reduce(&SessionAction::AddLanguage("Hindi".into()));

        assert!(session.reduce(&SessionAction::ClearFilters));

        assert!(!session.has_filters());
        assert_eq!(session.search_query, "an");
        assert_eq!(session.sort_by, SortKey::PopulationDesc);
    }

    #[test]
    fn partial_persisted_document_takes_defaults() {
        let session: SessionState = serde_json::from_str(r#"{"searchQuery":"chi"}"#).unwrap();
        assert_eq!(session.search_query, "chi");
        assert_eq!(session.sort_by, SortKey::Name);
        assert!(session.selected_regions.is_empty());
    }

    #[test]
    fn persisted_shape_is_camel_case() {
        let session = SessionState {
            search_query: "x".into(),
            sort_by: SortKey::NameDesc,
            ..SessionState::default()
        };
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["sortBy"], "nameDesc");
        assert_eq!(json["searchQuery"], "x");
    }
}
