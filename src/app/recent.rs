//! Recently viewed countries, most recent first.

use crate::domain::Country;

/// Maximum length of the history.
pub const MAX_RECENT: usize = 10;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecentState {
    pub countries: Vec<Country>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecentAction {
    /// Moves (or inserts) the country to the front, capping the list.
    RecordView(Country),
    ClearHistory,
}

impl RecentState {
    /// Applies `action`, returning whether the state changed.
    pub fn reduce(&mut self, action: &RecentAction) -> bool {
        match action {
            RecentAction::RecordView(country) => {
                self.countries.retain(|c| c.cca3 != country.cca3);
                self.countries.insert(0, country.clone());
                self.countries.truncate(MAX_RECENT);
                true
            }
            RecentAction::ClearHistory => {
                let changed = !self.countries.is_empty();
                self.countries.clear();
                changed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(state: &mut RecentState, code: &str) {
        state.reduce(&RecentAction::RecordView(Country::new(code, code)));
    }

    fn codes(state: &RecentState) -> Vec<&str> {
        state.countries.iter().map(|c| c.cca3.as_str()).collect()
    }

    #[test]
    fn revisit_moves_to_front_without_growing() {
        let mut state = RecentState::default();
        for code in ["AAA", "BBB", "CCC"] {
            record(&mut state, code);
        }

        record(&mut state, "AAA");

        assert_eq!(codes(&state), vec!["AAA", "CCC", "BBB"]);
    }

    #[test]
    fn eleventh_view_drops_the_oldest() {
        let mut state = RecentState::default();
        let all: Vec<String> = (0..11).map(|i| format!("C{i:02}")).collect();
        for code in &all {
            record(&mut state, code);
        }

        assert_eq!(state.countries.len(), MAX_RECENT);
        assert_eq!(state.countries[0].cca3, "C10");
        assert!(!codes(&state).contains(&"C00"));
    }

    #[test]
    fn clear_empties_history() {
        let mut state = RecentState::default();
        record(&mut state, "AAA");
        assert!(state.reduce(&RecentAction::ClearHistory));
        assert!(!state.reduce(&RecentAction::ClearHistory));
    }
}
