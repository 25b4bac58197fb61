//! Comparison slice: up to three countries shown side by side.

use crate::domain::Country;

/// Maximum number of countries in the comparison set.
pub const MAX_COMPARED: usize = 3;

/// Countries selected for comparison plus the view toggle.
///
/// Countries are kept by value so the comparison view never refetches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompareState {
    pub countries: Vec<Country>,
    pub is_comparing: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CompareAction {
    /// Removes the country if present, else adds it if there is room.
    Toggle(Country),
    SetComparing(bool),
    /// Empties the set and hides the comparison view.
    Clear,
}

impl CompareState {
    /// Applies `action`, returning whether the state changed.
    pub fn reduce(&mut self, action: &CompareAction) -> bool {
        match action {
            CompareAction::Toggle(country) => self.toggle(country),
            CompareAction::SetComparing(value) => {
                let changed = self.is_comparing != *value;
                self.is_comparing = *value;
                changed
            }
            CompareAction::Clear => {
                let changed = !self.countries.is_empty() || self.is_comparing;
                self.countries.clear();
                self.is_comparing = false;
                changed
            }
        }
    }

    fn toggle(&mut self, country: &Country) -> bool {
        if let Some(index) = self.countries.iter().position(|c| c.cca3 == country.cca3) {
            self.countries.remove(index);
            return true;
        }
        if self.countries.len() < MAX_COMPARED {
            self.countries.push(country.clone());
            return true;
        }
        tracing::debug!(code = %country.cca3, "comparison set full, ignoring");
        false
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.countries.iter().any(|c| c.cca3 == code)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.countries.len() >= MAX_COMPARED
    }
}
