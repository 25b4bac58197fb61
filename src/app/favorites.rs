//! Favorites slice: a read projection of the remote per-user collection.
//!
//! The projection is only ever replaced wholesale by subscription snapshots.
//! Toggling a favorite sends a remote write and waits for the next snapshot;
//! nothing here updates optimistically.

use crate::domain::Favorite;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesState {
    pub items: Vec<Favorite>,
    /// Country codes of `items`, for quick lookup.
    pub favorite_ids: Vec<String>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoritesAction {
    /// Replaces the projection with a snapshot; clears loading and error.
    SetFavorites(Vec<Favorite>),
    SetLoading(bool),
    SetError(String),
}

impl FavoritesState {
    /// Applies `action`, returning whether the state changed.
    pub fn reduce(&mut self, action: &FavoritesAction) -> bool {
        let before = self.clone();
        match action {
            FavoritesAction::SetFavorites(snapshot) => {
                self.items.clone_from(snapshot);
                self.favorite_ids = snapshot.iter().map(|f| f.country_code.clone()).collect();
                self.loading = false;
                self.error = None;
            }
            FavoritesAction::SetLoading(loading) => self.loading = *loading,
            FavoritesAction::SetError(message) => {
                self.error = Some(message.clone());
                self.loading = false;
            }
        }
        *self != before
    }

    #[must_use]
    pub fn is_favorite(&self, code: &str) -> bool {
        self.favorite_ids.iter().any(|id| id == code)
    }

    /// The remote favorite document for `code`, if any.
    #[must_use]
    pub fn favorite_for(&self, code: &str) -> Option<&Favorite> {
        self.items.iter().find(|f| f.country_code == code)
    }
}
