//! Store: application state plus write-through persistence.
//!
//! [`Store`] is the explicit container passed to whatever needs application
//! state. It owns the [`AppState`] and a [`KeyValueStore`]; every
//! [`Store::dispatch`] runs the pure reducer and then, for persisted
//! transitions, writes the affected slice through to storage.
//!
//! Persistence is best-effort: a failed write is logged and never rolls the
//! in-memory state back.
//!
//! # Example
//!
//! ```no_run
//! use country_explorer::app::{SessionAction, Store};
//! use country_explorer::storage::JsonFileStore;
//! use std::path::Path;
//!
//! let storage = JsonFileStore::in_dir(Path::new("/tmp/country-explorer"))?;
//! let mut store = Store::load(Box::new(storage));
//! store.dispatch(SessionAction::SetQuery("peru".into()));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::actions::Action;
use super::auth::AuthAction;
use super::favorites::FavoritesAction;
use super::session::SessionState;
use super::state::AppState;
use crate::domain::{ExplorerError, Result, User};
use crate::storage::KeyValueStore;
use serde::de::DeserializeOwned;

/// Storage key of the persisted session slice.
pub const SESSION_KEY: &str = "session";

/// Storage key of the persisted signed-in user.
pub const USER_KEY: &str = "user";

pub struct Store {
    state: AppState,
    storage: Box<dyn KeyValueStore>,
}

impl Store {
    /// Rehydrates state from `storage`.
    ///
    /// Missing or unreadable entries fall back to defaults; a corrupt entry is
    /// logged rather than failing startup.
    #[must_use]
    pub fn load(storage: Box<dyn KeyValueStore>) -> Self {
        let _span = tracing::debug_span!("store_load").entered();

        let session = read_entry::<SessionState>(storage.as_ref(), SESSION_KEY)
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "failed to rehydrate session, using defaults");
                None
            })
            .unwrap_or_default();

        let user = read_entry::<User>(storage.as_ref(), USER_KEY).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to rehydrate user");
            None
        });

        tracing::debug!(
            query = %session.search_query,
            regions = session.selected_regions.len(),
            languages = session.selected_languages.len(),
            sort_by = %session.sort_by,
            signed_in = user.is_some(),
            "state rehydrated"
        );

        Self {
            state: AppState::new(session, user),
            storage,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Applies `action` and performs its persistence post-condition.
    ///
    /// Returns whether visible state changed.
    pub fn dispatch(&mut self, action: impl Into<Action>) -> bool {
        let action = action.into();
        let mut changed = self.state.reduce(&action);

        if matches!(action, Action::Auth(AuthAction::Logout)) {
            changed |= self
                .state
                .reduce(&Action::Favorites(FavoritesAction::SetFavorites(Vec::new())));
        }

        if action.is_persisted() {
            if let Err(e) = self.persist(&action) {
                tracing::warn!(error = %e, "failed to persist state");
            }
        }

        changed
    }

    fn persist(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Session(_) => {
                let json = to_json(&self.state.session)?;
                self.storage.set(SESSION_KEY, &json)
            }
            Action::Auth(AuthAction::LoginSuccess(user)) => {
                let json = to_json(user)?;
                self.storage.set(USER_KEY, &json)
            }
            Action::Auth(AuthAction::Logout) => self.storage.remove(USER_KEY),
            _ => Ok(()),
        }
    }
}

fn read_entry<T: DeserializeOwned>(storage: &dyn KeyValueStore, key: &str) -> Result<Option<T>> {
    storage
        .get(key)?
        .map(|raw| {
            serde_json::from_str(&raw)
                .map_err(|e| ExplorerError::Storage(format!("invalid {key} entry: {e}")))
        })
        .transpose()
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| ExplorerError::Storage(format!("failed to serialize: {e}")))
}
