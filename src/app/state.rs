//! Application state container.
//!
//! [`AppState`] aggregates every client-owned slice. It is plain data: all
//! transitions go through [`AppState::reduce`], which routes an [`Action`] to
//! the owning slice's pure reducer. Persistence is layered on top by
//! [`Store`](crate::app::Store).
//!
//! # State Components
//!
//! - **Session**: search text, facet selections, sort order (persisted)
//! - **Auth**: the signed-in user (persisted)
//! - **Favorites**: projection of the remote per-user collection
//! - **Compare**: up to three countries plus the view toggle
//! - **Recent**: up to ten recently viewed countries

use super::actions::Action;
use super::auth::AuthState;
use super::compare::CompareState;
use super::favorites::FavoritesState;
use super::recent::RecentState;
use super::session::SessionState;
use crate::domain::{Country, User};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub session: SessionState,
    pub auth: AuthState,
    pub favorites: FavoritesState,
    pub compare: CompareState,
    pub recent: RecentState,
}

impl AppState {
    /// Creates a state with the given rehydrated session and user.
    #[must_use]
    pub fn new(session: SessionState, user: Option<User>) -> Self {
        Self {
            session,
            auth: AuthState {
                user,
                ..AuthState::default()
            },
            ..Self::default()
        }
    }

    /// Routes `action` to its slice, returning whether anything changed.
    pub fn reduce(&mut self, action: &Action) -> bool {
        let _span = tracing::debug_span!("reduce", action = ?action).entered();

        let changed = match action {
            Action::Session(a) => self.session.reduce(a),
            Action::Auth(a) => self.auth.reduce(a),
            Action::Favorites(a) => self.favorites.reduce(a),
            Action::Compare(a) => self.compare.reduce(a),
            Action::Recent(a) => self.recent.reduce(a),
        };

        tracing::trace!(changed, "action reduced");
        changed
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.auth.user.as_ref()
    }

    #[must_use]
    pub fn is_favorite(&self, country: &Country) -> bool {
        self.favorites.is_favorite(&country.cca3)
    }

    #[must_use]
    pub fn is_compared(&self, country: &Country) -> bool {
        self.compare.contains(&country.cca3)
    }
}
