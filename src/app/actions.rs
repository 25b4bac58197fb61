//! Typed actions dispatched to the application store.
//!
//! Each slice owns its own action enum; [`Action`] wraps them so a single
//! [`Store::dispatch`](crate::app::Store::dispatch) entry point can route any
//! transition. `From` conversions let callers dispatch slice actions directly.
//!
//! # Example
//!
//! ```rust
//! use country_explorer::app::{Action, SessionAction};
//!
//! let action: Action = SessionAction::SetQuery("peru".into()).into();
//! assert!(action.is_persisted());
//! ```

use super::auth::AuthAction;
use super::compare::CompareAction;
use super::favorites::FavoritesAction;
use super::recent::RecentAction;
use super::session::SessionAction;

/// Any state transition of the application.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Session(SessionAction),
    Auth(AuthAction),
    Favorites(FavoritesAction),
    Compare(CompareAction),
    Recent(RecentAction),
}

impl Action {
    /// Whether this transition writes through to durable storage.
    ///
    /// Session transitions always persist the session slice. Login success and
    /// logout persist (or remove) the current user. Selection state is not
    /// persisted.
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        matches!(
            self,
            Self::Session(_) | Self::Auth(AuthAction::LoginSuccess(_) | AuthAction::Logout)
        )
    }
}

impl From<SessionAction> for Action {
    fn from(action: SessionAction) -> Self {
        Self::Session(action)
    }
}

impl From<AuthAction> for Action {
    fn from(action: AuthAction) -> Self {
        Self::Auth(action)
    }
}

impl From<FavoritesAction> for Action {
    fn from(action: FavoritesAction) -> Self {
        Self::Favorites(action)
    }
}

impl From<CompareAction> for Action {
    fn from(action: CompareAction) -> Self {
        Self::Compare(action)
    }
}

impl From<RecentAction> for Action {
    fn from(action: RecentAction) -> Self {
        Self::Recent(action)
    }
}
