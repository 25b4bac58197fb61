//! Application layer: state slices, typed actions and the store.
//!
//! # Architecture
//!
//! State flows in one direction:
//!
//! ```text
//! User / subscription → Action → Store::dispatch → slice reducer → AppState
//!                                      │
//!                                      └─→ write-through persistence
//! ```
//!
//! Reducers are pure and synchronous; they return whether visible state
//! changed so callers can skip re-rendering.
//!
//! # Modules
//!
//! - [`actions`]: the [`Action`] enum wrapping every slice action
//! - [`state`]: [`AppState`], the aggregate of all slices
//! - [`store`]: [`Store`], state plus persistence
//! - [`session`], [`auth`], [`favorites`], [`compare`], [`recent`]: slices

pub mod actions;
pub mod auth;
pub mod compare;
pub mod favorites;
pub mod recent;
pub mod session;
pub mod state;
pub mod store;

pub use actions::Action;
pub use auth::{AuthAction, AuthState};
pub use compare::{CompareAction, CompareState, MAX_COMPARED};
pub use favorites::{FavoritesAction, FavoritesState};
pub use recent::{RecentAction, RecentState, MAX_RECENT};
pub use session::{SessionAction, SessionState};
pub use state::AppState;
pub use store::{Store, SESSION_KEY, USER_KEY};
