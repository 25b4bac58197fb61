//! Remote favorites: store abstraction, live subscription and toggling.
//!
//! # Modules
//!
//! - [`store`]: the remote store trait and the cancellable snapshot stream
//! - [`sync`]: favorite toggling and the one-subscription-per-view lifecycle
//! - [`memory`]: in-process store backed by `tokio::sync::watch`

pub mod memory;
pub mod store;
pub mod sync;

pub use memory::MemoryFavoritesStore;
pub use store::{FavoritesStore, FavoritesSubscription, Snapshot};
pub use sync::{
    toggle_favorite, FavoritesSync, ToggleOutcome, SUBSCRIPTION_FAILED_MESSAGE, UPDATE_FAILED_MESSAGE,
};
