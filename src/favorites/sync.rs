//! Favorites synchronization: toggling and the live subscription lifecycle.
//!
//! Toggling never touches local state. It issues a remote create or delete and
//! the change reaches the [`FavoritesState`] projection only through the next
//! subscription snapshot, delivered as a [`FavoritesAction`] by
//! [`FavoritesSync::next_action`].

use super::store::FavoritesStore;
use crate::app::{FavoritesAction, FavoritesState, Store};
use crate::domain::{Country, ExplorerError, NewFavorite, Result, User};
use futures_util::StreamExt;

/// Message recorded in the favorites slice when the live query fails.
pub const SUBSCRIPTION_FAILED_MESSAGE: &str = "Failed to load favorites";

/// Message recorded in the favorites slice when a create or delete fails.
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update favorites";

/// What a favorite toggle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Nobody is signed in; the caller should send the user to the login screen.
    RedirectToLogin,
    /// A favorite document was created remotely.
    Added { favorite_id: String },
    /// The favorite document was deleted remotely.
    Removed,
}

/// Toggles `country` in the signed-in user's remote favorites.
///
/// # Errors
///
/// Returns [`ExplorerError::FavoriteSync`] if the remote write fails. The
/// error is non-blocking for the caller's view.
pub async fn toggle_favorite<F>(
    store: &F,
    user: Option<&User>,
    country: &Country,
    projection: &FavoritesState,
) -> Result<ToggleOutcome>
where
    F: FavoritesStore + ?Sized,
{
    let Some(user) = user else {
        tracing::debug!(code = %country.cca3, "favorite toggle without user, redirecting to login");
        return Ok(ToggleOutcome::RedirectToLogin);
    };

    let outcome = match projection.favorite_for(&country.cca3) {
        Some(favorite) => store
            .delete(&user.uid, &favorite.favorite_id)
            .await
            .map(|()| ToggleOutcome::Removed),
        None => store
            .create(&user.uid, NewFavorite::now(country.cca3.clone()))
            .await
            .map(|favorite_id| ToggleOutcome::Added { favorite_id }),
    };

    outcome.map_err(|e| {
        tracing::warn!(code = %country.cca3, error = %e, "failed to update favorites");
        match e {
            ExplorerError::FavoriteSync(_) => e,
            other => ExplorerError::FavoriteSync(other.to_string()),
        }
    })
}

/// Owns the single live favorites subscription of a mounted view.
pub struct FavoritesSync<F> {
    store: F,
    active: Option<ActiveSubscription>,
}

struct ActiveSubscription {
    uid: String,
    subscription: super::store::FavoritesSubscription,
}

impl<F: FavoritesStore> FavoritesSync<F> {
    #[must_use]
    pub const fn new(store: F) -> Self {
        Self { store, active: None }
    }

    #[must_use]
    pub const fn store(&self) -> &F {
        &self.store
    }

    /// Uid of the user whose collection is being followed.
    #[must_use]
    pub fn active_uid(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.uid.as_str())
    }

    /// Follows the signed-in user's collection, or stops following on logout.
    ///
    /// Returns the slice actions the caller must dispatch. Re-reporting the
    /// same user keeps the existing subscription and returns nothing. Any other
    /// change clears the projection first, so a previous user's documents are
    /// never visible while the new collection loads. A live query that cannot
    /// be attached is reported as [`SUBSCRIPTION_FAILED_MESSAGE`].
    pub async fn on_auth_changed(&mut self, user: Option<&User>) -> Vec<FavoritesAction> {
        match user {
            Some(user) if self.active_uid() == Some(user.uid.as_str()) => Vec::new(),
            Some(user) => {
                let mut actions = vec![self.unmount(), FavoritesAction::SetLoading(true)];
                match self.store.subscribe(&user.uid).await {
                    Ok(subscription) => {
                        tracing::debug!(uid = %user.uid, "following favorites");
                        self.active = Some(ActiveSubscription {
                            uid: user.uid.clone(),
                            subscription,
                        });
                    }
                    Err(e) => {
                        tracing::error!(uid = %user.uid, error = %e, "failed to follow favorites");
                        actions.push(FavoritesAction::SetError(SUBSCRIPTION_FAILED_MESSAGE.to_string()));
                    }
                }
                actions
            }
            None => vec![self.unmount()],
        }
    }

    /// Tears down the active subscription, if any, and returns the action that
    /// clears the projection.
    #[must_use]
    pub fn unmount(&mut self) -> FavoritesAction {
        if let Some(active) = self.active.take() {
            tracing::debug!(uid = %active.uid, "unfollowing favorites");
            active.subscription.unsubscribe();
        }
        FavoritesAction::SetFavorites(Vec::new())
    }

    /// Waits for the next snapshot and converts it into a slice action.
    ///
    /// Returns `None` when there is no active subscription or the backend
    /// closed it.
    pub async fn next_action(&mut self) -> Option<FavoritesAction> {
        let active = self.active.as_mut()?;
        match active.subscription.next().await? {
            Ok(snapshot) => {
                tracing::debug!(count = snapshot.len(), "favorites snapshot received");
                Some(FavoritesAction::SetFavorites(snapshot))
            }
            Err(e) => {
                tracing::error!(error = %e, "favorites subscription failed");
                Some(FavoritesAction::SetError(SUBSCRIPTION_FAILED_MESSAGE.to_string()))
            }
        }
    }

    /// Toggles `country` for `user` against this sync's store.
    ///
    /// # Errors
    ///
    /// See [`toggle_favorite`].
    pub async fn toggle(
        &self,
        user: Option<&User>,
        country: &Country,
        projection: &FavoritesState,
    ) -> Result<ToggleOutcome> {
        toggle_favorite(&self.store, user, country, projection).await
    }

    /// Toggles `country` for the store's signed-in user.
    ///
    /// A failed remote write is recorded in the favorites slice as
    /// [`UPDATE_FAILED_MESSAGE`]; the projection itself is left alone.
    ///
    /// # Errors
    ///
    /// See [`toggle_favorite`].
    pub async fn toggle_in(&self, store: &mut Store, country: &Country) -> Result<ToggleOutcome> {
        let result = {
            let state = store.state();
            toggle_favorite(&self.store, state.user(), country, &state.favorites).await
        };

        if result.is_err() {
            store.dispatch(FavoritesAction::SetError(UPDATE_FAILED_MESSAGE.to_string()));
        }
        result
    }
}

impl<F> Drop for FavoritesSync<F> {
    fn drop(&mut self) {
        if let Some(active) = self.active.take() {
            active.subscription.unsubscribe();
        }
    }
}
