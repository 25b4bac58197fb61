//! Remote per-user favorites store abstraction.
//!
//! The remote store exposes a live query over a user's favorites collection
//! plus create/delete of individual documents. A live query is modelled as a
//! [`FavoritesSubscription`]: a stream that yields the full collection on every
//! change and tears the remote listener down when unsubscribed or dropped.

use crate::domain::{Favorite, NewFavorite, Result};
use async_trait::async_trait;
use futures_util::Stream;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::sync::mpsc;

/// One delivery of a live query: the full collection, or the error that ended it.
pub type Snapshot = Result<Vec<Favorite>>;

type Teardown = Box<dyn FnOnce() + Send>;

/// Live, cancellable stream of favorites snapshots.
///
/// Backends create one with [`FavoritesSubscription::new`], handing over the
/// receiving end of their snapshot channel and a teardown hook that detaches
/// the remote listener. The hook runs exactly once, on
/// [`FavoritesSubscription::unsubscribe`] or on drop.
pub struct FavoritesSubscription {
    snapshots: mpsc::UnboundedReceiver<Snapshot>,
    teardown: Option<Teardown>,
}

impl FavoritesSubscription {
    #[must_use]
    pub fn new(snapshots: mpsc::UnboundedReceiver<Snapshot>, teardown: impl FnOnce() + Send + 'static) -> Self {
        Self {
            snapshots,
            teardown: Some(Box::new(teardown)),
        }
    }

    /// Waits for the next snapshot. `None` once the backend closes the stream.
    pub async fn next_snapshot(&mut self) -> Option<Snapshot> {
        self.snapshots.recv().await
    }

    /// Detaches the remote listener.
    pub fn unsubscribe(mut self) {
        self.run_teardown();
    }

    fn run_teardown(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            tracing::debug!("favorites subscription torn down");
            self.snapshots.close();
            teardown();
        }
    }
}

impl std::fmt::Debug for FavoritesSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesSubscription")
            .field("active", &self.teardown.is_some())
            .finish()
    }
}

impl Stream for FavoritesSubscription {
    type Item = Snapshot;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.snapshots.poll_recv(cx)
    }
}

impl Drop for FavoritesSubscription {
    fn drop(&mut self) {
        self.run_teardown();
    }
}

/// Remote store of per-user favorites.
#[async_trait]
pub trait FavoritesStore: Send + Sync {
    /// Starts a live query over `uid`'s favorites.
    ///
    /// The first snapshot is delivered as soon as the collection is read;
    /// later ones after every change.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::FavoriteSync`](crate::domain::ExplorerError::FavoriteSync)
    /// if the listener cannot be attached.
    async fn subscribe(&self, uid: &str) -> Result<FavoritesSubscription>;

    /// Creates a favorite document and returns its remote identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::FavoriteSync`](crate::domain::ExplorerError::FavoriteSync)
    /// if the write is rejected.
    async fn create(&self, uid: &str, favorite: NewFavorite) -> Result<String>;

    /// Deletes a favorite document by its remote identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::FavoriteSync`](crate::domain::ExplorerError::FavoriteSync)
    /// if the delete is rejected.
    async fn delete(&self, uid: &str, favorite_id: &str) -> Result<()>;
}

#[async_trait]
impl<T: FavoritesStore + ?Sized> FavoritesStore for Arc<T> {
    async fn subscribe(&self, uid: &str) -> Result<FavoritesSubscription> {
        (**self).subscribe(uid).await
    }

    async fn create(&self, uid: &str, favorite: NewFavorite) -> Result<String> {
        (**self).create(uid, favorite).await
    }

    async fn delete(&self, uid: &str, favorite_id: &str) -> Result<()> {
        (**self).delete(uid, favorite_id).await
    }
}
