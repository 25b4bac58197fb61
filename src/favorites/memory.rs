//! In-process favorites store.
//!
//! Keeps every user's collection in memory and publishes snapshots through a
//! `tokio::sync::watch` channel per user, so it behaves like a live remote
//! query: a subscriber gets the current collection immediately and a fresh
//! full snapshot after every create or delete.
//!
//! Writes can be made to fail with [`MemoryFavoritesStore::set_fail_writes`]
//! and live queries can be broken with
//! [`MemoryFavoritesStore::fail_subscriptions`], which makes the store usable
//! as a stand-in for the hosted backend.

use super::store::{FavoritesStore, FavoritesSubscription, Snapshot};
use crate::domain::{ExplorerError, Favorite, NewFavorite, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::{mpsc, watch};

#[derive(Debug, Clone)]
struct StoredFavorite {
    favorite: Favorite,
    created_at: i64,
}

struct Collection {
    docs: Vec<StoredFavorite>,
    publisher: watch::Sender<Snapshot>,
}

impl Collection {
    fn new() -> Self {
        let (publisher, _) = watch::channel(Ok(Vec::new()));
        Self {
            docs: Vec::new(),
            publisher,
        }
    }

    fn publish(&self) {
        let snapshot = self.docs.iter().map(|d| d.favorite.clone()).collect();
        let _ = self.publisher.send_replace(Ok(snapshot));
    }
}

#[derive(Default)]
struct Inner {
    collections: HashMap<String, Collection>,
    next_id: u64,
    fail_writes: bool,
    write_calls: usize,
    active_subscriptions: usize,
}

/// Favorites store held entirely in memory.
#[derive(Clone, Default)]
pub struct MemoryFavoritesStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryFavoritesStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| ExplorerError::FavoriteSync("favorites store lock poisoned".to_string()))
    }

    /// Makes subsequent create/delete calls fail.
    pub fn set_fail_writes(&self, fail: bool) {
        if let Ok(mut inner) = self.lock() {
            inner.fail_writes = fail;
        }
    }

    /// Delivers an error to every live query on `uid`'s collection.
    pub fn fail_subscriptions(&self, uid: &str, message: &str) {
        if let Ok(inner) = self.lock() {
            if let Some(collection) = inner.collections.get(uid) {
                let _ = collection
                    .publisher
                    .send_replace(Err(ExplorerError::FavoriteSync(message.to_string())));
            }
        }
    }

    /// Number of create/delete calls received, including failed ones.
    #[must_use]
    pub fn write_calls(&self) -> usize {
        self.lock().map(|inner| inner.write_calls).unwrap_or(0)
    }

    /// Number of live queries currently attached.
    #[must_use]
    pub fn active_subscriptions(&self) -> usize {
        self.lock().map(|inner| inner.active_subscriptions).unwrap_or(0)
    }

    /// Current favorites of `uid`, oldest first.
    #[must_use]
    pub fn favorites(&self, uid: &str) -> Vec<Favorite> {
        self.lock()
            .map(|inner| {
                inner
                    .collections
                    .get(uid)
                    .map(|c| c.docs.iter().map(|d| d.favorite.clone()).collect())
                    .unwrap_or_default()
            })
            .unwrap_or_default()
    }

    fn begin_write(&self) -> Result<MutexGuard<'_, Inner>> {
        let mut inner = self.lock()?;
        inner.write_calls += 1;
        if inner.fail_writes {
            return Err(ExplorerError::FavoriteSync("write rejected by store".to_string()));
        }
        Ok(inner)
    }
}

#[async_trait]
impl FavoritesStore for MemoryFavoritesStore {
    async fn subscribe(&self, uid: &str) -> Result<FavoritesSubscription> {
        let mut receiver = {
            let mut inner = self.lock()?;
            inner.active_subscriptions += 1;
            inner
                .collections
                .entry(uid.to_string())
                .or_insert_with(Collection::new)
                .publisher
                .subscribe()
        };

        let (tx, rx) = mpsc::unbounded_channel();
        let forwarder = tokio::spawn(async move {
            loop {
                let snapshot = receiver.borrow_and_update().clone();
                if tx.send(snapshot).is_err() {
                    break;
                }
                if receiver.changed().await.is_err() {
                    break;
                }
            }
        });

        tracing::debug!(uid = %uid, "favorites live query attached");

        let inner = Arc::clone(&self.inner);
        Ok(FavoritesSubscription::new(rx, move || {
            forwarder.abort();
            if let Ok(mut inner) = inner.lock() {
                inner.active_subscriptions = inner.active_subscriptions.saturating_sub(1);
            }
        }))
    }

    async fn create(&self, uid: &str, favorite: NewFavorite) -> Result<String> {
        let mut inner = self.begin_write()?;
        inner.next_id += 1;
        let favorite_id = format!("fav-{}", inner.next_id);

        let collection = inner
            .collections
            .entry(uid.to_string())
            .or_insert_with(Collection::new);
        collection.docs.push(StoredFavorite {
            favorite: Favorite::new(favorite.country_code, favorite_id.clone()),
            created_at: favorite.created_at,
        });
        collection.docs.sort_by_key(|d| d.created_at);
        collection.publish();

        tracing::debug!(uid = %uid, favorite_id = %favorite_id, "favorite created");
        Ok(favorite_id)
    }

    async fn delete(&self, uid: &str, favorite_id: &str) -> Result<()> {
        let mut inner = self.begin_write()?;
        let collection = inner
            .collections
            .get_mut(uid)
            .ok_or_else(|| ExplorerError::FavoriteSync(format!("no favorites for user {uid}")))?;

        let before = collection.docs.len();
        collection.docs.retain(|d| d.favorite.favorite_id != favorite_id);
        if collection.docs.len() == before {
            return Err(ExplorerError::FavoriteSync(format!("favorite not found: {favorite_id}")));
        }
        collection.publish();

        tracing::debug!(uid = %uid, favorite_id = %favorite_id, "favorite deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscriber_sees_initial_and_updated_snapshots() {
        let store = MemoryFavoritesStore::new();
        let mut subscription = store.subscribe("u1").await.unwrap();

        assert_eq!(subscription.next_snapshot().await.unwrap().unwrap(), vec![]);

        let id = store.create("u1", NewFavorite::now("BRA")).await.unwrap();
        let snapshot = subscription.next_snapshot().await.unwrap().unwrap();
        assert_eq!(snapshot, vec![Favorite::new("BRA", id.clone())]);

        store.delete("u1", &id).await.unwrap();
        assert!(subscription.next_snapshot().await.unwrap().unwrap().is_empty());
    }

    #[tokio::test]
    async fn collections_are_per_user() {
        let store = MemoryFavoritesStore::new();
        store.create("u1", NewFavorite::now("BRA")).await.unwrap();
        assert!(store.favorites("u2").is_empty());
        assert_eq!(store.favorites("u1").len(), 1);
    }

    #[tokio::test]
    async fn failed_writes_are_counted_and_rejected() {
        let store = MemoryFavoritesStore::new();
        store.set_fail_writes(true);

        let err = store.create("u1", NewFavorite::now("BRA")).await.unwrap_err();
        assert!(matches!(err, ExplorerError::FavoriteSync(_)));
        assert_eq!(store.write_calls(), 1);
        assert!(store.favorites("u1").is_empty());
    }

    #[tokio::test]
    async fn unsubscribe_detaches() {
        let store = MemoryFavoritesStore::new();
        let subscription = store.subscribe("u1").await.unwrap();
        assert_eq!(store.active_subscriptions(), 1);
        subscription.unsubscribe();
        assert_eq!(store.active_subscriptions(), 0);
    }

    #[tokio::test]
    async fn subscription_errors_are_delivered() {
        let store = MemoryFavoritesStore::new();
        let mut subscription = store.subscribe("u1").await.unwrap();
        subscription.next_snapshot().await.unwrap().unwrap();

        store.fail_subscriptions("u1", "permission denied");
        let delivered = subscription.next_snapshot().await.unwrap();
        assert!(matches!(delivered, Err(ExplorerError::FavoriteSync(_))));
    }
}
