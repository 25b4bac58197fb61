mod common;

use common::{argentina, brazil, StubCatalog};
use country_explorer::app::{AuthAction, FavoritesAction, Store};
use country_explorer::catalog::CountryRepository;
use country_explorer::domain::{ExplorerError, User};
use country_explorer::favorites::{
    toggle_favorite, FavoritesStore, FavoritesSync, MemoryFavoritesStore, ToggleOutcome,
    SUBSCRIPTION_FAILED_MESSAGE,
};
use country_explorer::orchestrator::{load_favorite_countries, view_country};
use country_explorer::storage::JsonFileStore;

fn store_in(dir: &std::path::Path) -> Store {
    Store::load(Box::new(JsonFileStore::in_dir(dir).unwrap()))
}

#[tokio::test]
async fn unauthenticated_toggle_redirects_without_remote_calls() {
    let remote = MemoryFavoritesStore::new();
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(dir.path());

    let outcome = toggle_favorite(&remote, None, &brazil(), &store.state().favorites)
        .await
        .unwrap();

    assert_eq!(outcome, ToggleOutcome::RedirectToLogin);
    assert_eq!(remote.write_calls(), 0);
}

#[tokio::test]
async fn toggling_reaches_the_projection_only_through_snapshots() {
    let remote = MemoryFavoritesStore::new();
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(dir.path());
    let user = User::new("u1");
    store.dispatch(AuthAction::LoginSuccess(user.clone()));

    let mut sync = FavoritesSync::new(remote.clone());
    for action in sync.on_auth_changed(Some(&user)).await {
        store.dispatch(action);
    }
    assert!(store.state().favorites.loading);
    let initial = sync.next_action().await.unwrap();
    store.dispatch(initial);
    assert!(store.state().favorites.items.is_empty());

    let outcome = sync.toggle_in(&mut store, &brazil()).await.unwrap();
    assert!(matches!(outcome, ToggleOutcome::Added { .. }));
    assert!(!store.state().is_favorite(&brazil()));

    let snapshot = sync.next_action().await.unwrap();
    store.dispatch(snapshot);
    assert!(store.state().is_favorite(&brazil()));

    let outcome = sync
        .toggle(store.state().user(), &brazil(), &store.state().favorites)
        .await
        .unwrap();
    assert_eq!(outcome, ToggleOutcome::Removed);
    let snapshot = sync.next_action().await.unwrap();
    store.dispatch(snapshot);
    assert!(!store.state().is_favorite(&brazil()));
}

#[tokio::test]
async fn failed_write_is_reported_and_leaves_projection_alone() {
    let remote = MemoryFavoritesStore::new();
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(dir.path());
    let user = User::new("u1");
    store.dispatch(AuthAction::LoginSuccess(user.clone()));

    let mut sync = FavoritesSync::new(remote.clone());
    for action in sync.on_auth_changed(Some(&user)).await {
        store.dispatch(action);
    }
    store.dispatch(sync.next_action().await.unwrap());
    sync.toggle_in(&mut store, &argentina()).await.unwrap();
    store.dispatch(sync.next_action().await.unwrap());
    let before = store.state().favorites.items.clone();
    assert_eq!(before.len(), 1);

    remote.set_fail_writes(true);
    let err = sync.toggle_in(&mut store, &brazil()).await.unwrap_err();

    assert!(matches!(err, ExplorerError::FavoriteSync(_)));
    assert_eq!(store.state().favorites.error.as_deref(), Some("Failed to update favorites"));
    assert_eq!(store.state().favorites.items, before);
    assert!(!store.state().is_favorite(&brazil()));
}

#[tokio::test]
async fn one_subscription_per_user_and_teardown_on_logout() {
    let remote = MemoryFavoritesStore::new();
    let mut sync = FavoritesSync::new(remote.clone());
    let alice = User::new("alice");
    let bob = User::new("bob");

    sync.on_auth_changed(Some(&alice)).await;
    assert!(sync.on_auth_changed(Some(&alice)).await.is_empty());
    assert_eq!(remote.active_subscriptions(), 1);

    sync.on_auth_changed(Some(&bob)).await;
    assert_eq!(remote.active_subscriptions(), 1);
    assert_eq!(sync.active_uid(), Some("bob"));

    sync.on_auth_changed(None).await;
    assert_eq!(remote.active_subscriptions(), 0);
    assert!(sync.next_action().await.is_none());
}

#[tokio::test]
async fn subscription_error_is_recorded_in_the_slice() {
    let remote = MemoryFavoritesStore::new();
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(dir.path());
    let user = User::new("u1");

    let mut sync = FavoritesSync::new(remote.clone());
    for action in sync.on_auth_changed(Some(&user)).await {
        store.dispatch(action);
    }
    store.dispatch(sync.next_action().await.unwrap());

    remote.fail_subscriptions("u1", "permission denied");
    let action = sync.next_action().await.unwrap();
    assert_eq!(action, FavoritesAction::SetError(SUBSCRIPTION_FAILED_MESSAGE.to_string()));
    store.dispatch(action);
    assert_eq!(store.state().favorites.error.as_deref(), Some(SUBSCRIPTION_FAILED_MESSAGE));
}

#[tokio::test]
async fn switching_users_hides_the_previous_collection() {
    let remote = MemoryFavoritesStore::new();
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(dir.path());
    let alice = User::new("alice");
    let bob = User::new("bob");
    remote.create("bob", country_explorer::domain::NewFavorite::now("ARG")).await.unwrap();

    let mut sync = FavoritesSync::new(remote.clone());
    store.dispatch(AuthAction::LoginSuccess(alice.clone()));
    for action in sync.on_auth_changed(Some(&alice)).await {
        store.dispatch(action);
    }
    store.dispatch(sync.next_action().await.unwrap());
    sync.toggle_in(&mut store, &brazil()).await.unwrap();
    store.dispatch(sync.next_action().await.unwrap());
    assert!(store.state().is_favorite(&brazil()));

    store.dispatch(AuthAction::LoginSuccess(bob.clone()));
    for action in sync.on_auth_changed(Some(&bob)).await {
        store.dispatch(action);
    }
    assert!(store.state().favorites.items.is_empty());
    assert!(!store.state().is_favorite(&brazil()));
    assert!(store.state().favorites.loading);

    store.dispatch(sync.next_action().await.unwrap());
    assert!(store.state().is_favorite(&argentina()));
    assert!(!store.state().is_favorite(&brazil()));
}

#[tokio::test]
async fn unmount_clears_the_projection() {
    let remote = MemoryFavoritesStore::new();
    remote.create("u1", country_explorer::domain::NewFavorite::now("BRA")).await.unwrap();
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(dir.path());
    let user = User::new("u1");

    let mut sync = FavoritesSync::new(remote.clone());
    for action in sync.on_auth_changed(Some(&user)).await {
        store.dispatch(action);
    }
    store.dispatch(sync.next_action().await.unwrap());
    assert_eq!(store.state().favorites.items.len(), 1);

    store.dispatch(sync.unmount());
    assert!(store.state().favorites.items.is_empty());
    assert_eq!(remote.active_subscriptions(), 0);
}

#[tokio::test]
async fn logout_clears_user_and_projection() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(dir.path());
    store.dispatch(AuthAction::LoginSuccess(User::new("u1")));
    store.dispatch(FavoritesAction::SetFavorites(vec![
        country_explorer::domain::Favorite::new("BRA", "f1"),
    ]));

    store.dispatch(AuthAction::Logout);
    assert!(store.state().user().is_none());
    assert!(store.state().favorites.items.is_empty());

    drop(store);
    assert!(store_in(dir.path()).state().user().is_none());
}

#[tokio::test]
async fn favorites_page_and_detail_views() {
    let repository = CountryRepository::new(StubCatalog::with(vec![brazil(), argentina()]));
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(dir.path());

    view_country(&repository, &mut store, "ARG").await.unwrap();
    view_country(&repository, &mut store, "BRA").await.unwrap();
    view_country(&repository, &mut store, "ARG").await.unwrap();
    let recent: Vec<_> = store.state().recent.countries.iter().map(|c| c.cca3.as_str()).collect();
    assert_eq!(recent, vec!["ARG", "BRA"]);

    let favorites = vec![
        country_explorer::domain::Favorite::new("ARG", "f1"),
        country_explorer::domain::Favorite::new("NOPE", "f2"),
        country_explorer::domain::Favorite::new("BRA", "f3"),
    ];
    let countries = load_favorite_countries(&repository, &favorites).await;
    assert_eq!(countries.iter().map(|c| c.cca3.as_str()).collect::<Vec<_>>(), vec!["ARG", "BRA"]);
}
