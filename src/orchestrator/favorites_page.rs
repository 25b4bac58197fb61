//! Favorites page: resolves the favorites projection into country records.

use crate::catalog::{CatalogService, CountryRepository};
use crate::domain::{Country, Favorite};
use futures_util::future::join_all;
use tracing::Instrument;

/// Fetches every favorite's country concurrently.
///
/// Countries come back in favorite order. A favorite whose record cannot be
/// loaded is logged and left out.
pub async fn load_favorite_countries<S: CatalogService>(
    repository: &CountryRepository<S>,
    favorites: &[Favorite],
) -> Vec<Country> {
    let span = tracing::debug_span!("load_favorite_countries", count = favorites.len());

    async {
        let lookups = favorites.iter().map(|favorite| async move {
            repository
                .get_by_code(&favorite.country_code)
                .await
                .map_err(|e| {
                    tracing::warn!(code = %favorite.country_code, error = %e, "failed to load favorite country");
                })
                .ok()
        });

        let countries: Vec<Country> = join_all(lookups).await.into_iter().flatten().collect();
        tracing::debug!(loaded = countries.len(), "favorite countries loaded");
        countries
    }
    .instrument(span)
    .await
}
