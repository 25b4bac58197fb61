//! Country detail flow.

use crate::app::{RecentAction, Store};
use crate::catalog::{CatalogService, CountryRepository};
use crate::domain::{Country, ExplorerError, Result};
use tracing::Instrument;

/// Shown when a detail record cannot be loaded for any reason but "not found".
pub const DETAIL_FAILED_MESSAGE: &str = "Failed to load country details";

/// Loads the detail record for `code` and records it as recently viewed.
///
/// The view is recorded exactly once per successful load.
///
/// # Errors
///
/// [`ExplorerError::NotFound`] with its own message when the catalog has no
/// such country; every other failure becomes [`ExplorerError::Remote`] with
/// [`DETAIL_FAILED_MESSAGE`].
pub async fn view_country<S: CatalogService>(
    repository: &CountryRepository<S>,
    store: &mut Store,
    code: &str,
) -> Result<Country> {
    let loaded = repository
        .get_by_code(code)
        .instrument(tracing::debug_span!("view_country", code = %code))
        .await;

    match loaded {
        Ok(country) => {
            store.dispatch(RecentAction::RecordView(country.clone()));
            Ok(country)
        }
        Err(e @ ExplorerError::NotFound(_)) => Err(e),
        Err(e) => {
            tracing::warn!(code = %code, error = %e, "failed to load country details");
            Err(ExplorerError::Remote(DETAIL_FAILED_MESSAGE.to_string()))
        }
    }
}
