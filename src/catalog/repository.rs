//! Country repository: the catalog boundary.
//!
//! [`CountryRepository`] wraps a [`CatalogService`] and is the only place
//! where transport failures are translated into [`ExplorerError`]s. Callers
//! above this layer only ever see one of the four fixed catalog messages.
//!
//! # Query Selection
//!
//! [`CountryRepository::filter_by_query`] asks the catalog for the narrowest
//! set it can serve:
//!
//! 1. non-empty search text → by name
//! 2. exactly one region → by region
//! 3. anything else → the whole catalog
//!
//! Multi-region and language selections are then applied client-side, and the
//! result is returned in name order.

use super::service::{CatalogFailure, CatalogService};
use crate::domain::{Country, ExplorerError, Result, SortKey};
use crate::filters::{refine_by_languages, refine_by_regions, sort_countries};
use tracing::Instrument;

/// Read access to country records with user-facing error mapping.
#[derive(Debug, Clone)]
pub struct CountryRepository<S> {
    service: S,
}

impl<S: CatalogService> CountryRepository<S> {
    #[must_use]
    pub const fn new(service: S) -> Self {
        Self { service }
    }

    /// The underlying catalog service.
    #[must_use]
    pub const fn service(&self) -> &S {
        &self.service
    }

    /// Retrieves the entire catalog.
    ///
    /// # Errors
    ///
    /// [`ExplorerError::Network`] when offline, [`ExplorerError::RateLimited`]
    /// on HTTP 429, [`ExplorerError::Remote`] for anything else (a 404 from the
    /// full listing is not a "no match" condition).
    pub async fn fetch_all(&self) -> Result<Vec<Country>> {
        self.service
            .all()
            .instrument(tracing::debug_span!("fetch_all"))
            .await
            .map_err(|failure| match map_failure(failure) {
                ExplorerError::NotFound(_) => ExplorerError::remote(),
                other => other,
            })
    }

    /// Searches by name, matched by the catalog.
    ///
    /// # Errors
    ///
    /// [`ExplorerError::NotFound`] when the catalog reports no match, otherwise
    /// as for [`CountryRepository::fetch_all`].
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<Country>> {
        self.service
            .by_name(name)
            .instrument(tracing::debug_span!("search_by_name", name = %name))
            .await
            .map_err(map_failure)
    }

    /// Fetches one record by its three-letter code.
    ///
    /// The catalog answers with a list; the first element is canonical.
    ///
    /// # Errors
    ///
    /// [`ExplorerError::NotFound`] when the list is empty or the catalog
    /// reports 404.
    pub async fn get_by_code(&self, code: &str) -> Result<Country> {
        let countries = self
            .service
            .by_code(code)
            .instrument(tracing::debug_span!("get_by_code", code = %code))
            .await
            .map_err(map_failure)?;

        countries.into_iter().next().ok_or_else(|| {
            tracing::debug!(code = %code, "catalog returned no record for code");
            ExplorerError::not_found()
        })
    }

    /// Resolves a listing query into a name-ordered list of countries.
    ///
    /// An empty successful result is returned as `Ok(vec![])`; presenting it as
    /// "no matches" is up to the caller.
    ///
    /// # Errors
    ///
    /// One of the four catalog errors, each carrying its fixed message. There
    /// is no retry.
    pub async fn filter_by_query(
        &self,
        search_query: &str,
        regions: &[String],
        languages: &[String],
    ) -> Result<Vec<Country>> {
        let span = tracing::debug_span!("filter_by_query",
            query = %search_query,
            regions = regions.len(),
            languages = languages.len()
        );

        async {
            let fetched = if !search_query.is_empty() {
                tracing::debug!("querying catalog by name");
                self.service.by_name(search_query).await
            } else if let [region] = regions {
                tracing::debug!(region = %region, "querying catalog by region");
                self.service.by_region(region).await
            } else {
                tracing::debug!("querying full catalog");
                self.service.all().await
            };

            let mut countries = fetched.map_err(|failure| {
                tracing::warn!(error = %failure, "catalog query failed");
                map_failure(failure)
            })?;

            if regions.len() > 1 {
                countries = refine_by_regions(countries, regions);
            }
            if !languages.is_empty() {
                countries = refine_by_languages(countries, languages);
            }

            tracing::debug!(result_count = countries.len(), "catalog query refined");
            Ok(sort_countries(&countries, SortKey::Name))
        }
        .instrument(span)
        .await
    }
}

/// Translates a transport failure into its user-facing catalog error.
#[must_use]
pub fn map_failure(failure: CatalogFailure) -> ExplorerError {
    match failure {
        CatalogFailure::Status(404) => ExplorerError::not_found(),
        CatalogFailure::Status(429) => ExplorerError::rate_limited(),
        CatalogFailure::Offline(_) => ExplorerError::network(),
        CatalogFailure::Status(_) | CatalogFailure::Transport(_) | CatalogFailure::Decode(_) => {
            ExplorerError::remote()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::{NOT_FOUND_MESSAGE, OFFLINE_MESSAGE, RATE_LIMITED_MESSAGE, REMOTE_FAILURE_MESSAGE};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Answers every endpoint with the same canned outcome and records calls.
    struct CannedCatalog {
        outcome: std::result::Result<Vec<Country>, CatalogFailure>,
        calls: Mutex<Vec<String>>,
    }

    impl CannedCatalog {
        fn ok(countries: Vec<Country>) -> Self {
            Self { outcome: Ok(countries), calls: Mutex::new(vec![]) }
        }

        fn failing(failure: CatalogFailure) -> Self {
            Self { outcome: Err(failure), calls: Mutex::new(vec![]) }
        }

        fn answer(&self, call: String) -> std::result::Result<Vec<Country>, CatalogFailure> {
            self.calls.lock().unwrap().push(call);
            self.outcome.clone()
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CatalogService for CannedCatalog {
        async fn all(&self) -> std::result::Result<Vec<Country>, CatalogFailure> {
            self.answer("all".into())
        }
        async fn by_name(&self, name: &str) -> std::result::Result<Vec<Country>, CatalogFailure> {
            self.answer(format!("name/{name}"))
        }
        async fn by_region(&self, region: &str) -> std::result::Result<Vec<Country>, CatalogFailure> {
            self.answer(format!("region/{region}"))
        }
        async fn by_code(&self, code: &str) -> std::result::Result<Vec<Country>, CatalogFailure> {
            self.answer(format!("alpha/{code}"))
        }
    }

    fn americas() -> Vec<Country> {
        vec![
            Country::new("BRA", "Brazil").with_region("Americas").with_language("por", "Portuguese"),
            Country::new("ARG", "Argentina").with_region("Americas").with_language("spa", "Spanish"),
        ]
    }

    #[tokio::test]
    async fn search_text_wins_over_regions() {
        let repo = CountryRepository::new(CannedCatalog::ok(americas()));
        repo.filter_by_query("bra", &["Americas".into()], &[]).await.unwrap();
        assert_eq!(repo.service().calls(), vec!["name/bra"]);
    }

    #[tokio::test]
    async fn single_region_uses_region_endpoint() {
        let repo = CountryRepository::new(CannedCatalog::ok(americas()));
        repo.filter_by_query("", &["Americas".into()], &[]).await.unwrap();
        assert_eq!(repo.service().calls(), vec!["region/Americas"]);
    }

    #[tokio::test]
    async fn several_regions_fetch_all_and_refine() {
        let mut catalog = americas();
        catalog.push(Country::new("JPN", "Japan").with_region("Asia"));
        catalog.push(Country::new("FRA", "France").with_region("Europe"));
        let repo = CountryRepository::new(CannedCatalog::ok(catalog));

        let result = repo
            .filter_by_query("", &["Europe".into(), "Asia".into()], &[])
            .await
            .unwrap();

        assert_eq!(repo.service().calls(), vec!["all"]);
        let names: Vec<_> = result.iter().map(Country::common_name).collect();
        assert_eq!(names, vec!["France", "Japan"]);
    }

    #[tokio::test]
    async fn result_is_name_ordered() {
        let repo = CountryRepository::new(CannedCatalog::ok(americas()));
        let result = repo.filter_by_query("", &[], &[]).await.unwrap();
        let names: Vec<_> = result.iter().map(Country::common_name).collect();
        assert_eq!(names, vec!["Argentina", "Brazil"]);
    }

    #[tokio::test]
    async fn empty_match_is_a_success() {
        let repo = CountryRepository::new(CannedCatalog::ok(americas()));
        let result = repo.filter_by_query("", &[], &["Klingon".into()]).await.unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn failures_map_to_fixed_messages() {
        let cases = [
            (CatalogFailure::Status(404), NOT_FOUND_MESSAGE),
            (CatalogFailure::Status(429), RATE_LIMITED_MESSAGE),
            (CatalogFailure::Offline("dns".into()), OFFLINE_MESSAGE),
            (CatalogFailure::Status(500), REMOTE_FAILURE_MESSAGE),
            (CatalogFailure::Decode("eof".into()), REMOTE_FAILURE_MESSAGE),
        ];

        for (failure, expected) in cases {
            let repo = CountryRepository::new(CannedCatalog::failing(failure));
            let err = repo.filter_by_query("x", &[], &[]).await.unwrap_err();
            assert_eq!(err.user_message(), expected);
        }
    }

    #[tokio::test]
    async fn fetch_all_does_not_report_not_found() {
        let repo = CountryRepository::new(CannedCatalog::failing(CatalogFailure::Status(404)));
        let err = repo.fetch_all().await.unwrap_err();
        assert!(matches!(err, ExplorerError::Remote(_)));
    }

    #[tokio::test]
    async fn get_by_code_takes_first_record() {
        let repo = CountryRepository::new(CannedCatalog::ok(americas()));
        let country = repo.get_by_code("BRA").await.unwrap();
        assert_eq!(country.cca3, "BRA");
        assert_eq!(repo.service().calls(), vec!["alpha/BRA"]);
    }

    #[tokio::test]
    async fn get_by_code_with_empty_answer_is_not_found() {
        let repo = CountryRepository::new(CannedCatalog::ok(vec![]));
        let err = repo.get_by_code("XXX").await.unwrap_err();
        assert!(matches!(err, ExplorerError::NotFound(_)));
    }
}
