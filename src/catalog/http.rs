//! HTTP implementation of [`CatalogService`] over the REST Countries API.

use super::service::{CatalogFailure, CatalogService};
use crate::domain::{Country, ExplorerError, Result};
use crate::Config;
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::Instrument;

/// Public REST Countries endpoint used when no other catalog is configured.
pub const DEFAULT_CATALOG_URL: &str = "https://restcountries.com/v3.1";

/// Catalog client speaking to a REST Countries compatible service.
///
/// Endpoints used: `/all`, `/name/{name}`, `/region/{region}`, `/alpha/{code}`.
/// Path arguments are percent-encoded; region names are lower-cased as the
/// service expects.
#[derive(Debug, Clone)]
pub struct RestCatalog {
    base_url: Url,
    http: Client,
}

impl RestCatalog {
    /// Creates a client for `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Config`] if the URL cannot be parsed or used as
    /// a base, or if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ExplorerError::Config(format!("invalid catalog url {base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ExplorerError::Config(format!(
                "catalog url cannot be used as a base: {base_url}"
            )));
        }

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ExplorerError::Config(format!("failed to build http client: {e}")))?;

        Ok(Self { base_url, http })
    }

    /// Creates a client from the catalog settings in `config`.
    ///
    /// # Errors
    ///
    /// See [`RestCatalog::new`].
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.catalog_url,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Builds the URL for an endpoint and its path segments.
    fn endpoint(&self, segments: &[&str]) -> std::result::Result<Url, CatalogFailure> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| CatalogFailure::Transport("catalog url cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get(&self, segments: &[&str]) -> std::result::Result<Vec<Country>, CatalogFailure> {
        let url = self.endpoint(segments)?;
        let span = tracing::debug_span!("catalog_get", url = %url);
        self.fetch(url).instrument(span).await
    }

    async fn fetch(&self, url: Url) -> std::result::Result<Vec<Country>, CatalogFailure> {
        let response = self.http.get(url).send().await.map_err(classify_transport)?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "catalog returned error status");
            return Err(CatalogFailure::Status(status.as_u16()));
        }

        let countries: Vec<Country> = response
            .json()
            .await
            .map_err(|e| CatalogFailure::Decode(e.to_string()))?;

        tracing::debug!(count = countries.len(), "catalog records received");
        Ok(countries)
    }
}

fn classify_transport(err: reqwest::Error) -> CatalogFailure {
    if err.is_connect() || err.is_timeout() {
        CatalogFailure::Offline(err.to_string())
    } else if let Some(status) = err.status() {
        CatalogFailure::Status(status.as_u16())
    } else {
        CatalogFailure::Transport(err.to_string())
    }
}

#[async_trait]
impl CatalogService for RestCatalog {
    async fn all(&self) -> std::result::Result<Vec<Country>, CatalogFailure> {
        self.get(&["all"]).await
    }

    async fn by_name(&self, name: &str) -> std::result::Result<Vec<Country>, CatalogFailure> {
        self.get(&["name", name]).await
    }

    async fn by_region(&self, region: &str) -> std::result::Result<Vec<Country>, CatalogFailure> {
        let region = region.to_lowercase();
        self.get(&["region", region.as_str()]).await
    }

    async fn by_code(&self, code: &str) -> std::result::Result<Vec<Country>, CatalogFailure> {
        self.get(&["alpha", code]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(base: &str) -> RestCatalog {
        RestCatalog::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn endpoints_extend_the_base_path() {
        let url = catalog(DEFAULT_CATALOG_URL).endpoint(&["name", "brazil"]).unwrap();
        assert_eq!(url.as_str(), "https://restcountries.com/v3.1/name/brazil");
    }

    #[test]
    fn trailing_slash_in_base_is_tolerated() {
        let url = catalog("https://example.test/v3.1/").endpoint(&["all"]).unwrap();
        assert_eq!(url.as_str(), "https://example.test/v3.1/all");
    }

    #[test]
    fn path_arguments_are_encoded() {
        let url = catalog(DEFAULT_CATALOG_URL).endpoint(&["name", "united states"]).unwrap();
        assert_eq!(url.as_str(), "https://restcountries.com/v3.1/name/united%20states");
    }

    #[test]
    fn invalid_base_url_is_a_config_error() {
        let err = RestCatalog::new("not a url", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, ExplorerError::Config(_)));
    }
}
