//! Catalog transport abstraction.
//!
//! [`CatalogService`] mirrors the four read-only endpoints of the remote
//! catalog. Implementations report failures as [`CatalogFailure`], a
//! transport-level classification; translating those into user-facing errors is
//! the repository's job.

use crate::domain::Country;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Transport-level outcome of a failed catalog call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogFailure {
    /// The catalog could not be reached (connect failure or timeout).
    #[error("catalog unreachable: {0}")]
    Offline(String),

    /// The catalog answered with a non-success HTTP status.
    #[error("catalog answered with status {0}")]
    Status(u16),

    /// The request failed for another transport reason.
    #[error("catalog request failed: {0}")]
    Transport(String),

    /// The response body was not a list of country records.
    #[error("catalog response could not be decoded: {0}")]
    Decode(String),
}

/// Read-only access to the remote country catalog.
///
/// Every endpoint answers with a list of records, including the by-code lookup.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Every record in the catalog.
    async fn all(&self) -> Result<Vec<Country>, CatalogFailure>;

    /// Records whose name matches `name`. Matching is performed by the catalog.
    async fn by_name(&self, name: &str) -> Result<Vec<Country>, CatalogFailure>;

    /// Records in a single region.
    async fn by_region(&self, region: &str) -> Result<Vec<Country>, CatalogFailure>;

    /// Records for a three-letter code.
    async fn by_code(&self, code: &str) -> Result<Vec<Country>, CatalogFailure>;
}

#[async_trait]
impl<T: CatalogService + ?Sized> CatalogService for Arc<T> {
    async fn all(&self) -> Result<Vec<Country>, CatalogFailure> {
        (**self).all().await
    }

    async fn by_name(&self, name: &str) -> Result<Vec<Country>, CatalogFailure> {
        (**self).by_name(name).await
    }

    async fn by_region(&self, region: &str) -> Result<Vec<Country>, CatalogFailure> {
        (**self).by_region(region).await
    }

    async fn by_code(&self, code: &str) -> Result<Vec<Country>, CatalogFailure> {
        (**self).by_code(code).await
    }
}
