//! Error types for the country explorer.
//!
//! This module defines the centralized error type [`ExplorerError`] and a type alias
//! [`Result`] used throughout the crate. Catalog failures are always surfaced as
//! one of the four user-facing kinds ([`ExplorerError::Network`],
//! [`ExplorerError::RateLimited`], [`ExplorerError::NotFound`],
//! [`ExplorerError::Remote`]) carrying a fixed, readable message; raw transport
//! errors never leave the repository layer.

use thiserror::Error;

/// Shown when the catalog reports no match for a search or filter.
pub const NOT_FOUND_MESSAGE: &str =
    "We couldn't find any countries matching your search. Try adjusting your search terms or filters.";

/// Shown when the catalog answers with HTTP 429.
pub const RATE_LIMITED_MESSAGE: &str = "Too many requests. Please try again later.";

/// Shown when the catalog cannot be reached at all.
pub const OFFLINE_MESSAGE: &str = "No internet connection. Please check your network.";

/// Shown for every other catalog failure.
pub const REMOTE_FAILURE_MESSAGE: &str = "Failed to load countries. Please try again later.";

/// The main error type for country explorer operations.
///
/// The first four variants are terminal for a listing load cycle and their
/// payload is the exact message shown to the user. [`ExplorerError::FavoriteSync`]
/// is non-blocking and never replaces the listing.
///
/// # Examples
///
/// ```
/// use country_explorer::domain::ExplorerError;
///
/// let err = ExplorerError::rate_limited();
/// assert_eq!(err.to_string(), "Too many requests. Please try again later.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExplorerError {
    /// The catalog could not be reached (no connectivity, timeout).
    #[error("{0}")]
    Network(String),

    /// The catalog throttled the request (HTTP 429).
    #[error("{0}")]
    RateLimited(String),

    /// The catalog reported no matching record (HTTP 404 or empty lookup).
    #[error("{0}")]
    NotFound(String),

    /// Any other non-success answer from the catalog.
    #[error("{0}")]
    Remote(String),

    /// Creating, deleting or subscribing to remote favorites failed.
    #[error("Favorite sync error: {0}")]
    FavoriteSync(String),

    /// Local validation failed before any remote call was made.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Reading or writing durable local storage failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem operation failed.
    ///
    /// Stored as a message so the error stays `Clone` for fan-out to view state.
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExplorerError {
    #[must_use]
    pub fn network() -> Self {
        Self::Network(OFFLINE_MESSAGE.to_string())
    }

    #[must_use]
    pub fn rate_limited() -> Self {
        Self::RateLimited(RATE_LIMITED_MESSAGE.to_string())
    }

    #[must_use]
    pub fn not_found() -> Self {
        Self::NotFound(NOT_FOUND_MESSAGE.to_string())
    }

    #[must_use]
    pub fn remote() -> Self {
        Self::Remote(REMOTE_FAILURE_MESSAGE.to_string())
    }

    /// Returns the message to display in place of the listing.
    ///
    /// For catalog errors this is the bare fixed message, without any
    /// category prefix.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(msg) | Self::RateLimited(msg) | Self::NotFound(msg) | Self::Remote(msg) => {
                msg.clone()
            }
            other => other.to_string(),
        }
    }

    /// Whether this error came from the catalog boundary.
    #[must_use]
    pub const fn is_catalog_error(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::RateLimited(_) | Self::NotFound(_) | Self::Remote(_)
        )
    }
}

impl From<std::io::Error> for ExplorerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// A specialized `Result` type for country explorer operations.
pub type Result<T> = std::result::Result<T, ExplorerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_errors_display_their_fixed_message() {
        assert_eq!(ExplorerError::not_found().to_string(), NOT_FOUND_MESSAGE);
        assert_eq!(ExplorerError::network().user_message(), OFFLINE_MESSAGE);
        assert!(ExplorerError::remote().is_catalog_error());
    }

    #[test]
    fn non_catalog_errors_keep_their_prefix() {
        let err = ExplorerError::FavoriteSync("write rejected".into());
        assert_eq!(err.user_message(), "Favorite sync error: write rejected");
        assert!(!err.is_catalog_error());
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ExplorerError = io.into();
        assert!(matches!(err, ExplorerError::Io(ref m) if m.contains("missing")));
    }
}
