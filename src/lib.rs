//! Country Explorer: search, filter and compare countries from a public catalog.
//!
//! The crate is the core of a country explorer:
//! - Listing with debounced search, region/language facets and sorting
//! - Per-user favorites kept in a remote store and followed live
//! - Side-by-side comparison of up to three countries
//! - Recently viewed history
//! - Session (query, facets, sort) persisted across restarts

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Binary shell (main.rs)                             │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Orchestration (orchestrator/)                      │  ← Load cycles
//! │  - Debounce / minimum loading                       │
//! │  - Superseded-cycle discarding                      │
//! │  - Detail and favorites page loading                │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Catalog       │   │ App state     │   │ Favorites     │
//! │ (catalog/)    │   │ (app/)        │   │ (favorites/)  │
//! │ - HTTP client │   │ - Slices      │   │ - Live query  │
//! │ - Error map   │   │ - Store       │   │ - Toggling    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Filters       │   │ Storage       │   │ View models   │
//! │ (filters/)    │   │ (storage/)    │   │ (ui/)         │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, infrastructure and observability           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: state slices, typed actions and the persisting [`Store`]
//! - [`catalog`]: REST catalog client and the repository error boundary
//! - [`domain`]: `Country`, favorites, users, sort keys and errors
//! - [`favorites`]: remote favorites store, live subscription and toggling
//! - [`filters`]: pure sort, facet and refinement functions
//! - [`orchestrator`]: listing cycles, detail and favorites page flows
//! - [`storage`]: durable key-value storage with a JSON file backend
//! - [`ui`]: view models for listing and comparison
//! - [`infrastructure`]: data directory resolution
//! - [`observability`]: `tracing` subscriber with a rotating log file
//!
//! # Configuration
//!
//! [`Config`] can be built from defaults, a string map, or a TOML file:
//!
//! ```toml
//! catalog_url = "https://restcountries.com/v3.1"
//! request_timeout_secs = 10
//! debounce_ms = 100
//! settle_ms = 50
//! minimum_loading_ms = 800
//! data_dir = "~/.local/share/country-explorer"
//! trace_level = "info"
//! ```
//!
//! # Example
//!
//! ```no_run
//! use country_explorer::app::SessionAction;
//! use country_explorer::catalog::{CountryRepository, RestCatalog};
//! use country_explorer::orchestrator::{ListingOrchestrator, LoadTiming};
//! use country_explorer::{initialize, Config};
//! use std::sync::Arc;
//!
//! # async fn run() -> country_explorer::Result<()> {
//! let config = Config::default();
//! let mut store = initialize(&config)?;
//! let repository = Arc::new(CountryRepository::new(RestCatalog::from_config(&config)?));
//! let listing = ListingOrchestrator::new(repository, LoadTiming::from_config(&config));
//!
//! store.dispatch(SessionAction::SetQuery("peru".into()));
//! listing.on_session_changed(&store.state().session).await.ok();
//! println!("{:?}", listing.current());
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod favorites;
pub mod filters;
pub mod infrastructure;
pub mod observability;
pub mod orchestrator;
pub mod storage;
pub mod ui;

pub use app::{Action, AppState, Store};
pub use domain::{Country, ExplorerError, Result, SortKey};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the REST Countries compatible catalog.
    pub catalog_url: String,

    /// Per-request timeout for catalog calls. Default: 10
    pub request_timeout_secs: u64,

    /// Quiet period after a session change before fetching. Default: 100
    pub debounce_ms: u64,

    /// Extra wait after the debounce. Default: 50
    pub settle_ms: u64,

    /// Shortest time the loading state stays visible. Default: 800
    pub minimum_loading_ms: u64,

    /// Directory for `state.json` and the log file.
    ///
    /// `~` is expanded. Defaults to [`infrastructure::get_data_dir`].
    pub data_dir: Option<String>,

    /// Tracing filter directive, e.g. `info` or `country_explorer=debug`.
    ///
    /// `RUST_LOG` takes precedence. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_url: catalog::DEFAULT_CATALOG_URL.to_string(),
            request_timeout_secs: 10,
            debounce_ms: 100,
            settle_ms: 50,
            minimum_loading_ms: 800,
            data_dir: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// Unknown keys are ignored; numbers that fail to parse and empty strings
    /// fall back to the defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use country_explorer::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("debounce_ms".to_string(), "250".to_string());
    /// map.insert("settle_ms".to_string(), "soon".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.debounce_ms, 250);
    /// assert_eq!(config.settle_ms, 50);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let text = |key: &str| {
            map.get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let number = |key: &str, fallback: u64| {
            text(key)
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(fallback)
        };

        Self {
            catalog_url: text("catalog_url").unwrap_or(defaults.catalog_url),
            request_timeout_secs: number("request_timeout_secs", defaults.request_timeout_secs),
            debounce_ms: number("debounce_ms", defaults.debounce_ms),
            settle_ms: number("settle_ms", defaults.settle_ms),
            minimum_loading_ms: number("minimum_loading_ms", defaults.minimum_loading_ms),
            data_dir: text("data_dir"),
            trace_level: text("trace_level"),
        }
    }

    /// Loads configuration from a TOML file. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// [`ExplorerError::Io`] if the file cannot be read and
    /// [`ExplorerError::Config`] if it is not valid TOML for this shape.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw)
            .map_err(|e| ExplorerError::Config(format!("invalid config file {}: {e}", path.display())))
    }

    /// The data directory with `~` expanded, or the platform default.
    #[must_use]
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir
            .as_deref()
            .map_or_else(infrastructure::get_data_dir, infrastructure::expand_tilde)
    }
}

/// Opens durable storage in the configured data directory and rehydrates the
/// application store from it.
///
/// # Errors
///
/// Returns [`ExplorerError::Io`] if the data directory cannot be created or
/// an existing state file cannot be read. A state file that is not valid JSON
/// is moved aside and the store starts from defaults.
pub fn initialize(config: &Config) -> Result<Store> {
    let data_dir = config.resolved_data_dir();
    tracing::debug!(data_dir = %data_dir.display(), "initializing country explorer");

    let storage = storage::JsonFileStore::in_dir(&data_dir)?;
    Ok(Store::load(Box::new(storage)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_timings() {
        let config = Config::default();
        assert_eq!(config.catalog_url, "https://restcountries.com/v3.1");
        assert_eq!((config.debounce_ms, config.settle_ms, config.minimum_loading_ms), (100, 50, 800));
    }

    #[test]
    fn toml_file_fills_missing_keys_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("explorer.toml");
        std::fs::write(&path, "minimum_loading_ms = 0\ndata_dir = \"/tmp/x\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.minimum_loading_ms, 0);
        assert_eq!(config.debounce_ms, 100);
        assert_eq!(config.resolved_data_dir(), PathBuf::from("/tmp/x"));
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("explorer.toml");
        std::fs::write(&path, "debounce_ms = \"fast\"").unwrap();

        assert!(matches!(Config::from_file(&path), Err(ExplorerError::Config(_))));
    }

    #[test]
    fn initialize_rehydrates_from_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            data_dir: Some(dir.path().display().to_string()),
            ..Config::default()
        };

        {
            let mut store = initialize(&config).unwrap();
            store.dispatch(app::SessionAction::SetQuery("peru".into()));
        }

        let store = initialize(&config).unwrap();
        assert_eq!(store.state().session.search_query, "peru");
    }

    #[test]
    fn initialize_starts_from_defaults_when_state_file_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(storage::STATE_FILE_NAME), "garbage").unwrap();
        let config = Config {
            data_dir: Some(dir.path().display().to_string()),
            ..Config::default()
        };

        let store = initialize(&config).unwrap();
        assert_eq!(store.state().session, app::SessionState::default());
        assert!(store.state().user().is_none());
    }
}
