//! Main listing load cycle.
//!
//! Every session change starts a new cycle:
//!
//! ```text
//! session change ─→ Loading ─→ debounce + settle ─→ superseded? ─→ stop
//!                                                       │
//!                              filter_by_query ∥ minimum loading delay
//!                                                       │
//!                                          sort by session.sort_by
//!                                                       │
//!                                  Success(list) │ Error(message)
//! ```
//!
//! Cycles are tagged with a monotonic counter. The counter is bumped and
//! compared under the view channel's lock, so a cycle that has been
//! superseded can never overwrite the state published by a newer one.

use crate::app::SessionState;
use crate::catalog::{CatalogService, CountryRepository};
use crate::domain::Country;
use crate::filters::{distinct_facets, sort_countries, Facets};
use crate::Config;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::Instrument;

/// Shown when a cycle succeeds with no countries.
pub const NO_MATCHES_MESSAGE: &str =
    "No countries found matching your criteria. Try adjusting your filters.";

/// What the main listing currently shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ListingView {
    #[default]
    Idle,
    Loading,
    Success(Vec<Country>),
    Error(String),
}

impl ListingView {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The listed countries; empty unless the last cycle succeeded.
    #[must_use]
    pub fn countries(&self) -> &[Country] {
        match self {
            Self::Success(countries) => countries,
            _ => &[],
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Delays applied by every load cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTiming {
    /// Quiet period after a session change before anything is fetched.
    pub debounce: Duration,
    /// Extra wait after the debounce for follow-up changes to land.
    pub settle: Duration,
    /// Shortest time the loading state stays visible.
    pub minimum_loading: Duration,
}

impl Default for LoadTiming {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(100),
            settle: Duration::from_millis(50),
            minimum_loading: Duration::from_millis(800),
        }
    }
}

impl LoadTiming {
    #[must_use]
    pub const fn from_config(config: &Config) -> Self {
        Self {
            debounce: Duration::from_millis(config.debounce_ms),
            settle: Duration::from_millis(config.settle_ms),
            minimum_loading: Duration::from_millis(config.minimum_loading_ms),
        }
    }
}

struct Shared<S> {
    repository: Arc<CountryRepository<S>>,
    timing: LoadTiming,
    cycle: AtomicU64,
    view: watch::Sender<ListingView>,
}

impl<S> Shared<S> {
    fn is_current(&self, cycle: u64) -> bool {
        self.cycle.load(Ordering::SeqCst) == cycle
    }

    /// Publishes `view` only if `cycle` is still the latest one.
    fn commit(&self, cycle: u64, view: ListingView) -> bool {
        self.view.send_if_modified(|current| {
            if self.is_current(cycle) {
                *current = view;
                true
            } else {
                false
            }
        })
    }
}

/// Drives the main listing from session changes.
///
/// Cheap to clone; clones share the cycle counter and the view channel.
pub struct ListingOrchestrator<S> {
    shared: Arc<Shared<S>>,
}

impl<S> Clone for ListingOrchestrator<S> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<S: CatalogService + 'static> ListingOrchestrator<S> {
    #[must_use]
    pub fn new(repository: Arc<CountryRepository<S>>, timing: LoadTiming) -> Self {
        let (view, _) = watch::channel(ListingView::Idle);
        Self {
            shared: Arc::new(Shared {
                repository,
                timing,
                cycle: AtomicU64::new(0),
                view,
            }),
        }
    }

    #[must_use]
    pub fn repository(&self) -> &CountryRepository<S> {
        &self.shared.repository
    }

    #[must_use]
    pub fn timing(&self) -> LoadTiming {
        self.shared.timing
    }

    /// Receiver that observes every published [`ListingView`].
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ListingView> {
        self.shared.view.subscribe()
    }

    /// The most recently published view.
    #[must_use]
    pub fn current(&self) -> ListingView {
        self.shared.view.borrow().clone()
    }

    /// Starts a load cycle for `session`, superseding any cycle in flight.
    ///
    /// `Loading` is published before this returns. The returned handle
    /// resolves once the cycle has committed its result or given up.
    pub fn on_session_changed(&self, session: &SessionState) -> JoinHandle<()> {
        let mut cycle = 0;
        self.shared.view.send_modify(|view| {
            cycle = self.shared.cycle.fetch_add(1, Ordering::SeqCst) + 1;
            *view = ListingView::Loading;
        });

        let span = tracing::debug_span!("listing_cycle",
            cycle,
            query = %session.search_query,
            regions = session.selected_regions.len(),
            languages = session.selected_languages.len(),
            sort = %session.sort_by
        );
        let shared = Arc::clone(&self.shared);
        let session = session.clone();
        tokio::spawn(run_cycle(shared, cycle, session).instrument(span))
    }

    /// Fetches the whole catalog once and derives the filter options.
    ///
    /// A failure is logged and yields empty facets.
    pub async fn load_facets(&self) -> Facets {
        match self
            .shared
            .repository
            .fetch_all()
            .instrument(tracing::debug_span!("load_facets"))
            .await
        {
            Ok(countries) => distinct_facets(&countries),
            Err(e) => {
                tracing::warn!(error = %e, "failed to load facets");
                Facets::default()
            }
        }
    }
}

async fn run_cycle<S: CatalogService>(shared: Arc<Shared<S>>, cycle: u64, session: SessionState) {
    tokio::time::sleep(shared.timing.debounce).await;
    tokio::time::sleep(shared.timing.settle).await;
    if !shared.is_current(cycle) {
        tracing::debug!("cycle superseded before fetch");
        return;
    }

    let (fetched, ()) = tokio::join!(
        shared.repository.filter_by_query(
            &session.search_query,
            &session.selected_regions,
            &session.selected_languages,
        ),
        tokio::time::sleep(shared.timing.minimum_loading),
    );

    let view = match fetched {
        Ok(countries) if countries.is_empty() => ListingView::Error(NO_MATCHES_MESSAGE.to_string()),
        Ok(countries) => ListingView::Success(sort_countries(&countries, session.sort_by)),
        Err(e) => {
            tracing::debug!(error = %e, "cycle failed");
            ListingView::Error(e.user_message())
        }
    };

    if shared.commit(cycle, view) {
        tracing::debug!("cycle committed");
    } else {
        tracing::debug!("cycle superseded, result discarded");
    }
}
