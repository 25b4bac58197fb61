//! View orchestration: coordinates the repository, filters and state slices.
//!
//! # Modules
//!
//! - [`listing`]: debounced, superseding load cycles for the main listing
//! - [`detail`]: detail loading with recently-viewed recording
//! - [`favorites_page`]: concurrent lookup of favorited countries

pub mod detail;
pub mod favorites_page;
pub mod listing;

pub use detail::{view_country, DETAIL_FAILED_MESSAGE};
pub use favorites_page::load_favorite_countries;
pub use listing::{ListingOrchestrator, ListingView, LoadTiming, NO_MATCHES_MESSAGE};
