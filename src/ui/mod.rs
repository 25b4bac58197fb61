//! Presentation layer: view models handed to whatever renders the explorer.
//!
//! ```text
//! AppState + ListingView → ListingViewModel / ComparisonViewModel → renderer
//! ```
//!
//! Rendering itself lives outside this crate; the binary prints the listing
//! view model as plain text.

pub mod viewmodel;

pub use viewmodel::{
    format_population, ComparisonRow, ComparisonViewModel, CountryRow, ListingStatus, ListingViewModel,
    SearchBarInfo,
};
