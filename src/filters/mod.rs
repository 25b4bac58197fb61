//! Filter and sort engine.
//!
//! Pure, stateless functions over country collections. Nothing here performs
//! I/O; the repository and the listing orchestrator compose these helpers.
//!
//! # Modules
//!
//! - `sort`: listing sort orders with locale-style name comparison
//! - `facets`: distinct region and language extraction
//! - `refine`: multi-region and language narrowing of catalog results

pub mod facets;
pub mod refine;
pub mod sort;

pub use facets::{distinct_facets, Facets};
pub use refine::{refine_by_languages, refine_by_regions};
pub use sort::{compare_names, sort_countries, sort_countries_by};
