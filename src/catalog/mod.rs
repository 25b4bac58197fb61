//! Country repository client.
//!
//! # Modules
//!
//! - [`service`]: transport trait mirroring the catalog endpoints
//! - [`http`]: `reqwest` implementation against REST Countries
//! - [`repository`]: error mapping and query selection on top of a service

pub mod http;
pub mod repository;
pub mod service;

pub use http::{RestCatalog, DEFAULT_CATALOG_URL};
pub use repository::{map_failure, CountryRepository};
pub use service::{CatalogFailure, CatalogService};
