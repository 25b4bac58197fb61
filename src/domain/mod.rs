//! Domain layer for the country explorer.
//!
//! Core types shared by every other layer, independent of transport and
//! persistence details.
//!
//! # Organization
//!
//! - [`country`]: catalog country record
//! - [`favorite`]: favorites, new-favorite payloads and the authenticated user
//! - [`sort_key`]: listing sort orders
//! - [`error`]: error taxonomy and result alias

pub mod country;
pub mod error;
pub mod favorite;
pub mod sort_key;

pub use country::{Country, CountryName, Currency, Flags, Maps, NativeName};
pub use error::{ExplorerError, Result};
pub use favorite::{Favorite, NewFavorite, User};
pub use sort_key::SortKey;
