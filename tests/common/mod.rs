#![allow(dead_code)]

use async_trait::async_trait;
use country_explorer::catalog::{CatalogFailure, CatalogService};
use country_explorer::Country;
use std::sync::Mutex;

type Reply = Result<Vec<Country>, CatalogFailure>;

/// One recorded catalog request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    All,
    Name(String),
    Region(String),
    Code(String),
}

/// Catalog answering from a fixed set of records and recording every call.
///
/// Name search matches case-insensitively on a substring of the common name;
/// region lookup matches the region exactly (case-insensitive).
#[derive(Default)]
pub struct StubCatalog {
    countries: Vec<Country>,
    failure: Option<CatalogFailure>,
    calls: Mutex<Vec<Call>>,
}

impl StubCatalog {
    pub fn with(countries: Vec<Country>) -> Self {
        Self {
            countries,
            ..Self::default()
        }
    }

    pub fn failing(failure: CatalogFailure) -> Self {
        Self {
            failure: Some(failure),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self, call: Call, matches: impl Fn(&Country) -> bool) -> Reply {
        self.calls.lock().unwrap().push(call);
        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }
        let found: Vec<_> = self.countries.iter().filter(|c| matches(c)).cloned().collect();
        Ok(found)
    }
}

#[async_trait]
impl CatalogService for StubCatalog {
    async fn all(&self) -> Reply {
        self.answer(Call::All, |_| true)
    }

    async fn by_name(&self, name: &str) -> Reply {
        let needle = name.to_lowercase();
        let reply = self.answer(Call::Name(name.to_string()), |c| {
            c.common_name().to_lowercase().contains(&needle)
        })?;
        if reply.is_empty() {
            Err(CatalogFailure::Status(404))
        } else {
            Ok(reply)
        }
    }

    async fn by_region(&self, region: &str) -> Reply {
        self.answer(Call::Region(region.to_string()), |c| c.region.eq_ignore_ascii_case(region))
    }

    async fn by_code(&self, code: &str) -> Reply {
        let reply = self.answer(Call::Code(code.to_string()), |c| c.cca3 == code)?;
        if reply.is_empty() {
            Err(CatalogFailure::Status(404))
        } else {
            Ok(reply)
        }
    }
}

pub fn brazil() -> Country {
    Country::new("BRA", "Brazil")
        .with_region("Americas")
        .with_population(212_559_417)
        .with_language("por", "Portuguese")
}

pub fn argentina() -> Country {
    Country::new("ARG", "Argentina")
        .with_region("Americas")
        .with_population(45_376_763)
        .with_language("spa", "Spanish")
}

pub fn spain() -> Country {
    Country::new("ESP", "Spain")
        .with_region("Europe")
        .with_population(47_351_567)
        .with_language("spa", "Spanish")
}
