//! Command-line shell: runs one listing load cycle and prints the result.
//!
//! Flags update the persisted session before the cycle runs, so a later
//! invocation without flags repeats the last query.

use clap::Parser;
use country_explorer::app::SessionAction;
use country_explorer::catalog::{CountryRepository, RestCatalog};
use country_explorer::observability::init_tracing;
use country_explorer::orchestrator::{ListingOrchestrator, LoadTiming};
use country_explorer::ui::{ListingStatus, ListingViewModel};
use country_explorer::{initialize, Config, SortKey};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "country-explorer")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search, filter and sort countries from the REST Countries catalog", long_about = None)]
struct Cli {
    /// Search text matched against country names
    #[arg(short, long)]
    query: Option<String>,

    /// Region to filter by (repeatable)
    #[arg(short, long = "region")]
    regions: Vec<String>,

    /// Language to filter by (repeatable)
    #[arg(short, long = "language")]
    languages: Vec<String>,

    /// Sort order: name, nameDesc, population, populationDesc
    #[arg(short, long)]
    sort: Option<String>,

    /// TOML configuration file
    #[arg(short, long, env = "COUNTRY_EXPLORER_CONFIG")]
    config: Option<PathBuf>,

    /// Print the available regions and languages instead of a listing
    #[arg(long)]
    facets: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> country_explorer::Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    init_tracing(&config);

    let repository = Arc::new(CountryRepository::new(RestCatalog::from_config(&config)?));
    let listing = ListingOrchestrator::new(repository, LoadTiming::from_config(&config));

    if cli.facets {
        let facets = listing.load_facets().await;
        println!("Regions: {}", facets.regions.join(", "));
        println!("Languages: {}", facets.languages.join(", "));
        return Ok(ExitCode::SUCCESS);
    }

    let mut store = initialize(&config)?;
    apply_flags(&mut store, &cli);

    tracing::info!(query = %store.state().session.search_query, "running listing cycle");

    if let Err(e) = listing.on_session_changed(&store.state().session).await {
        tracing::error!(error = %e, "listing cycle aborted");
    }

    let vm = ListingViewModel::compute(store.state(), &listing.current());
    Ok(print_listing(&vm))
}

fn apply_flags(store: &mut country_explorer::Store, cli: &Cli) {
    if let Some(query) = &cli.query {
        store.dispatch(SessionAction::SetQuery(query.clone()));
    }
    if !cli.regions.is_empty() || !cli.languages.is_empty() {
        store.dispatch(SessionAction::ClearFilters);
        for region in &cli.regions {
            store.dispatch(SessionAction::AddRegion(region.clone()));
        }
        for language in &cli.languages {
            store.dispatch(SessionAction::AddLanguage(language.clone()));
        }
    }
    if let Some(sort) = &cli.sort {
        store.dispatch(SessionAction::SetSortBy(SortKey::parse_lenient(sort)));
    }
}

fn print_listing(vm: &ListingViewModel) -> ExitCode {
    match &vm.status {
        ListingStatus::Message(message) => {
            println!("{message}");
            ExitCode::FAILURE
        }
        ListingStatus::Ready => {
            for row in &vm.rows {
                println!(
                    "{:<4} {:<32} {:<10} {:<24} {:>15}",
                    row.code, row.name, row.region, row.capital, row.population
                );
            }
            println!("{}", vm.summary);
            ExitCode::SUCCESS
        }
        ListingStatus::Idle | ListingStatus::Loading => ExitCode::FAILURE,
    }
}
