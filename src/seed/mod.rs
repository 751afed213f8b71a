//! Populating the persistent store from the fixture.
// region:    --- Imports
use crate::config::{StoreBackend, StoreConfig};
use crate::error::StoreError;
use crate::listing::fixture;
use crate::store::SqliteListingStore;
use std::path::PathBuf;
use tracing::info;

// endregion: --- Imports

/// Outcome of one reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: u64,
    pub database_path: PathBuf,
}

/// Reads the store's fixture and replaces the table with it.
///
/// The whole fixture is validated before the table is touched; a malformed
/// record leaves the existing rows in place. Running it again with the same
/// fixture leaves the table in the same state.
pub async fn reset_with_fixture(store: &SqliteListingStore) -> Result<u64, StoreError> {
    info!(
        "{:<12} --> resetting listings from {}",
        "Seed",
        store.fixture_path().display()
    );
    let listings = fixture::load_listings(store.fixture_path()).await?;
    store.seed_or_replace(listings).await
}

/// Seeding entry point: optional path overrides on top of `defaults`.
pub async fn reseed(
    defaults: &StoreConfig,
    database_path: Option<PathBuf>,
    fixture_path: Option<PathBuf>,
) -> Result<SeedReport, StoreError> {
    let config = StoreConfig {
        backend: StoreBackend::Sqlite,
        database_path: database_path.unwrap_or_else(|| defaults.database_path.clone()),
        fixture_path: fixture_path.unwrap_or_else(|| defaults.fixture_path.clone()),
        auto_seed: false,
    };

    let store = SqliteListingStore::connect(&config).await?;
    let inserted = store.reset_with_fixture().await?;

    Ok(SeedReport {
        inserted,
        database_path: store.database_path().to_path_buf(),
    })
}
