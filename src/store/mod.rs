// region:    --- Imports
use crate::config::{StoreBackend, StoreConfig};
use crate::error::StoreError;
use crate::listing::{Listing, ListingFilters};
use crate::query::filter;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

// endregion: --- Imports

// region:    --- Modules
pub mod fixture_store;
pub mod sqlite_store;

pub use fixture_store::FixtureListingStore;
pub use sqlite_store::SqliteListingStore;

// endregion: --- Modules

// region:    --- Listing Store Trait
/// Read side shared by every listing backend.
#[async_trait]
pub trait ListingStore: Send + Sync {
    /// Every stored listing, in insertion order.
    async fn read_all(&self) -> Result<Vec<Listing>, StoreError>;

    /// Listings matching `filters`, soonest-closing first.
    ///
    /// The default evaluates predicates over [`ListingStore::read_all`].
    async fn query(&self, filters: Option<&ListingFilters>) -> Result<Vec<Listing>, StoreError> {
        let listings = self.read_all().await?;
        Ok(filter::apply(listings, filters))
    }
}

/// Opens the store selected by `config.backend`.
pub async fn open_store(config: &StoreConfig) -> Result<Arc<dyn ListingStore>, StoreError> {
    info!("{:<12} --> opening {:?} listing store", "Store", config.backend);
    match config.backend {
        StoreBackend::Fixture => Ok(Arc::new(FixtureListingStore::new(&config.fixture_path))),
        StoreBackend::Sqlite => Ok(Arc::new(SqliteListingStore::connect(config).await?)),
    }
}
// endregion: --- Listing Store Trait
