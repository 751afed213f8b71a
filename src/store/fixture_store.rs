use crate::error::StoreError;
use crate::listing::fixture;
use crate::listing::Listing;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::ListingStore;

/// Reads listings straight from the fixture file, re-parsing it on every call.
#[derive(Debug, Clone)]
pub struct FixtureListingStore {
    fixture_path: PathBuf,
}

impl FixtureListingStore {
    pub fn new(fixture_path: impl AsRef<Path>) -> Self {
        Self {
            fixture_path: fixture_path.as_ref().to_path_buf(),
        }
    }

    pub fn fixture_path(&self) -> &Path {
        &self.fixture_path
    }
}

#[async_trait]
impl ListingStore for FixtureListingStore {
    async fn read_all(&self) -> Result<Vec<Listing>, StoreError> {
        debug!(
            "{:<12} --> reading fixture {}",
            "Store",
            self.fixture_path.display()
        );
        Ok(fixture::load_listings(&self.fixture_path).await?)
    }
}
