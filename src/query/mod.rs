// region:    --- Imports
use crate::error::StoreError;
use crate::listing::{Listing, ListingFilters};
use crate::store::ListingStore;
use tracing::info;

// endregion: --- Imports

// region:    --- Modules
pub mod builder;
pub mod filter;
pub mod queries;

// endregion: --- Modules

/// Listings in `store` that satisfy `filters`, soonest-closing first.
///
/// `None` returns every listing. `min_bid <= max_bid` is the caller's job.
pub async fn query_listings(
    store: &dyn ListingStore,
    filters: Option<&ListingFilters>,
) -> Result<Vec<Listing>, StoreError> {
    info!("{:<12} --> listing query filters: {:?}", "Query", filters);
    let listings = store.query(filters).await?;
    info!("{:<12} --> {} listings matched", "Query", listings.len());
    Ok(listings)
}
