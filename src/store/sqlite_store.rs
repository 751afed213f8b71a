// region:    --- Imports
use super::ListingStore;
use crate::config::StoreConfig;
use crate::database::DatabaseManager;
use crate::error::StoreError;
use crate::listing::timestamp::{parse_timestamp, to_storage};
use crate::listing::{Listing, ListingFilters};
use crate::query::builder::build_listing_query;
use crate::query::queries;
use crate::seed;
use async_trait::async_trait;
use sqlx::{FromRow, QueryBuilder, Sqlite};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

// endregion: --- Imports

/// Rows per multi-row INSERT; 11 bound columns each.
const INSERT_BATCH_SIZE: usize = 500;

// region:    --- Row Model
#[derive(Debug, FromRow)]
struct ListingRow {
    listing_id: String,
    title: String,
    category: String,
    current_bid: f64,
    currency: String,
    end_time: String,
    location: String,
    seller: String,
    url: String,
    description: Option<String>,
    thumbnail_url: Option<String>,
}

impl TryFrom<ListingRow> for Listing {
    type Error = StoreError;

    fn try_from(row: ListingRow) -> Result<Self, Self::Error> {
        let end_time = parse_timestamp(&row.end_time).map_err(|e| StoreError::CorruptRow {
            listing_id: row.listing_id.clone(),
            reason: format!("end_time {:?}: {}", row.end_time, e),
        })?;
        Ok(Listing {
            listing_id: row.listing_id,
            title: row.title,
            category: row.category,
            current_bid: row.current_bid,
            currency: row.currency,
            end_time,
            location: row.location,
            seller: row.seller,
            url: row.url,
            description: row.description,
            thumbnail_url: row.thumbnail_url,
        })
    }
}
// endregion: --- Row Model

// region:    --- Sqlite Listing Store
/// Listings held in the SQLite `listings` table.
pub struct SqliteListingStore {
    db_manager: Arc<DatabaseManager>,
    fixture_path: PathBuf,
}

impl SqliteListingStore {
    /// Connects, creates the table if absent, and seeds an empty table from
    /// the configured fixture unless `auto_seed` is off.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let db_manager = DatabaseManager::connect(&config.database_path).await?;
        db_manager.initialize_database().await?;

        let store = Self {
            db_manager: Arc::new(db_manager),
            fixture_path: config.fixture_path.clone(),
        };

        if config.auto_seed && store.count().await? == 0 {
            info!(
                "{:<12} --> listings table is empty, seeding from {}",
                "Store",
                store.fixture_path.display()
            );
            seed::reset_with_fixture(&store).await?;
        }

        Ok(store)
    }

    pub fn database_path(&self) -> &Path {
        self.db_manager.path()
    }

    pub fn fixture_path(&self) -> &Path {
        &self.fixture_path
    }

    pub async fn count(&self) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>(queries::COUNT_LISTINGS)
            .fetch_one(self.db_manager.pool())
            .await?;
        Ok(count)
    }

    /// Replaces the whole table with `listings` in one transaction and
    /// returns how many rows were inserted.
    ///
    /// Readers see either the old rows or the new ones, never an empty table
    /// in between. Any failure rolls the table back to its previous contents.
    pub async fn seed_or_replace(&self, listings: Vec<Listing>) -> Result<u64, StoreError> {
        let inserted = self
            .db_manager
            .transaction(move |tx| {
                Box::pin(async move {
                    sqlx::query(queries::DELETE_ALL_LISTINGS)
                        .execute(&mut **tx)
                        .await?;

                    let mut inserted = 0;
                    for batch in listings.chunks(INSERT_BATCH_SIZE) {
                        let mut builder: QueryBuilder<'_, Sqlite> =
                            QueryBuilder::new(queries::INSERT_LISTINGS);
                        builder.push_values(batch, |mut row, listing| {
                            row.push_bind(listing.listing_id.as_str())
                                .push_bind(listing.title.as_str())
                                .push_bind(listing.category.as_str())
                                .push_bind(listing.current_bid)
                                .push_bind(listing.currency.as_str())
                                .push_bind(to_storage(&listing.end_time))
                                .push_bind(listing.location.as_str())
                                .push_bind(listing.seller.as_str())
                                .push_bind(listing.url.as_str())
                                .push_bind(listing.description.as_deref())
                                .push_bind(listing.thumbnail_url.as_deref());
                        });
                        inserted += builder.build().execute(&mut **tx).await?.rows_affected();
                    }
                    Ok::<u64, sqlx::Error>(inserted)
                })
            })
            .await?;

        info!("{:<12} --> replaced listings, {} inserted", "Store", inserted);
        Ok(inserted)
    }

    /// Reloads the configured fixture into the table. See [`seed::reset_with_fixture`].
    pub async fn reset_with_fixture(&self) -> Result<u64, StoreError> {
        seed::reset_with_fixture(self).await
    }
}

#[async_trait]
impl ListingStore for SqliteListingStore {
    async fn read_all(&self) -> Result<Vec<Listing>, StoreError> {
        let rows = sqlx::query_as::<_, ListingRow>(queries::GET_ALL_LISTINGS)
            .fetch_all(self.db_manager.pool())
            .await?;
        rows.into_iter().map(Listing::try_from).collect()
    }

    async fn query(&self, filters: Option<&ListingFilters>) -> Result<Vec<Listing>, StoreError> {
        let mut builder = build_listing_query(filters);
        debug!("{:<12} --> {}", "Store", builder.sql());
        let rows = builder
            .build_query_as::<ListingRow>()
            .fetch_all(self.db_manager.pool())
            .await?;
        rows.into_iter().map(Listing::try_from).collect()
    }
}
// endregion: --- Sqlite Listing Store
