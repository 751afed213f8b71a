// region:    --- Imports
use super::model::Listing;
use super::timestamp::parse_timestamp;
use crate::error::FixtureError;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

// endregion: --- Imports

// region:    --- Fixture Record
/// One entry of the fixture array, before validation.
#[derive(Debug, Deserialize)]
struct FixtureRecord {
    listing_id: String,
    title: String,
    category: String,
    current_bid: f64,
    #[serde(default = "default_currency")]
    currency: String,
    end_time: String,
    location: String,
    seller: String,
    url: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, alias = "thumbnailUrl")]
    thumbnail_url: Option<String>,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl FixtureRecord {
    fn into_listing(self) -> Result<Listing, String> {
        if !self.current_bid.is_finite() || self.current_bid < 0.0 {
            return Err(format!(
                "current_bid must be a non-negative number, got {}",
                self.current_bid
            ));
        }
        if self.currency.chars().count() != 3 {
            return Err(format!(
                "currency must be exactly 3 characters, got {:?}",
                self.currency
            ));
        }
        let end_time = parse_timestamp(&self.end_time)
            .map_err(|e| format!("end_time {:?} is not a timestamp: {}", self.end_time, e))?;

        Ok(Listing {
            listing_id: self.listing_id,
            title: self.title,
            category: self.category,
            current_bid: self.current_bid,
            currency: self.currency,
            end_time,
            location: self.location,
            seller: self.seller,
            url: self.url,
            description: self.description,
            thumbnail_url: self.thumbnail_url,
        })
    }
}
// endregion: --- Fixture Record

// region:    --- Parsing
/// Parses fixture text into listings, in file order.
///
/// The first bad record fails the whole parse; no partial set is returned.
pub fn parse_listings(raw: &str) -> Result<Vec<Listing>, FixtureError> {
    let payload: serde_json::Value = serde_json::from_str(raw)?;
    let serde_json::Value::Array(items) = payload else {
        return Err(FixtureError::NotAnArray);
    };

    let mut seen = HashSet::with_capacity(items.len());
    let mut listings = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let record: FixtureRecord = serde_json::from_value(item)
            .map_err(|e| FixtureError::InvalidRecord {
                index,
                reason: e.to_string(),
            })?;
        let listing = record
            .into_listing()
            .map_err(|reason| FixtureError::InvalidRecord { index, reason })?;
        if !seen.insert(listing.listing_id.clone()) {
            return Err(FixtureError::DuplicateListingId(listing.listing_id));
        }
        listings.push(listing);
    }

    Ok(listings)
}

/// Reads and parses the fixture at `path`.
pub async fn load_listings(path: &Path) -> Result<Vec<Listing>, FixtureError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let listings = parse_listings(&raw)?;
    debug!(
        "{:<12} --> parsed {} listings from {}",
        "Fixture",
        listings.len(),
        path.display()
    );
    Ok(listings)
}
// endregion: --- Parsing
