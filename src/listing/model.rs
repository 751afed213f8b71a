use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single surplus-auction listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    pub listing_id: String,
    pub title: String,
    pub category: String,
    pub current_bid: f64,
    pub currency: String,
    pub end_time: DateTime<Utc>,
    pub location: String,
    pub seller: String,
    pub url: String,
    pub description: Option<String>,
    #[serde(rename = "thumbnailUrl")]
    pub thumbnail_url: Option<String>,
}

/// Constraints requested for one listing query.
///
/// Every field is optional and an absent field imposes no constraint. Matching
/// code should go through the `normalized_*` and `*_bid_bound` accessors rather
/// than reading the raw fields. A NaN bid bound counts as absent. Instants
/// must fall in years 0000-9999, which [`crate::listing::timestamp::parse_timestamp`]
/// guarantees.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingFilters {
    pub search: Option<String>,
    pub category: Option<String>,
    pub min_bid: Option<f64>,
    pub max_bid: Option<f64>,
    pub ending_before: Option<DateTime<Utc>>,
    pub ending_after: Option<DateTime<Utc>>,
}

impl ListingFilters {
    /// Trimmed, lower-cased search term. Blank input counts as no search.
    pub fn normalized_search(&self) -> Option<String> {
        let normalized = self.search.as_deref()?.trim().to_ascii_lowercase();
        (!normalized.is_empty()).then_some(normalized)
    }

    pub fn normalized_category(&self) -> Option<String> {
        self.category
            .as_deref()
            .filter(|category| !category.is_empty())
            .map(str::to_ascii_lowercase)
    }

    pub fn min_bid_bound(&self) -> Option<f64> {
        self.min_bid.filter(|bid| !bid.is_nan())
    }

    pub fn max_bid_bound(&self) -> Option<f64> {
        self.max_bid.filter(|bid| !bid.is_nan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_is_trimmed_and_lowercased() {
        let filters = ListingFilters {
            search: Some("  PowerEdge ".to_string()),
            ..Default::default()
        };
        assert_eq!(filters.normalized_search().as_deref(), Some("poweredge"));
    }

    #[test]
    fn nan_bid_bounds_are_absent() {
        let filters = ListingFilters {
            min_bid: Some(f64::NAN),
            max_bid: Some(f64::INFINITY),
            ..Default::default()
        };
        assert_eq!(filters.min_bid_bound(), None);
        assert_eq!(filters.max_bid_bound(), Some(f64::INFINITY));
    }

    #[test]
    fn blank_search_is_absent() {
        for raw in ["", "   ", "\t\n"] {
            let filters = ListingFilters {
                search: Some(raw.to_string()),
                ..Default::default()
            };
            assert_eq!(filters.normalized_search(), None, "search {:?}", raw);
        }
        assert_eq!(ListingFilters::default().normalized_search(), None);
    }

    #[test]
    fn category_is_lowercased_but_not_trimmed() {
        let filters = ListingFilters {
            category: Some("Heavy Equipment ".to_string()),
            ..Default::default()
        };
        assert_eq!(
            filters.normalized_category().as_deref(),
            Some("heavy equipment ")
        );

        let empty = ListingFilters {
            category: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(empty.normalized_category(), None);
    }

    #[test]
    fn thumbnail_is_serialized_in_camel_case() {
        let listing = Listing {
            listing_id: "1".into(),
            title: "Pallet of monitors".into(),
            category: "Electronics".into(),
            current_bid: 10.0,
            currency: "USD".into(),
            end_time: "2024-05-12T00:00:00Z".parse().unwrap(),
            location: "Reno, NV".into(),
            seller: "State of Nevada".into(),
            url: "https://example.com/1".into(),
            description: None,
            thumbnail_url: Some("https://example.com/1.jpg".into()),
        };

        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["thumbnailUrl"], "https://example.com/1.jpg");
        assert!(json.get("thumbnail_url").is_none());
    }
}
