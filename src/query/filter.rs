//! Predicate evaluation over listings that are already in memory.

use crate::listing::{Listing, ListingFilters};

/// [`ListingFilters`] with normalization applied once, ready to test listings.
#[derive(Debug)]
pub struct ListingPredicate<'a> {
    search: Option<String>,
    category: Option<String>,
    filters: &'a ListingFilters,
}

impl<'a> ListingPredicate<'a> {
    pub fn new(filters: &'a ListingFilters) -> Self {
        Self {
            search: filters.normalized_search(),
            category: filters.normalized_category(),
            filters,
        }
    }

    /// True when every present constraint holds.
    pub fn matches(&self, listing: &Listing) -> bool {
        if let Some(search) = &self.search {
            let haystacks = [
                listing.title.as_str(),
                listing.description.as_deref().unwrap_or_default(),
                listing.location.as_str(),
            ];
            if !haystacks
                .iter()
                .any(|value| value.to_ascii_lowercase().contains(search.as_str()))
            {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if listing.category.to_ascii_lowercase() != *category {
                return false;
            }
        }

        if let Some(min_bid) = self.filters.min_bid_bound() {
            if listing.current_bid < min_bid {
                return false;
            }
        }

        if let Some(max_bid) = self.filters.max_bid_bound() {
            if listing.current_bid > max_bid {
                return false;
            }
        }

        // both ending bounds are strict
        if let Some(before) = self.filters.ending_before {
            if listing.end_time >= before {
                return false;
            }
        }

        if let Some(after) = self.filters.ending_after {
            if listing.end_time <= after {
                return false;
            }
        }

        true
    }
}

/// Filters `listings` and orders the survivors soonest-closing first.
///
/// `sort_by_key` is stable, so listings sharing an `end_time` keep their
/// incoming order.
pub fn apply(listings: Vec<Listing>, filters: Option<&ListingFilters>) -> Vec<Listing> {
    let mut matched: Vec<Listing> = match filters {
        None => listings,
        Some(filters) => {
            let predicate = ListingPredicate::new(filters);
            listings
                .into_iter()
                .filter(|listing| predicate.matches(listing))
                .collect()
        }
    };
    matched.sort_by_key(|listing| listing.end_time);
    matched
}
