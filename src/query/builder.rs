//! Translates [`ListingFilters`] into a parameterized SQLite query.
//!
//! Each present filter becomes one [`ListingCondition`]; a condition pushes its
//! SQL fragment and its bound values together, so the placeholders and the
//! arguments can never drift apart. User input is only ever bound, never
//! spliced into the SQL text.

use super::queries;
use crate::listing::timestamp::to_storage;
use crate::listing::ListingFilters;
use sqlx::query_builder::Separated;
use sqlx::{QueryBuilder, Sqlite};
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub enum ListingCondition {
    /// Normalized term, matched against title, description and location.
    Search(String),
    /// Normalized category, exact match.
    Category(String),
    MinBid(f64),
    MaxBid(f64),
    /// Storage-encoded instant, strict `<`.
    EndingBefore(String),
    /// Storage-encoded instant, strict `>`.
    EndingAfter(String),
}

impl ListingCondition {
    fn push_to<Sep: Display>(self, separated: &mut Separated<'_, 'static, Sqlite, Sep>) {
        match self {
            ListingCondition::Search(term) => {
                separated
                    .push("(instr(lower(title), ")
                    .push_bind_unseparated(term.clone())
                    .push_unseparated(") > 0 OR instr(lower(COALESCE(description, '')), ")
                    .push_bind_unseparated(term.clone())
                    .push_unseparated(") > 0 OR instr(lower(location), ")
                    .push_bind_unseparated(term)
                    .push_unseparated(") > 0)");
            }
            ListingCondition::Category(category) => {
                separated
                    .push("lower(category) = ")
                    .push_bind_unseparated(category);
            }
            ListingCondition::MinBid(min_bid) => {
                separated
                    .push("current_bid >= ")
                    .push_bind_unseparated(min_bid);
            }
            ListingCondition::MaxBid(max_bid) => {
                separated
                    .push("current_bid <= ")
                    .push_bind_unseparated(max_bid);
            }
            ListingCondition::EndingBefore(before) => {
                separated.push("end_time < ").push_bind_unseparated(before);
            }
            ListingCondition::EndingAfter(after) => {
                separated.push("end_time > ").push_bind_unseparated(after);
            }
        }
    }
}

/// Conditions for the filters that are present, in a fixed order.
pub fn conditions(filters: &ListingFilters) -> Vec<ListingCondition> {
    let mut conditions = Vec::new();
    if let Some(search) = filters.normalized_search() {
        conditions.push(ListingCondition::Search(search));
    }
    if let Some(category) = filters.normalized_category() {
        conditions.push(ListingCondition::Category(category));
    }
    if let Some(min_bid) = filters.min_bid_bound() {
        conditions.push(ListingCondition::MinBid(min_bid));
    }
    if let Some(max_bid) = filters.max_bid_bound() {
        conditions.push(ListingCondition::MaxBid(max_bid));
    }
    if let Some(before) = &filters.ending_before {
        conditions.push(ListingCondition::EndingBefore(to_storage(before)));
    }
    if let Some(after) = &filters.ending_after {
        conditions.push(ListingCondition::EndingAfter(to_storage(after)));
    }
    conditions
}

/// Builds the listing query for `filters`, ordered by ascending `end_time`.
pub fn build_listing_query(filters: Option<&ListingFilters>) -> QueryBuilder<'static, Sqlite> {
    let mut builder = QueryBuilder::new(queries::SELECT_LISTINGS);

    let conditions = filters.map(conditions).unwrap_or_default();
    if !conditions.is_empty() {
        builder.push(" WHERE ");
        let mut separated = builder.separated(" AND ");
        for condition in conditions {
            condition.push_to(&mut separated);
        }
    }

    builder.push(queries::ORDER_BY_END_TIME);
    builder
}
