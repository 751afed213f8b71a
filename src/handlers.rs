// region:    --- Imports
use crate::error::ApiError;
use crate::listing::timestamp::parse_timestamp;
use crate::listing::{Listing, ListingFilters};
use crate::query;
use crate::store::ListingStore;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

// endregion: --- Imports

// region:    --- Router
/// `/health` and `/listings` over `store`, with permissive CORS.
pub fn router(store: Arc<dyn ListingStore>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health))
        .route("/listings", get(handle_get_listings))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}
// endregion: --- Router

// region:    --- Query Parameters
/// Raw `/listings` query string. Values stay text until [`Self::into_filters`]
/// so every parse failure gets the same error shape.
#[derive(Debug, Default, Deserialize)]
pub struct ListingQueryParams {
    pub search: Option<String>,
    pub category: Option<String>,
    pub min_bid: Option<String>,
    pub max_bid: Option<String>,
    pub ending_before: Option<String>,
    pub ending_after: Option<String>,
}

impl ListingQueryParams {
    /// Validates the parameters and builds the filter set.
    ///
    /// Malformed values are `UnprocessableEntity`; an inverted bid range is
    /// `Validation`, checked last.
    pub fn into_filters(self) -> Result<ListingFilters, ApiError> {
        let filters = ListingFilters {
            search: non_empty("search", self.search)?,
            category: non_empty("category", self.category)?,
            min_bid: parse_bid("min_bid", self.min_bid)?,
            max_bid: parse_bid("max_bid", self.max_bid)?,
            ending_before: parse_instant("ending_before", self.ending_before)?,
            ending_after: parse_instant("ending_after", self.ending_after)?,
        };

        if let (Some(min_bid), Some(max_bid)) = (filters.min_bid, filters.max_bid) {
            if min_bid > max_bid {
                return Err(ApiError::Validation(
                    "min_bid must be less than or equal to max_bid".to_string(),
                ));
            }
        }

        Ok(filters)
    }
}

fn non_empty(name: &str, value: Option<String>) -> Result<Option<String>, ApiError> {
    match value {
        Some(v) if v.is_empty() => Err(ApiError::UnprocessableEntity(format!(
            "{} must not be empty",
            name
        ))),
        other => Ok(other),
    }
}

fn parse_bid(name: &str, value: Option<String>) -> Result<Option<f64>, ApiError> {
    let Some(raw) = value else {
        return Ok(None);
    };
    match raw.trim().parse::<f64>() {
        Ok(bid) if bid.is_finite() && bid >= 0.0 => Ok(Some(bid)),
        _ => Err(ApiError::UnprocessableEntity(format!(
            "{} must be a number greater than or equal to 0, got {:?}",
            name, raw
        ))),
    }
}

fn parse_instant(name: &str, value: Option<String>) -> Result<Option<DateTime<Utc>>, ApiError> {
    value
        .map(|raw| {
            parse_timestamp(&raw).map_err(|e| {
                ApiError::UnprocessableEntity(format!(
                    "{} must be an ISO-8601 timestamp, got {:?}: {}",
                    name, raw, e
                ))
            })
        })
        .transpose()
}
// endregion: --- Query Parameters

// region:    --- Handlers

pub async fn handle_health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Listings matching the query string, soonest-closing first.
pub async fn handle_get_listings(
    State(store): State<Arc<dyn ListingStore>>,
    params: Result<Query<ListingQueryParams>, QueryRejection>,
) -> Result<Json<Vec<Listing>>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::UnprocessableEntity(e.body_text()))?;
    info!("{:<12} --> listing request: {:?}", "Handler", params);

    let filters = params.into_filters()?;
    let listings = query::query_listings(store.as_ref(), Some(&filters)).await?;
    Ok(Json(listings))
}

// endregion: --- Handlers
