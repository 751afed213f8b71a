/// Base of every filtered listing query; predicates are appended by the builder.
pub const SELECT_LISTINGS: &str = "SELECT listing_id, title, category, current_bid, currency, end_time, location, seller, url, description, thumbnail_url FROM listings";

/// Soonest-closing first, insertion order on ties.
pub const ORDER_BY_END_TIME: &str = " ORDER BY end_time ASC, rowid ASC";

/// All listings in insertion order
pub const GET_ALL_LISTINGS: &str = "SELECT listing_id, title, category, current_bid, currency, end_time, location, seller, url, description, thumbnail_url FROM listings ORDER BY rowid ASC";

pub const COUNT_LISTINGS: &str = "SELECT COUNT(*) FROM listings";

pub const DELETE_ALL_LISTINGS: &str = "DELETE FROM listings";

/// Prefix for batched inserts; `push_values` supplies the rows.
pub const INSERT_LISTINGS: &str = "INSERT INTO listings (listing_id, title, category, current_bid, currency, end_time, location, seller, url, description, thumbnail_url) ";
