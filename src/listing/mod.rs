pub mod fixture;
pub mod model;
pub mod timestamp;

pub use model::{Listing, ListingFilters};
