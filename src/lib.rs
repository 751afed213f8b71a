pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod listing;
pub mod query;
pub mod seed;
pub mod store;
