use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_DATABASE_PATH: &str = "data/listings.db";
pub const DEFAULT_FIXTURE_PATH: &str = "data/listings.json";

/// Which [`ListingStore`](crate::store::ListingStore) backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// Re-reads the fixture file on every query.
    Fixture,
    /// SQLite table seeded from the fixture.
    Sqlite,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixture" | "json" => Ok(StoreBackend::Fixture),
            "sqlite" | "database" => Ok(StoreBackend::Sqlite),
            other => bail!("unknown listings backend {:?} (expected fixture or sqlite)", other),
        }
    }
}

/// Everything a store constructor needs; passed in explicitly.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub database_path: PathBuf,
    pub fixture_path: PathBuf,
    pub auto_seed: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Sqlite,
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            fixture_path: PathBuf::from(DEFAULT_FIXTURE_PATH),
            auto_seed: true,
        }
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub store: StoreConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // .env is optional
        let _ = dotenv();

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            store: StoreConfig::from_env()?,
        })
    }
}

impl StoreConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = StoreConfig::default();
        Ok(Self {
            backend: match env::var("LISTINGS_BACKEND") {
                Ok(raw) => raw.parse()?,
                Err(_) => defaults.backend,
            },
            database_path: env::var("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),
            fixture_path: env::var("FIXTURE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.fixture_path),
            auto_seed: match env::var("AUTO_SEED") {
                Ok(raw) => parse_flag(&raw).context("AUTO_SEED must be true or false")?,
                Err(_) => defaults.auto_seed,
            },
        })
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("not a boolean: {:?}", other),
    }
}
