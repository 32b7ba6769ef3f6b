use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use tracing::Level;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub database_url: String,
    pub db_max_connections: u32,

    /// Number of actix workers, `None` means one per CPU core
    pub workers: Option<usize>,

    // Rate limiting
    pub rate_api_per_min: u32,

    // Logging
    pub log_dir: String,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            server_addr: lookup("SERVER_ADDR").unwrap_or_else(|| "0.0.0.0:8000".to_string()),
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| "sqlite://hrms.db".to_string()),
            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 5)?,
            workers: lookup("SERVER_WORKERS")
                .map(|v| v.parse().context("SERVER_WORKERS must be a number"))
                .transpose()?,

            rate_api_per_min: parse_or(&lookup, "RATE_API_PER_MIN", 1000)?,

            log_dir: lookup("LOG_DIR").unwrap_or_else(|| "logs".to_string()),
            log_level: parse_or(&lookup, "LOG_LEVEL", Level::DEBUG)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw}")),
        None => Ok(default),
    }
}
