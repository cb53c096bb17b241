// src/config.rs

use std::env;
use std::net::SocketAddr;
use thiserror::Error;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_DB_PATH: &str = "mortru.sqlite3";
const DEFAULT_SCHEMA_PATH: &str = "sql/schema.sql";
const DEFAULT_MAX_WORKERS: usize = 8;
const DEFAULT_ALLOWED_ORIGINS: &[&str] = &["https://yourdomain.com", "http://localhost:3000"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddr { var: &'static str, value: String },
    #[error("{var} must be a positive integer, got {value}")]
    InvalidNumber { var: &'static str, value: String },
}

/// Runtime settings, read once at startup from `MORTRU_*` environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub db_path: String,
    pub schema_path: String,
    pub max_workers: usize,
    /// Remote CMS endpoint for the homepage resolver. Unset means the local store.
    pub cms_url: Option<String>,
    /// Origins allowed to call the JSON listing API from a browser.
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup so tests don't have to touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr_raw = lookup("MORTRU_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let bind_addr: SocketAddr = addr_raw.parse().map_err(|_| ConfigError::InvalidAddr {
            var: "MORTRU_ADDR",
            value: addr_raw.clone(),
        })?;

        let max_workers = match lookup("MORTRU_MAX_WORKERS") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidNumber {
                        var: "MORTRU_MAX_WORKERS",
                        value: raw,
                    })
                }
            },
            None => DEFAULT_MAX_WORKERS,
        };

        let cms_url = lookup("MORTRU_CMS_URL")
            .map(|raw| raw.trim().to_string())
            .filter(|url| !url.is_empty());

        let allowed_origins = match lookup("MORTRU_ALLOWED_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
            None => DEFAULT_ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect(),
        };

        Ok(Self {
            bind_addr,
            db_path: lookup("MORTRU_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.to_string()),
            schema_path: lookup("MORTRU_SCHEMA_PATH")
                .unwrap_or_else(|| DEFAULT_SCHEMA_PATH.to_string()),
            max_workers,
            cms_url,
            allowed_origins,
        })
    }
}
