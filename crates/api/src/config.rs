use anyhow::{Context, Result};
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    /// When unset the service runs on the in-process store.
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub port: u16,
    pub skip_migrations: bool,
    pub introspection_enabled: bool,
    pub allowed_origins: Vec<String>,
    /// `RUST_LOG` directive for the tracing filter.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            database_max_connections: 30,
            port: 8080,
            skip_migrations: false,
            introspection_enabled: false,
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:3001".to_string(),
            ],
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Load `.env` into the process environment, then read it.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            None => defaults.port,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            database_max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.database_max_connections),
            port,
            skip_migrations: lookup("SKIP_MIGRATIONS")
                .map(|v| v.to_lowercase() == "true")
                .unwrap_or(defaults.skip_migrations),
            introspection_enabled: lookup("GQL_INTROSPECTION")
                .map(|v| v == "true")
                .unwrap_or(defaults.introspection_enabled),
            allowed_origins: lookup("ALLOWED_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|o| o.trim().to_string())
                        .filter(|o| !o.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.allowed_origins),
            log_filter: lookup("RUST_LOG")
                .filter(|f| !f.trim().is_empty())
                .unwrap_or(defaults.log_filter),
        })
    }
}
