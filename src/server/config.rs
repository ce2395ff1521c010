use std::time::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_DB_NAME: &str = "server_management";
const DEFAULT_DB_USER: &str = "postgres";
const DEFAULT_DB_PASSWORD: &str = "postgres";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOG_FILE: &str = "logs/app.log";

/// Connection pool limits applied at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct PoolConfig {
    pub min_connections: u32,
    pub max_connections: u32,
    pub timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            min_connections: 2,
            max_connections: 10,
            timeout: Duration::from_secs(60),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub pool: PoolConfig,

    pub bind_addr: String,

    pub log_level: String,
    /// `None` disables the file sink.
    pub log_file: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `DATABASE_URL` wins when present; otherwise the URL is assembled from the
    /// individual `DB_*` variables, each with its own default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = match lookup("DATABASE_URL") {
            Some(url) if !url.is_empty() => url,
            _ => {
                let host = lookup("DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.to_string());
                let port = match lookup("DB_PORT") {
                    Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::InvalidEnvVar {
                        name: "DB_PORT".to_string(),
                        value: raw.clone(),
                        reason: e.to_string(),
                    })?,
                    None => DEFAULT_DB_PORT,
                };
                let name = lookup("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string());
                let user = lookup("DB_USER").unwrap_or_else(|| DEFAULT_DB_USER.to_string());
                let password =
                    lookup("DB_PASSWORD").unwrap_or_else(|| DEFAULT_DB_PASSWORD.to_string());

                // Credentials may contain URL delimiters.
                format!(
                    "postgres://{}:{}@{host}:{port}/{name}",
                    urlencoding::encode(&user),
                    urlencoding::encode(&password),
                )
            }
        };

        let log_file = match lookup("LOG_FILE") {
            Some(path) if path.is_empty() => None,
            Some(path) => Some(path),
            None => Some(DEFAULT_LOG_FILE.to_string()),
        };

        Ok(Self {
            database_url,
            pool: PoolConfig::default(),
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_file,
        })
    }
}
