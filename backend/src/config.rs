//! Runtime settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `HEXBOT_*` environment variables and an
//! optional configuration file, in OrthoConfig's usual precedence.

use std::env;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::outbound::hexbot::DEFAULT_HEXBOT_ENDPOINT;
use crate::outbound::persistence::PoolConfig;

const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Errors raised while resolving settings into usable values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The configured endpoint is not an absolute URL.
    #[error("invalid hexbot endpoint {endpoint:?}: {message}")]
    InvalidEndpoint {
        /// Raw configured value.
        endpoint: String,
        /// Parser failure.
        message: String,
    },
    /// No database URL was configured and `DATABASE_URL` is unset.
    #[error("no database url configured; set HEXBOT_DATABASE_URL or DATABASE_URL")]
    MissingDatabaseUrl,
}

/// Settings controlling one fetch-and-save run.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "HEXBOT")]
pub struct HexbotSettings {
    /// Hexbot endpoint override.
    pub endpoint: Option<String>,
    /// HTTP request timeout in seconds.
    #[ortho_config(default = 10)]
    pub timeout_seconds: u64,
    /// Optional overall deadline for the fetch, in milliseconds.
    pub deadline_ms: Option<u64>,
    /// PostgreSQL connection URL. Falls back to `DATABASE_URL`.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Seconds to wait for a pooled database connection.
    pub pool_timeout_seconds: Option<u64>,
    /// Discard the fetched colour instead of writing it to PostgreSQL.
    pub dry_run: Option<bool>,
}

impl HexbotSettings {
    /// Return the configured endpoint, falling back to the public hexbot.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidEndpoint`] when the value does not
    /// parse as a URL.
    pub fn endpoint(&self) -> Result<Url, SettingsError> {
        let raw = self.endpoint.as_deref().unwrap_or(DEFAULT_HEXBOT_ENDPOINT);
        Url::parse(raw).map_err(|error| SettingsError::InvalidEndpoint {
            endpoint: raw.to_owned(),
            message: error.to_string(),
        })
    }

    /// HTTP request timeout, never shorter than one second.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.max(1))
    }

    /// Optional fetch deadline.
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline_ms.map(Duration::from_millis)
    }

    /// Resolve the database URL from settings or the `DATABASE_URL` variable.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::MissingDatabaseUrl`] when neither is set.
    pub fn database_url(&self) -> Result<String, SettingsError> {
        self.database_url
            .clone()
            .or_else(|| env::var(DATABASE_URL_ENV).ok())
            .filter(|url| !url.trim().is_empty())
            .ok_or(SettingsError::MissingDatabaseUrl)
    }

    /// Whether the fetched colour should be discarded rather than stored.
    pub fn dry_run(&self) -> bool {
        self.dry_run.unwrap_or(false)
    }

    /// Build the connection pool configuration for the colour store.
    ///
    /// Unset pool limits keep the [`PoolConfig`] defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::MissingDatabaseUrl`] when no database URL is
    /// available.
    pub fn pool_config(&self) -> Result<PoolConfig, SettingsError> {
        let mut config = PoolConfig::new(self.database_url()?);
        if let Some(max_size) = self.pool_max_size {
            config = config.with_max_size(max_size.max(1));
        }
        if let Some(seconds) = self.pool_timeout_seconds {
            config = config.with_connection_timeout(Duration::from_secs(seconds.max(1)));
        }
        Ok(config)
    }
}
