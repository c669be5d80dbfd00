//! Runtime configuration for the board and its `PostgreSQL` adapter.
//!
//! The column layout is read from JSON; database settings come from the
//! environment so that credentials stay out of configuration files.

use crate::board::domain::BoardLayout;
use std::env;
use thiserror::Error;

/// Environment variable holding the `PostgreSQL` connection URL.
pub const DATABASE_URL_ENV: &str = "TASKBOARD_DATABASE_URL";

/// Environment variable holding the optional connection pool size.
pub const POOL_SIZE_ENV: &str = "TASKBOARD_POOL_SIZE";

const DEFAULT_POOL_SIZE: u32 = 4;

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is unset or blank.
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    /// An environment variable holds an unusable value.
    #[error("invalid value for {name}: {value}")]
    InvalidVar {
        /// Variable name.
        name: &'static str,
        /// Rejected value.
        value: String,
    },

    /// The layout document is not valid JSON for [`BoardLayout`].
    #[error("invalid board layout: {0}")]
    Layout(#[from] serde_json::Error),
}

/// Parses a column layout from JSON. Missing columns keep their defaults.
///
/// # Errors
///
/// Returns [`ConfigError::Layout`] when the document cannot be parsed.
pub fn layout_from_json(json: &str) -> Result<BoardLayout, ConfigError> {
    Ok(serde_json::from_str(json)?)
}

/// Connection settings for [`PostgresRemoteStore`].
///
/// [`PostgresRemoteStore`]: crate::board::adapters::postgres::PostgresRemoteStore
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostgresConfig {
    database_url: String,
    max_pool_size: u32,
}

impl PostgresConfig {
    /// Creates settings with the default pool size.
    #[must_use]
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_pool_size: DEFAULT_POOL_SIZE,
        }
    }

    /// Overrides the maximum pool size.
    #[must_use]
    pub const fn with_max_pool_size(mut self, size: u32) -> Self {
        self.max_pool_size = size;
        self
    }

    /// Reads settings from [`DATABASE_URL_ENV`] and [`POOL_SIZE_ENV`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] when the URL is unset and
    /// [`ConfigError::InvalidVar`] when the pool size is not a positive
    /// integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its
    /// value.
    ///
    /// # Errors
    ///
    /// See [`Self::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup(DATABASE_URL_ENV)
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingVar(DATABASE_URL_ENV))?;

        let config = Self::new(database_url);
        let Some(raw_size) = lookup(POOL_SIZE_ENV) else {
            return Ok(config);
        };
        let size = raw_size
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|size| *size > 0)
            .ok_or_else(|| ConfigError::InvalidVar {
                name: POOL_SIZE_ENV,
                value: raw_size.clone(),
            })?;
        Ok(config.with_max_pool_size(size))
    }

    /// Returns the connection URL.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Returns the maximum number of pooled connections.
    #[must_use]
    pub const fn max_pool_size(&self) -> u32 {
        self.max_pool_size
    }
}
