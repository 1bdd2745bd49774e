//! Seeder configuration loaded via OrthoConfig.
//!
//! Values come from `SEEDER_*` environment variables and configuration
//! files. Command-line arguments are not consulted.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::outbound::credentials::DEFAULT_COST;
use crate::outbound::persistence::PoolConfig;

/// Conventional variable consulted when `SEEDER_DATABASE_URL` is unset.
pub const FALLBACK_DATABASE_URL_VAR: &str = "DATABASE_URL";

const DEFAULT_POOL_MAX_SIZE: u32 = 2;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Errors raised while resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration sources could not be read or parsed.
    #[error("failed to load seeder settings: {message}")]
    Load {
        /// Loader diagnostics.
        message: String,
    },
    /// No database URL is configured.
    #[error("no database URL configured; set SEEDER_DATABASE_URL or DATABASE_URL")]
    MissingDatabaseUrl,
    /// The pool size is zero.
    #[error("pool_max_size must be at least 1")]
    EmptyPool,
    /// A `.env` file exists but could not be read or parsed.
    #[error("failed to load .env: {message}")]
    Dotenv {
        /// Loader diagnostics, including the offending line when parsing failed.
        message: String,
    },
}

fn dotenv_outcome<T>(result: Result<T, dotenvy::Error>) -> Result<Option<T>, ConfigError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::Io(err)) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(ConfigError::Dotenv {
            message: err.to_string(),
        }),
    }
}

/// Load the nearest `.env` file into the process environment.
///
/// Variables already set in the environment win. Returns the loaded path, or
/// `None` when no file exists.
///
/// # Errors
///
/// Returns [`ConfigError::Dotenv`] when a file exists but cannot be read or
/// contains a malformed line.
pub fn load_dotenv() -> Result<Option<PathBuf>, ConfigError> {
    dotenv_outcome(dotenvy::dotenv())
}

/// Load the `.env` file at `path`, returning `false` when it does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Dotenv`] when the file cannot be read or parsed.
pub fn load_dotenv_from(path: &Path) -> Result<bool, ConfigError> {
    dotenv_outcome(dotenvy::from_path(path)).map(|loaded| loaded.is_some())
}

/// Configuration values controlling a seeding run.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SEEDER")]
pub struct SeederSettings {
    /// PostgreSQL connection URL.
    pub database_url: Option<String>,
    /// Maximum number of pooled connections.
    pub pool_max_size: Option<u32>,
    /// Pool checkout timeout in seconds.
    pub connect_timeout_secs: Option<u64>,
    /// bcrypt work factor for the instructor credential.
    pub hash_cost: Option<u32>,
    /// Skip applying embedded migrations after connecting.
    #[ortho_config(default = false)]
    pub skip_migrations: bool,
    /// Emit JSON log lines instead of human-readable output.
    #[ortho_config(default = false)]
    pub log_json: bool,
}

impl SeederSettings {
    /// Load settings from the environment and configuration files.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] when a source cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_iter([OsString::from("seed-courses")]).map_err(|err| ConfigError::Load {
            message: err.to_string(),
        })
    }

    /// Resolve the database URL, falling back to `DATABASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDatabaseUrl`] when neither source holds
    /// a non-blank value.
    pub fn database_url(&self) -> Result<String, ConfigError> {
        let fallback = std::env::var(FALLBACK_DATABASE_URL_VAR).ok();
        [self.database_url.clone(), fallback]
            .into_iter()
            .flatten()
            .map(|url| url.trim().to_owned())
            .find(|url| !url.is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)
    }

    /// Build the pool configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the URL is missing or the pool size is
    /// zero.
    pub fn pool_config(&self) -> Result<PoolConfig, ConfigError> {
        let max_size = self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE);
        if max_size == 0 {
            return Err(ConfigError::EmptyPool);
        }
        Ok(PoolConfig::new(self.database_url()?)
            .with_max_size(max_size)
            .with_min_idle(Some(1))
            .with_connection_timeout(Duration::from_secs(
                self.connect_timeout_secs
                    .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS),
            )))
    }

    /// bcrypt work factor, defaulting to 10.
    pub fn hash_cost(&self) -> u32 {
        self.hash_cost.unwrap_or(DEFAULT_COST)
    }

    /// Whether to apply migrations after connecting.
    pub fn run_migrations(&self) -> bool {
        !self.skip_migrations
    }
}
