//! Process wiring for the `seed-courses` binary.
//!
//! Loads settings, acquires the connection pool, and assembles the seeder
//! from the Diesel and bcrypt adapters.

pub mod config;
pub mod guard;
pub mod telemetry;

use std::sync::Arc;

use course_fixtures::FixtureCatalog;
use thiserror::Error;
use tracing::info;

use crate::domain::ports::FailureKind;
use crate::domain::{CourseCatalogSeeder, CourseSeedingError, SeedRunSummary};
use crate::outbound::credentials::BcryptPasswordHasher;
use crate::outbound::persistence::{
    DbPool, DieselCourseCatalogRepository, DieselUserRepository, MigrationError, PoolError,
    run_pending_migrations,
};

pub use config::{ConfigError, SeederSettings, load_dotenv, load_dotenv_from};
pub use guard::{Releasable, RunOutcome, run_with_guard};
pub use telemetry::init_tracing;

/// Errors raised before the run starts.
#[derive(Debug, Error)]
pub enum StartupError {
    /// Settings are incomplete or invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The store could not be reached.
    #[error("failed to connect to the catalogue store: {0}")]
    Connect(#[from] PoolError),
    /// The schema could not be brought up to date.
    #[error(transparent)]
    Migrate(#[from] MigrationError),
}

impl StartupError {
    /// Classify this error.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Connect(_) | Self::Migrate(MigrationError::Connect { .. }) => {
                FailureKind::Connection
            }
            Self::Config(_) | Self::Migrate(_) => FailureKind::Unknown,
        }
    }
}

/// Open the pool, prove the store is reachable, and apply migrations.
///
/// # Errors
///
/// Returns [`StartupError`] when settings are incomplete, the store is
/// unreachable, or a migration fails. No data has been touched in any of
/// these cases.
pub async fn acquire_store(settings: &SeederSettings) -> Result<DbPool, StartupError> {
    let config = settings.pool_config()?;
    let pool = DbPool::new(config).await?;
    pool.check_connection().await?;
    if settings.run_migrations() {
        run_pending_migrations(&settings.database_url()?).await?;
    }
    info!("connected to catalogue store");
    Ok(pool)
}

/// Seed the builtin catalogue through the Diesel adapters.
///
/// # Errors
///
/// Returns [`CourseSeedingError`] from the orchestrator unchanged.
pub async fn seed_course_catalogue(
    pool: DbPool,
    hasher: BcryptPasswordHasher,
) -> Result<SeedRunSummary, CourseSeedingError> {
    let catalogue = Arc::new(DieselCourseCatalogRepository::new(pool.clone()));
    let seeder = CourseCatalogSeeder::new(
        Arc::new(DieselUserRepository::new(pool)),
        Arc::clone(&catalogue),
        catalogue,
        Arc::new(hasher),
    );
    seeder.run(FixtureCatalog::builtin()).await
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn connection_failures_are_classified() {
        assert_eq!(
            StartupError::from(PoolError::build("refused")).kind(),
            FailureKind::Connection
        );
        assert_eq!(
            StartupError::from(MigrationError::Connect {
                message: "refused".to_owned()
            })
            .kind(),
            FailureKind::Connection
        );
    }

    #[rstest]
    fn configuration_failures_are_unknown() {
        assert_eq!(
            StartupError::from(ConfigError::MissingDatabaseUrl).kind(),
            FailureKind::Unknown
        );
    }
}
