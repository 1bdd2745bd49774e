//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types; the seeding rules live in the domain layer. Row structs and table
//! definitions stay private to this module.
//!
//! # Example
//!
//! ```rust,no_run
//! use seeder::outbound::persistence::{
//!     DbPool, DieselCourseCatalogRepository, DieselUserRepository, PoolConfig,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/courses")).await?;
//! let users = DieselUserRepository::new(pool.clone());
//! let catalogue = DieselCourseCatalogRepository::new(pool);
//! # let _ = (users, catalogue);
//! # Ok(())
//! # }
//! ```

mod diesel_course_catalog_repository;
mod diesel_error_mapping;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_course_catalog_repository::DieselCourseCatalogRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
