//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM
//! - **credentials**: bcrypt-backed password hashing
//!
//! Adapters are thin translators between domain types and infrastructure
//! representations. They contain no seeding logic.

pub mod credentials;
pub mod persistence;
