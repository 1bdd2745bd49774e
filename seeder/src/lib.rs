//! Course catalogue seeder.
//!
//! Replaces the course and lecture collections of the catalogue store with
//! the fixed catalogue from `course-fixtures`, owned by a single instructor
//! that is created on first use and reused afterwards.
//!
//! - [`domain`]: value types, ports, instructor resolution, and the seeding
//!   run itself.
//! - [`outbound`]: Diesel/PostgreSQL repositories and bcrypt hashing.
//! - [`startup`]: settings, logging, and the scoped run guard used by the
//!   `seed-courses` binary.

pub mod domain;
pub mod outbound;
pub mod startup;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
