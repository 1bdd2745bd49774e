//! Fixed course catalogue used to seed demonstration environments.
//!
//! This crate holds the immutable fixture data the seeder writes into the
//! catalogue store: one instructor identity and an ordered list of course
//! definitions, each owning an ordered list of lecture definitions. It is
//! independent of the seeder's domain and persistence types so the data can be
//! inspected and validated without a database.
//!
//! # Overview
//!
//! - [`FixtureCatalog::builtin`] returns the static catalogue.
//! - [`FixtureCatalog::validate`] checks catalogue integrity.
//! - Definitions expose read access only; nothing here can be mutated.
//!
//! # Example
//!
//! ```
//! use course_fixtures::FixtureCatalog;
//!
//! let catalog = FixtureCatalog::builtin();
//! catalog.validate().expect("builtin catalogue is valid");
//!
//! assert_eq!(catalog.len(), 12);
//! assert_eq!(catalog.lecture_count(), 62);
//! assert_eq!(catalog.instructor().email(), "saroj@gmail.com");
//! ```

mod builtin;
mod catalog;
mod definition;
mod error;
mod validation;

pub use catalog::FixtureCatalog;
pub use definition::{CourseDefinition, CourseLevelSeed, InstructorDefinition, LectureDefinition};
pub use error::CatalogError;
pub use validation::{TITLE_MAX, is_valid_title};
