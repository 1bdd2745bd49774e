//! Port abstraction for the course collection.

use async_trait::async_trait;

use crate::domain::{Course, NewCourse};

use super::SeedPersistenceError;

/// Port for course operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Delete every course and its lecture links, returning how many courses
    /// were removed.
    async fn delete_all(&self) -> Result<u64, SeedPersistenceError>;

    /// Create a course together with its ordered lecture links.
    ///
    /// Implementations must store the course and its links atomically and
    /// preserve the order of `lecture_ids`.
    async fn create(&self, course: NewCourse) -> Result<Course, SeedPersistenceError>;
}
