//! Port abstraction for the lecture collection.

use async_trait::async_trait;

use crate::domain::{Lecture, NewLecture};

use super::SeedPersistenceError;

/// Port for bulk lecture operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LectureRepository: Send + Sync {
    /// Delete every lecture, returning how many were removed.
    ///
    /// Callers must remove courses first; lectures still linked to a course
    /// are rejected by relational adapters.
    async fn delete_all(&self) -> Result<u64, SeedPersistenceError>;

    /// Insert lectures and return them with identifiers, in input order.
    async fn insert_many(
        &self,
        lectures: Vec<NewLecture>,
    ) -> Result<Vec<Lecture>, SeedPersistenceError>;
}
