//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod course_repository;
mod lecture_repository;
mod password_hasher;
mod seed_persistence_error;
mod user_repository;

#[cfg(test)]
pub use course_repository::MockCourseRepository;
pub use course_repository::CourseRepository;
#[cfg(test)]
pub use lecture_repository::MockLectureRepository;
pub use lecture_repository::LectureRepository;
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHashError, PasswordHasher};
pub use seed_persistence_error::{FailureKind, SeedPersistenceError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::UserRepository;
