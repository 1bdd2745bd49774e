//! Domain primitives, ports, and seeding services.
//!
//! Public surface:
//! - `User`, `NewUser`, and the identity newtypes in [`user`].
//! - `Course`, `Lecture`, their drafts, and value types in [`course`].
//! - [`InstructorResolver`] for find-or-create of the fixture instructor.
//! - [`CourseCatalogSeeder`] for the full reset-and-seed run.

pub mod course;
pub mod course_seeding;
pub mod instructor;
pub mod ports;
pub mod user;

pub use self::course::{
    Course, CourseId, CourseLevel, CourseValidationError, Lecture, LectureId, NewCourse,
    NewLecture, Price, Title,
};
pub use self::course_seeding::{
    CourseCatalogSeeder, CourseSeedingError, DefinitionFailure, SeedCollection, SeedProgress,
    SeedRunSummary, SeedStep,
};
pub use self::instructor::{
    InstructorProfile, InstructorResolutionError, InstructorResolver, ResolvedInstructor,
};
pub use self::user::{
    DisplayName, EmailAddress, NewUser, PasswordHash, User, UserId, UserRole,
    UserValidationError,
};
