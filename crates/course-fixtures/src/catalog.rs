//! Fixture catalogue access.
//!
//! The catalogue pairs the instructor identity with the ordered course
//! definitions. Instances are built from `'static` data and expose read
//! access only.

use crate::builtin;
use crate::definition::{CourseDefinition, InstructorDefinition};
use crate::error::CatalogError;
use crate::validation::validate_catalog;

/// An immutable, ordered set of course definitions plus their instructor.
///
/// # Example
///
/// ```
/// use course_fixtures::FixtureCatalog;
///
/// let catalog = FixtureCatalog::builtin();
/// let first = catalog.courses().first().expect("catalogue is not empty");
/// assert_eq!(first.title, "Complete Python Programming Course");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureCatalog {
    instructor: InstructorDefinition,
    courses: &'static [CourseDefinition],
}

static BUILTIN: FixtureCatalog = FixtureCatalog::new(builtin::INSTRUCTOR, builtin::COURSES);

impl FixtureCatalog {
    /// Build a catalogue from static definitions.
    ///
    /// Mostly useful for tests that need a smaller catalogue than the
    /// builtin one.
    #[must_use]
    pub const fn new(
        instructor: InstructorDefinition,
        courses: &'static [CourseDefinition],
    ) -> Self {
        Self {
            instructor,
            courses,
        }
    }

    /// The catalogue shipped with the seeder.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Instructor who owns every course.
    #[must_use]
    pub const fn instructor(&self) -> &InstructorDefinition {
        &self.instructor
    }

    /// Course definitions in seeding order.
    #[must_use]
    pub const fn courses(&self) -> &'static [CourseDefinition] {
        self.courses
    }

    /// Number of course definitions.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.courses.len()
    }

    /// Returns `true` when the catalogue holds no courses.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Total number of lectures across all courses.
    #[must_use]
    pub fn lecture_count(&self) -> usize {
        self.courses.iter().map(|course| course.lectures.len()).sum()
    }

    /// Look up a course definition by exact title.
    #[must_use]
    pub fn find_course(&self, title: &str) -> Option<&'static CourseDefinition> {
        self.courses.iter().find(|course| course.title == title)
    }

    /// Check the catalogue for structural problems.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the catalogue is empty, a course has no
    /// lectures, a title is blank or too long, or titles collide.
    pub fn validate(&self) -> Result<(), CatalogError> {
        validate_catalog(self)
    }
}
