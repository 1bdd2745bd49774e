//! Course catalogue seeding orchestration.
//!
//! A run wipes the course and lecture collections, resolves the instructor,
//! then walks the fixture catalogue in order. For each definition the
//! lectures are created first and their identifiers, in definition order,
//! are attached to the new course.
//!
//! Runs are strictly sequential and there is no compensation: when a step
//! fails the records written so far stay in the store, and the returned
//! [`CourseSeedingError::Definition`] says how many there are.

use std::fmt;
use std::sync::Arc;

use course_fixtures::{CatalogError, CourseDefinition, CourseLevelSeed, FixtureCatalog};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::instructor::{
    InstructorProfile, InstructorResolutionError, InstructorResolver, ResolvedInstructor,
};
use crate::domain::ports::{
    CourseRepository, FailureKind, LectureRepository, PasswordHasher, SeedPersistenceError,
    UserRepository,
};
use crate::domain::{
    CourseLevel, CourseValidationError, LectureId, NewCourse, NewLecture, Price, Title,
    UserValidationError,
};

/// Collections cleared at the start of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedCollection {
    /// The course collection and its lecture links.
    Courses,
    /// The lecture collection.
    Lectures,
}

impl fmt::Display for SeedCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Courses => "courses",
            Self::Lectures => "lectures",
        })
    }
}

/// Step within a single course definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedStep {
    /// Converting fixture data into domain values.
    Prepare,
    /// Bulk-creating the lectures.
    CreateLectures,
    /// Creating the course record.
    CreateCourse,
}

impl fmt::Display for SeedStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Prepare => "preparation",
            Self::CreateLectures => "lecture creation",
            Self::CreateCourse => "course creation",
        })
    }
}

/// Records persisted by a run so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedProgress {
    /// Courses created.
    pub courses_created: usize,
    /// Lectures created, including any not yet attached to a course.
    pub lectures_created: usize,
}

impl fmt::Display for SeedProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} courses and {} lectures already persisted",
            self.courses_created, self.lectures_created
        )
    }
}

/// Why a single definition could not be seeded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionFailure {
    /// Fixture data did not convert into valid domain values.
    #[error(transparent)]
    Validation(#[from] CourseValidationError),
    /// The store rejected a write.
    #[error(transparent)]
    Persistence(#[from] SeedPersistenceError),
    /// The store returned a different number of lectures than requested.
    #[error("store returned {actual} lectures, expected {expected}")]
    LectureCountMismatch {
        /// Lectures submitted.
        expected: usize,
        /// Lectures returned.
        actual: usize,
    },
}

impl DefinitionFailure {
    fn kind(&self) -> FailureKind {
        match self {
            Self::Validation(_) => FailureKind::Validation,
            Self::Persistence(error) => error.kind(),
            Self::LectureCountMismatch { .. } => FailureKind::Unknown,
        }
    }
}

/// Errors that abort a seeding run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CourseSeedingError {
    /// The catalogue failed structural validation; nothing was written.
    #[error("fixture catalogue is invalid: {0}")]
    Catalog(#[from] CatalogError),
    /// The fixture instructor identity is malformed; nothing was written.
    #[error("fixture instructor is invalid: {0}")]
    InstructorProfile(#[from] UserValidationError),
    /// Clearing a collection failed.
    #[error("failed to reset {collection}: {source}")]
    Reset {
        /// Collection being cleared.
        collection: SeedCollection,
        /// Underlying store error.
        #[source]
        source: SeedPersistenceError,
    },
    /// The instructor could not be resolved.
    #[error(transparent)]
    Instructor(#[from] InstructorResolutionError),
    /// A course definition failed; earlier definitions remain persisted.
    #[error("course {index} '{title}' failed during {step} ({progress}): {source}")]
    Definition {
        /// Zero-based position in the catalogue.
        index: usize,
        /// Title of the failing definition.
        title: String,
        /// Step that failed.
        step: SeedStep,
        /// Records persisted before the failure.
        progress: SeedProgress,
        /// Cause.
        #[source]
        source: DefinitionFailure,
    },
}

impl CourseSeedingError {
    /// Classify this error.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Catalog(_) | Self::InstructorProfile(_) => FailureKind::Validation,
            Self::Reset { source, .. } => source.kind(),
            Self::Instructor(error) => error.kind(),
            Self::Definition { source, .. } => source.kind(),
        }
    }

    /// Records left behind by a run that failed part way through.
    pub fn progress(&self) -> Option<SeedProgress> {
        match self {
            Self::Definition { progress, .. } => Some(*progress),
            _ => None,
        }
    }
}

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRunSummary {
    /// Instructor who owns every seeded course.
    pub instructor: ResolvedInstructor,
    /// Course titles in creation order.
    pub course_titles: Vec<String>,
    /// Courses created.
    pub course_count: usize,
    /// Lectures created.
    pub lecture_count: usize,
    /// Courses removed by the reset.
    pub removed_courses: u64,
    /// Lectures removed by the reset.
    pub removed_lectures: u64,
}

impl fmt::Display for SeedRunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let origin = if self.instructor.created {
            "created"
        } else {
            "existing"
        };
        writeln!(
            f,
            "Instructor: {} <{}> ({origin}, id {})",
            self.instructor.display_name.as_ref(),
            self.instructor.email,
            self.instructor.id
        )?;
        writeln!(
            f,
            "Removed {} courses and {} lectures",
            self.removed_courses, self.removed_lectures
        )?;
        writeln!(
            f,
            "Seeded {} courses with {} lectures:",
            self.course_count, self.lecture_count
        )?;
        for (position, title) in self.course_titles.iter().enumerate() {
            writeln!(f, "  {:>2}. {title}", position + 1)?;
        }
        Ok(())
    }
}

/// Seeds the course catalogue from a [`FixtureCatalog`].
pub struct CourseCatalogSeeder<U, L, C, H> {
    resolver: InstructorResolver<U, H>,
    lectures: Arc<L>,
    courses: Arc<C>,
}

impl<U, L, C, H> CourseCatalogSeeder<U, L, C, H> {
    /// Create a seeder over the given stores and hasher.
    pub fn new(users: Arc<U>, lectures: Arc<L>, courses: Arc<C>, hasher: Arc<H>) -> Self {
        Self {
            resolver: InstructorResolver::new(users, hasher),
            lectures,
            courses,
        }
    }
}

struct PreparedCourse {
    title: Title,
    subtitle: String,
    description: String,
    category: Title,
    level: CourseLevel,
    price: Price,
    thumbnail_url: String,
    lectures: Vec<NewLecture>,
}

fn level_from_seed(seed: CourseLevelSeed) -> CourseLevel {
    match seed {
        CourseLevelSeed::Beginner => CourseLevel::Beginner,
        CourseLevelSeed::Medium => CourseLevel::Medium,
        CourseLevelSeed::Advance => CourseLevel::Advance,
    }
}

fn prepare(definition: &CourseDefinition) -> Result<PreparedCourse, CourseValidationError> {
    let lectures = definition
        .lectures
        .iter()
        .map(|lecture| {
            Ok(NewLecture {
                title: Title::new("lecture title", lecture.title())?,
                is_preview_free: lecture.is_preview_free(),
            })
        })
        .collect::<Result<Vec<_>, CourseValidationError>>()?;

    Ok(PreparedCourse {
        title: Title::new("course title", definition.title)?,
        subtitle: definition.subtitle.to_owned(),
        description: definition.description.to_owned(),
        category: Title::new("category", definition.category)?,
        level: level_from_seed(definition.level),
        price: Price::from_cents(definition.price_cents)?,
        thumbnail_url: definition.thumbnail_url.to_owned(),
        lectures,
    })
}

impl<U, L, C, H> CourseCatalogSeeder<U, L, C, H>
where
    U: UserRepository,
    L: LectureRepository,
    C: CourseRepository,
    H: PasswordHasher,
{
    /// Replace the course catalogue with the contents of `catalog`.
    ///
    /// The catalogue and instructor identity are validated before anything
    /// is deleted. Courses are removed before lectures so no course ever
    /// references a missing lecture.
    ///
    /// # Errors
    ///
    /// Returns [`CourseSeedingError`] on the first failure. Records created
    /// before the failure are not rolled back.
    pub async fn run(&self, catalog: &FixtureCatalog) -> Result<SeedRunSummary, CourseSeedingError> {
        catalog.validate()?;
        let profile = InstructorProfile::from_definition(catalog.instructor())?;

        let removed_courses = self
            .courses
            .delete_all()
            .await
            .map_err(|source| CourseSeedingError::Reset {
                collection: SeedCollection::Courses,
                source,
            })?;
        let removed_lectures = self
            .lectures
            .delete_all()
            .await
            .map_err(|source| CourseSeedingError::Reset {
                collection: SeedCollection::Lectures,
                source,
            })?;
        info!(removed_courses, removed_lectures, "cleared course catalogue");

        let instructor = self.resolver.resolve(&profile).await?;

        let mut progress = SeedProgress::default();
        let mut course_titles = Vec::with_capacity(catalog.len());
        for (index, definition) in catalog.courses().iter().enumerate() {
            let outcome = self
                .seed_definition(definition, &instructor, &mut progress)
                .await;
            let title = outcome.map_err(|(step, source)| {
                warn!(
                    course_index = index,
                    course_title = definition.title,
                    %step,
                    courses_created = progress.courses_created,
                    lectures_created = progress.lectures_created,
                    "course seeding aborted"
                );
                CourseSeedingError::Definition {
                    index,
                    title: definition.title.to_owned(),
                    step,
                    progress,
                    source,
                }
            })?;
            course_titles.push(title);
        }

        Ok(SeedRunSummary {
            instructor,
            course_titles,
            course_count: progress.courses_created,
            lecture_count: progress.lectures_created,
            removed_courses,
            removed_lectures,
        })
    }

    async fn seed_definition(
        &self,
        definition: &CourseDefinition,
        instructor: &ResolvedInstructor,
        progress: &mut SeedProgress,
    ) -> Result<String, (SeedStep, DefinitionFailure)> {
        let prepared = prepare(definition).map_err(|err| (SeedStep::Prepare, err.into()))?;

        let expected = prepared.lectures.len();
        let lectures = self
            .lectures
            .insert_many(prepared.lectures)
            .await
            .map_err(|err| (SeedStep::CreateLectures, err.into()))?;
        progress.lectures_created += lectures.len();
        if lectures.len() != expected {
            return Err((
                SeedStep::CreateLectures,
                DefinitionFailure::LectureCountMismatch {
                    expected,
                    actual: lectures.len(),
                },
            ));
        }
        let lecture_ids: Vec<LectureId> = lectures.iter().map(|lecture| lecture.id).collect();
        debug!(course_title = definition.title, lecture_count = expected, "created lectures");

        let course = self
            .courses
            .create(NewCourse {
                title: prepared.title,
                subtitle: prepared.subtitle,
                description: prepared.description,
                category: prepared.category,
                level: prepared.level,
                price: prepared.price,
                thumbnail_url: prepared.thumbnail_url,
                lecture_ids,
                creator_id: instructor.id,
                is_published: true,
            })
            .await
            .map_err(|err| (SeedStep::CreateCourse, err.into()))?;
        progress.courses_created += 1;

        info!(
            course_title = %course.title,
            course_id = %course.id,
            lecture_count = course.lecture_ids.len(),
            "seeded course"
        );
        Ok(course.title.to_string())
    }
}

#[cfg(test)]
#[path = "course_seeding_tests.rs"]
mod tests;
