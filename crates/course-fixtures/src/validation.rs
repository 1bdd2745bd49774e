//! Catalogue validation.
//!
//! The seeder's `Title` type enforces the same limit through [`TITLE_MAX`],
//! so a catalogue that validates here never fails title conversion there.
//!
//! # Validation Rules
//!
//! - Titles must not be blank after trimming
//! - Titles must be at most [`TITLE_MAX`] characters
//! - Course titles are unique within the catalogue
//! - Lecture titles are unique within their course
//! - Every course has at least one lecture

use std::collections::HashSet;

use crate::catalog::FixtureCatalog;
use crate::error::CatalogError;

/// Maximum allowed length for course and lecture titles.
pub const TITLE_MAX: usize = 120;

/// Validates a course or lecture title.
///
/// # Examples
///
/// ```
/// use course_fixtures::is_valid_title;
///
/// assert!(is_valid_title("Linked Lists"));
/// assert!(!is_valid_title("   "));
/// assert!(!is_valid_title(&"A".repeat(121)));
/// ```
#[must_use]
pub fn is_valid_title(title: &str) -> bool {
    !title.trim().is_empty() && title.chars().count() <= TITLE_MAX
}

pub(crate) fn validate_catalog(catalog: &FixtureCatalog) -> Result<(), CatalogError> {
    if catalog.is_empty() {
        return Err(CatalogError::EmptyCatalog);
    }

    let mut course_titles = HashSet::with_capacity(catalog.len());
    for (index, course) in catalog.courses().iter().enumerate() {
        if !is_valid_title(course.title) {
            return Err(CatalogError::InvalidCourseTitle {
                index,
                title: course.title.to_owned(),
            });
        }
        if !course_titles.insert(course.title) {
            return Err(CatalogError::DuplicateCourseTitle {
                title: course.title.to_owned(),
            });
        }
        if course.lectures.is_empty() {
            return Err(CatalogError::EmptyCourse {
                course: course.title.to_owned(),
            });
        }

        let mut lecture_titles = HashSet::with_capacity(course.lectures.len());
        for (lecture_index, lecture) in course.lectures.iter().enumerate() {
            if !is_valid_title(lecture.title()) {
                return Err(CatalogError::InvalidLectureTitle {
                    course: course.title.to_owned(),
                    index: lecture_index,
                    title: lecture.title().to_owned(),
                });
            }
            if !lecture_titles.insert(lecture.title()) {
                return Err(CatalogError::DuplicateLectureTitle {
                    course: course.title.to_owned(),
                    title: lecture.title().to_owned(),
                });
            }
        }
    }

    Ok(())
}
