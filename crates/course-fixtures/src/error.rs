//! Error types for the course-fixtures crate.

use thiserror::Error;

/// Structural problems found while validating a fixture catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The catalogue contains no course definitions.
    #[error("catalogue contains no course definitions")]
    EmptyCatalog,

    /// A course definition has no lectures.
    #[error("course '{course}' has no lectures")]
    EmptyCourse {
        /// Title of the offending course.
        course: String,
    },

    /// A course title is blank or too long.
    #[error("course at index {index} has an invalid title: '{title}'")]
    InvalidCourseTitle {
        /// Position of the course in the catalogue.
        index: usize,
        /// The rejected title.
        title: String,
    },

    /// A lecture title is blank or too long.
    #[error("lecture {index} of course '{course}' has an invalid title: '{title}'")]
    InvalidLectureTitle {
        /// Title of the owning course.
        course: String,
        /// Position of the lecture within the course.
        index: usize,
        /// The rejected title.
        title: String,
    },

    /// Two course definitions share a title.
    #[error("duplicate course title '{title}'")]
    DuplicateCourseTitle {
        /// The repeated title.
        title: String,
    },

    /// Two lectures within one course share a title.
    #[error("course '{course}' repeats lecture title '{title}'")]
    DuplicateLectureTitle {
        /// Title of the owning course.
        course: String,
        /// The repeated lecture title.
        title: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_catalog_formats_correctly() {
        assert_eq!(
            CatalogError::EmptyCatalog.to_string(),
            "catalogue contains no course definitions"
        );
    }

    #[test]
    fn empty_course_formats_correctly() {
        let err = CatalogError::EmptyCourse {
            course: "Rust 101".to_owned(),
        };
        assert_eq!(err.to_string(), "course 'Rust 101' has no lectures");
    }

    #[test]
    fn invalid_lecture_title_formats_correctly() {
        let err = CatalogError::InvalidLectureTitle {
            course: "Rust 101".to_owned(),
            index: 3,
            title: "  ".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "lecture 3 of course 'Rust 101' has an invalid title: '  '"
        );
    }

    #[test]
    fn duplicate_course_title_formats_correctly() {
        let err = CatalogError::DuplicateCourseTitle {
            title: "Rust 101".to_owned(),
        };
        assert_eq!(err.to_string(), "duplicate course title 'Rust 101'");
    }
}
