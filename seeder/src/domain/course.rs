//! Course and lecture model.

use std::fmt;
use std::str::FromStr;

use course_fixtures::TITLE_MAX;
use thiserror::Error;
use uuid::Uuid;

use super::user::UserId;

/// Validation errors raised while constructing course and lecture values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CourseValidationError {
    /// A title-like field is blank after trimming.
    #[error("{field} must not be empty")]
    BlankField {
        /// Name of the offending field.
        field: &'static str,
    },
    /// A title-like field exceeds [`TITLE_MAX`] characters.
    #[error("{field} must be at most {max} characters")]
    FieldTooLong {
        /// Name of the offending field.
        field: &'static str,
        /// Maximum accepted length.
        max: usize,
    },
    /// Price cannot be represented by the store.
    #[error("price of {cents} cents exceeds the maximum storable value")]
    PriceOutOfRange {
        /// The rejected amount.
        cents: u32,
    },
    /// Stored level tag is not recognised.
    #[error("unknown course level '{value}'")]
    UnknownLevel {
        /// The rejected tag.
        value: String,
    },
}

/// Store-assigned lecture identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LectureId(Uuid);

impl LectureId {
    /// Wrap an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for LectureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Store-assigned course identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CourseId(Uuid);

impl CourseId {
    /// Wrap an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Non-blank, length-limited text used for titles and categories.
///
/// # Examples
/// ```
/// use seeder::domain::Title;
///
/// let title = Title::new("course title", "Linked Lists").expect("valid title");
/// assert_eq!(title.as_ref(), "Linked Lists");
/// assert!(Title::new("course title", "   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Title(String);

impl Title {
    /// Validate `value`, naming `field` in any error.
    pub fn new(
        field: &'static str,
        value: impl Into<String>,
    ) -> Result<Self, CourseValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(CourseValidationError::BlankField { field });
        }
        if value.chars().count() > TITLE_MAX {
            return Err(CourseValidationError::FieldTooLong {
                field,
                max: TITLE_MAX,
            });
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Difficulty level of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CourseLevel {
    /// Introductory material.
    Beginner,
    /// Intermediate material.
    Medium,
    /// Advanced material.
    Advance,
}

impl CourseLevel {
    /// Capitalised tag persisted in the store.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Medium => "Medium",
            Self::Advance => "Advance",
        }
    }
}

impl FromStr for CourseLevel {
    type Err = CourseValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Beginner" => Ok(Self::Beginner),
            "Medium" => Ok(Self::Medium),
            "Advance" => Ok(Self::Advance),
            other => Err(CourseValidationError::UnknownLevel {
                value: other.to_owned(),
            }),
        }
    }
}

/// Course price in minor currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u32);

impl Price {
    /// Build a price the store can hold (at most `i32::MAX` cents).
    pub fn from_cents(cents: u32) -> Result<Self, CourseValidationError> {
        if i32::try_from(cents).is_err() {
            return Err(CourseValidationError::PriceOutOfRange { cents });
        }
        Ok(Self(cents))
    }

    /// Amount in minor units.
    pub const fn cents(self) -> u32 {
        self.0
    }
}

/// A stored lecture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lecture {
    /// Store-assigned identifier.
    pub id: LectureId,
    /// Lecture title.
    pub title: Title,
    /// Whether the lecture can be watched without enrolling.
    pub is_preview_free: bool,
}

/// A lecture waiting to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLecture {
    /// Lecture title.
    pub title: Title,
    /// Whether the lecture can be watched without enrolling.
    pub is_preview_free: bool,
}

/// A stored course with its ordered lecture references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Store-assigned identifier.
    pub id: CourseId,
    /// Course title.
    pub title: Title,
    /// One-line tagline.
    pub subtitle: String,
    /// Long-form description.
    pub description: String,
    /// Catalogue category.
    pub category: Title,
    /// Difficulty level.
    pub level: CourseLevel,
    /// Price.
    pub price: Price,
    /// Thumbnail image reference.
    pub thumbnail_url: String,
    /// Lectures in presentation order.
    pub lecture_ids: Vec<LectureId>,
    /// Owning instructor.
    pub creator_id: UserId,
    /// Whether the course is visible in the catalogue.
    pub is_published: bool,
}

/// A course waiting to be created.
///
/// Every entry of `lecture_ids` must reference a lecture that already
/// exists; adapters reject dangling references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    /// Course title.
    pub title: Title,
    /// One-line tagline.
    pub subtitle: String,
    /// Long-form description.
    pub description: String,
    /// Catalogue category.
    pub category: Title,
    /// Difficulty level.
    pub level: CourseLevel,
    /// Price.
    pub price: Price,
    /// Thumbnail image reference.
    pub thumbnail_url: String,
    /// Lectures in presentation order.
    pub lecture_ids: Vec<LectureId>,
    /// Owning instructor.
    pub creator_id: UserId,
    /// Whether the course is visible in the catalogue.
    pub is_published: bool,
}

impl NewCourse {
    /// Attach the store-assigned identifier.
    pub fn into_course(self, id: CourseId) -> Course {
        let Self {
            title,
            subtitle,
            description,
            category,
            level,
            price,
            thumbnail_url,
            lecture_ids,
            creator_id,
            is_published,
        } = self;
        Course {
            id,
            title,
            subtitle,
            description,
            category,
            level,
            price,
            thumbnail_url,
            lecture_ids,
            creator_id,
            is_published,
        }
    }
}
