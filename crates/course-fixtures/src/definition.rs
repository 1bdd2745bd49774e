//! Fixture definition types.
//!
//! These types describe the records the seeder creates. They are independent
//! of the seeder's domain types and hold only `'static` data, so a definition can
//! be shared freely and never changes after compilation.

/// Difficulty level of a fixture course.
///
/// Mirrors the seeder's `CourseLevel` without depending on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CourseLevelSeed {
    /// Introductory material.
    #[default]
    Beginner,
    /// Intermediate material.
    Medium,
    /// Advanced material.
    Advance,
}

impl CourseLevelSeed {
    /// Human-readable label, as shown in the catalogue.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Medium => "Medium",
            Self::Advance => "Advance",
        }
    }
}

/// A lecture belonging to a fixture course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LectureDefinition {
    title: &'static str,
    is_preview_free: bool,
}

impl LectureDefinition {
    /// Define a lecture.
    #[must_use]
    pub const fn new(title: &'static str, is_preview_free: bool) -> Self {
        Self {
            title,
            is_preview_free,
        }
    }

    /// Lecture title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.title
    }

    /// Whether the lecture can be watched without enrolling.
    #[must_use]
    pub const fn is_preview_free(&self) -> bool {
        self.is_preview_free
    }
}

/// A fixture course and its ordered lectures.
///
/// # Example
///
/// ```
/// use course_fixtures::{CourseDefinition, CourseLevelSeed, LectureDefinition};
///
/// const LECTURES: &[LectureDefinition] = &[LectureDefinition::new("Welcome", true)];
/// const COURSE: CourseDefinition = CourseDefinition {
///     title: "Demo Course",
///     subtitle: "A tiny course",
///     description: "Used in documentation.",
///     category: "Demo",
///     level: CourseLevelSeed::Beginner,
///     price_cents: 1_000,
///     thumbnail_url: "https://example.com/demo.png",
///     lectures: LECTURES,
/// };
///
/// assert_eq!(COURSE.lectures.len(), 1);
/// assert_eq!(COURSE.level.label(), "Beginner");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseDefinition {
    /// Course title; unique within a catalogue.
    pub title: &'static str,
    /// One-line tagline shown under the title.
    pub subtitle: &'static str,
    /// Long-form description.
    pub description: &'static str,
    /// Catalogue category.
    pub category: &'static str,
    /// Difficulty level.
    pub level: CourseLevelSeed,
    /// Price in minor currency units.
    pub price_cents: u32,
    /// Thumbnail image reference.
    pub thumbnail_url: &'static str,
    /// Lectures in presentation order.
    pub lectures: &'static [LectureDefinition],
}

/// The single instructor who owns every fixture course.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct InstructorDefinition {
    name: &'static str,
    email: &'static str,
    password: &'static str,
    photo_url: &'static str,
}

impl InstructorDefinition {
    /// Define an instructor identity.
    #[must_use]
    pub const fn new(
        name: &'static str,
        email: &'static str,
        password: &'static str,
        photo_url: &'static str,
    ) -> Self {
        Self {
            name,
            email,
            password,
            photo_url,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Identifying email; the instructor is resolved by this key.
    #[must_use]
    pub const fn email(&self) -> &'static str {
        self.email
    }

    /// Plaintext credential, hashed before it is stored.
    #[must_use]
    pub const fn password(&self) -> &'static str {
        self.password
    }

    /// Profile image reference.
    #[must_use]
    pub const fn photo_url(&self) -> &'static str {
        self.photo_url
    }
}

impl std::fmt::Debug for InstructorDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstructorDefinition")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("photo_url", &self.photo_url)
            .finish()
    }
}
