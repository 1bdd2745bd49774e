//! User identity model.
//!
//! The seeder only ever creates one kind of user (the fixture instructor),
//! but the types here describe the full stored record so adapters can map
//! rows without ad hoc strings.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use uuid::Uuid;

/// Maximum allowed length for a display name.
pub const DISPLAY_NAME_MAX: usize = 64;

/// Maximum allowed length for an email address.
pub const EMAIL_MAX: usize = 254;

/// Validation errors raised while constructing user values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserValidationError {
    /// Email is empty after trimming.
    #[error("email must not be empty")]
    EmptyEmail,
    /// Email lacks a local part, a domain, or has several `@` signs.
    #[error("email '{value}' is not a valid address")]
    InvalidEmail {
        /// The rejected input.
        value: String,
    },
    /// Email exceeds [`EMAIL_MAX`] characters.
    #[error("email must be at most {max} characters")]
    EmailTooLong {
        /// Maximum accepted length.
        max: usize,
    },
    /// Display name is empty after trimming.
    #[error("display name must not be empty")]
    EmptyDisplayName,
    /// Display name exceeds [`DISPLAY_NAME_MAX`] characters.
    #[error("display name must be at most {max} characters")]
    DisplayNameTooLong {
        /// Maximum accepted length.
        max: usize,
    },
    /// Stored role tag is not recognised.
    #[error("unknown user role '{value}'")]
    UnknownRole {
        /// The rejected tag.
        value: String,
    },
}

/// Store-assigned user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(Uuid);

impl UserId {
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

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Normalised email address used as the unique identity key.
///
/// Input is trimmed and lower-cased so lookups are insensitive to case.
///
/// # Examples
/// ```
/// use seeder::domain::EmailAddress;
///
/// let email = EmailAddress::new("  Saroj@Gmail.com ").expect("valid email");
/// assert_eq!(email.as_str(), "saroj@gmail.com");
/// assert!(EmailAddress::new("not-an-email").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and normalise an email address.
    pub fn new(email: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let normalised = email.as_ref().trim().to_lowercase();
        if normalised.is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        if normalised.chars().count() > EMAIL_MAX {
            return Err(UserValidationError::EmailTooLong { max: EMAIL_MAX });
        }

        let mut parts = normalised.split('@');
        let local = parts.next().unwrap_or_default();
        let domain = parts.next().unwrap_or_default();
        let valid = !local.is_empty()
            && !domain.is_empty()
            && parts.next().is_none()
            && !normalised.chars().any(char::is_whitespace);
        if !valid {
            return Err(UserValidationError::InvalidEmail { value: normalised });
        }

        Ok(Self(normalised))
    }

    /// Borrow the normalised address.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human readable display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    /// Validate and construct a [`DisplayName`].
    pub fn new(display_name: impl Into<String>) -> Result<Self, UserValidationError> {
        let display_name = display_name.into();
        if display_name.trim().is_empty() {
            return Err(UserValidationError::EmptyDisplayName);
        }
        if display_name.chars().count() > DISPLAY_NAME_MAX {
            return Err(UserValidationError::DisplayNameTooLong {
                max: DISPLAY_NAME_MAX,
            });
        }
        Ok(Self(display_name))
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Role tag stored with each user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserRole {
    /// Enrols in courses.
    Student,
    /// Creates and owns courses.
    Instructor,
    /// Operates the platform.
    Admin,
}

impl UserRole {
    /// Lowercase tag persisted in the store.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Instructor => "instructor",
            Self::Admin => "admin",
        }
    }
}

impl FromStr for UserRole {
    type Err = UserValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "student" => Ok(Self::Student),
            "instructor" => Ok(Self::Instructor),
            "admin" => Ok(Self::Admin),
            other => Err(UserValidationError::UnknownRole {
                value: other.to_owned(),
            }),
        }
    }
}

/// One-way credential digest produced by a
/// [`PasswordHasher`](crate::domain::ports::PasswordHasher).
///
/// The digest is never printed; `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap a digest produced by a hashing adapter.
    pub fn new(digest: impl Into<String>) -> Self {
        Self(digest.into())
    }

    /// Borrow the encoded digest.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

/// A stored user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    email: EmailAddress,
    display_name: DisplayName,
    role: UserRole,
    photo_url: String,
}

impl User {
    /// Assemble a user from validated parts.
    pub fn new(
        id: UserId,
        email: EmailAddress,
        display_name: DisplayName,
        role: UserRole,
        photo_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            email,
            display_name,
            role,
            photo_url: photo_url.into(),
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Identifying email.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Display name.
    pub fn display_name(&self) -> &DisplayName {
        &self.display_name
    }

    /// Role tag.
    pub fn role(&self) -> UserRole {
        self.role
    }

    /// Profile image reference.
    pub fn photo_url(&self) -> &str {
        &self.photo_url
    }
}

/// A user waiting to be created; the store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Identifying email; must be unique in the store.
    pub email: EmailAddress,
    /// Display name.
    pub display_name: DisplayName,
    /// Hashed credential.
    pub password_hash: PasswordHash,
    /// Role tag.
    pub role: UserRole,
    /// Profile image reference.
    pub photo_url: String,
}
