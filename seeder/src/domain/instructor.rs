//! Find-or-create resolution of the seeded instructor.
//!
//! The instructor is keyed by email. An existing record is reused untouched:
//! its display name, avatar, and credential are never rewritten, and the
//! password is only hashed when a new record must be created.

use std::fmt;
use std::sync::Arc;

use course_fixtures::InstructorDefinition;
use thiserror::Error;
use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::domain::ports::{
    FailureKind, PasswordHashError, PasswordHasher, SeedPersistenceError, UserRepository,
};
use crate::domain::{DisplayName, EmailAddress, NewUser, UserId, UserRole, UserValidationError};

/// Validated identity used to find or create the instructor.
#[derive(Clone)]
pub struct InstructorProfile {
    email: EmailAddress,
    display_name: DisplayName,
    password: Zeroizing<String>,
    photo_url: String,
}

impl InstructorProfile {
    /// Assemble a profile from validated parts.
    pub fn new(
        email: EmailAddress,
        display_name: DisplayName,
        password: impl Into<String>,
        photo_url: impl Into<String>,
    ) -> Self {
        Self {
            email,
            display_name,
            password: Zeroizing::new(password.into()),
            photo_url: photo_url.into(),
        }
    }

    /// Validate a fixture instructor definition.
    ///
    /// # Errors
    ///
    /// Returns [`UserValidationError`] when the email or name is malformed.
    pub fn from_definition(definition: &InstructorDefinition) -> Result<Self, UserValidationError> {
        Ok(Self::new(
            EmailAddress::new(definition.email())?,
            DisplayName::new(definition.name())?,
            definition.password(),
            definition.photo_url(),
        ))
    }

    /// Identifying email.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Display name used when creating the record.
    pub fn display_name(&self) -> &DisplayName {
        &self.display_name
    }

    /// Avatar used when creating the record.
    pub fn photo_url(&self) -> &str {
        &self.photo_url
    }
}

impl fmt::Debug for InstructorProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstructorProfile")
            .field("email", &self.email)
            .field("display_name", &self.display_name)
            .field("password", &"<redacted>")
            .field("photo_url", &self.photo_url)
            .finish()
    }
}

/// Outcome of instructor resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInstructor {
    /// Identifier to use as the course creator.
    pub id: UserId,
    /// Display name as stored.
    pub display_name: DisplayName,
    /// Identifying email.
    pub email: EmailAddress,
    /// `true` when this call created the record.
    pub created: bool,
}

/// Errors raised while resolving the instructor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstructorResolutionError {
    /// The lookup by email failed.
    #[error("failed to look up instructor {email}: {source}")]
    Lookup {
        /// Email being resolved.
        email: EmailAddress,
        /// Underlying store error.
        #[source]
        source: SeedPersistenceError,
    },
    /// The credential could not be hashed.
    #[error("failed to hash instructor credential: {0}")]
    Hashing(#[from] PasswordHashError),
    /// The record could not be created.
    #[error("failed to create instructor {email}: {source}")]
    Create {
        /// Email being resolved.
        email: EmailAddress,
        /// Underlying store error.
        #[source]
        source: SeedPersistenceError,
    },
}

impl InstructorResolutionError {
    /// Classify this error.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Lookup { source, .. } | Self::Create { source, .. } => source.kind(),
            Self::Hashing(_) => FailureKind::Unknown,
        }
    }
}

/// Finds the instructor by email or creates it.
///
/// Concurrent resolvers are not coordinated: the loser of a creation race
/// receives [`SeedPersistenceError::UniqueViolation`] from the store and the
/// error is returned as is.
pub struct InstructorResolver<U, H> {
    users: Arc<U>,
    hasher: Arc<H>,
}

impl<U, H> InstructorResolver<U, H> {
    /// Create a resolver over the given user store and hasher.
    pub fn new(users: Arc<U>, hasher: Arc<H>) -> Self {
        Self { users, hasher }
    }
}

impl<U, H> Clone for InstructorResolver<U, H> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            hasher: Arc::clone(&self.hasher),
        }
    }
}

impl<U, H> InstructorResolver<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    /// Return the instructor for `profile`, creating it if absent.
    ///
    /// # Errors
    ///
    /// Returns [`InstructorResolutionError`] when the lookup, hashing, or
    /// creation fails.
    pub async fn resolve(
        &self,
        profile: &InstructorProfile,
    ) -> Result<ResolvedInstructor, InstructorResolutionError> {
        let email = profile.email();
        let existing = self.users.find_by_email(email).await.map_err(|source| {
            InstructorResolutionError::Lookup {
                email: email.clone(),
                source,
            }
        })?;

        if let Some(user) = existing {
            debug!(instructor_email = %email, user_id = %user.id(), "reusing existing instructor");
            return Ok(ResolvedInstructor {
                id: user.id(),
                display_name: user.display_name().clone(),
                email: user.email().clone(),
                created: false,
            });
        }

        let password_hash = self.hasher.hash(&profile.password)?;
        let new_user = NewUser {
            email: email.clone(),
            display_name: profile.display_name().clone(),
            password_hash,
            role: UserRole::Instructor,
            photo_url: profile.photo_url().to_owned(),
        };
        let user = self.users.create(new_user).await.map_err(|source| {
            InstructorResolutionError::Create {
                email: email.clone(),
                source,
            }
        })?;

        info!(instructor_email = %email, user_id = %user.id(), "created instructor");
        Ok(ResolvedInstructor {
            id: user.id(),
            display_name: user.display_name().clone(),
            email: user.email().clone(),
            created: true,
        })
    }
}
