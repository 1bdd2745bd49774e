//! Port abstraction for user lookup and creation.

use async_trait::async_trait;

use crate::domain::{EmailAddress, NewUser, User};

use super::SeedPersistenceError;

/// Port for the user collection.
///
/// Implementations must enforce uniqueness of the email key and report a
/// duplicate insert as [`SeedPersistenceError::UniqueViolation`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by normalised email.
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<User>, SeedPersistenceError>;

    /// Create a user, returning the stored record with its new identifier.
    async fn create(&self, user: NewUser) -> Result<User, SeedPersistenceError>;
}
