//! PostgreSQL-backed `UserRepository` adapter.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{SeedPersistenceError, UserRepository};
use crate::domain::{DisplayName, EmailAddress, NewUser, User, UserId, UserRole};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewUserRow, UserRow};
use super::pool::DbPool;
use super::schema::users;

diesel::define_sql_function! {
    /// SQL `lower(text)`, matching the `users_email_key` expression index.
    fn lower(value: diesel::sql_types::Text) -> diesel::sql_types::Text;
}

/// Diesel-backed implementation of the user port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use seeder::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
    ///
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost/courses")).await?;
    /// let repository = DieselUserRepository::new(pool);
    /// # let _ = repository;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Convert a database row into a validated domain user.
fn row_to_user(row: UserRow) -> Result<User, SeedPersistenceError> {
    let UserRow {
        id,
        email,
        display_name,
        role,
        photo_url,
    } = row;
    let invalid = |err: crate::domain::UserValidationError| {
        SeedPersistenceError::query(format!("stored user {id} is invalid: {err}"))
    };
    Ok(User::new(
        UserId::from_uuid(id),
        EmailAddress::new(email).map_err(invalid)?,
        DisplayName::new(display_name).map_err(invalid)?,
        role.parse::<UserRole>().map_err(invalid)?,
        photo_url,
    ))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<User>, SeedPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = users::table
            .filter(lower(users::email).eq(email.as_str()))
            .select(UserRow::as_select())
            .first::<UserRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_user).transpose()
    }

    async fn create(&self, user: NewUser) -> Result<User, SeedPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let id = Uuid::new_v4();
        let new_row = NewUserRow {
            id,
            email: user.email.as_str(),
            display_name: user.display_name.as_ref(),
            password_hash: user.password_hash.as_str(),
            role: user.role.as_str(),
            photo_url: &user.photo_url,
        };
        diesel::insert_into(users::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(User::new(
            UserId::from_uuid(id),
            user.email,
            user.display_name,
            user.role,
            user.photo_url,
        ))
    }
}
