//! Mapping from pool and Diesel failures to [`SeedPersistenceError`].

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::SeedPersistenceError;

use super::pool::PoolError;

/// Map pool failures to connection errors.
pub(crate) fn map_pool_error(error: PoolError) -> SeedPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            SeedPersistenceError::connection(message)
        }
    }
}

/// Map Diesel failures to the seeding error taxonomy.
///
/// Unique indexes become `UniqueViolation`; foreign key, check, and not-null
/// constraints become `Validation`.
pub(crate) fn map_diesel_error(error: DieselError) -> SeedPersistenceError {
    let error_message = error.to_string();
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                ?kind,
                message = info.message(),
                constraint = info.constraint_name(),
                "diesel operation failed"
            );
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            error = %error_message,
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => SeedPersistenceError::query("record not found"),
        DieselError::DatabaseError(kind, info) => {
            let message = info
                .constraint_name()
                .map_or_else(|| info.message().to_owned(), str::to_owned);
            match kind {
                DatabaseErrorKind::UniqueViolation => {
                    SeedPersistenceError::unique_violation(message)
                }
                DatabaseErrorKind::ForeignKeyViolation
                | DatabaseErrorKind::CheckViolation
                | DatabaseErrorKind::NotNullViolation => SeedPersistenceError::validation(message),
                DatabaseErrorKind::ClosedConnection => {
                    SeedPersistenceError::connection(info.message().to_owned())
                }
                _ => SeedPersistenceError::query(info.message().to_owned()),
            }
        }
        _ => SeedPersistenceError::query(error_message),
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for error classification.
    use diesel::result::DatabaseErrorInformation;
    use rstest::rstest;

    use super::*;

    struct FakeInfo {
        message: &'static str,
        constraint: Option<&'static str>,
    }

    impl DatabaseErrorInformation for FakeInfo {
        fn message(&self) -> &str {
            self.message
        }

        fn details(&self) -> Option<&str> {
            None
        }

        fn hint(&self) -> Option<&str> {
            None
        }

        fn table_name(&self) -> Option<&str> {
            None
        }

        fn column_name(&self) -> Option<&str> {
            None
        }

        fn constraint_name(&self) -> Option<&str> {
            self.constraint
        }

        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn database_error(
        kind: DatabaseErrorKind,
        message: &'static str,
        constraint: Option<&'static str>,
    ) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(FakeInfo { message, constraint }))
    }

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let error = map_pool_error(PoolError::checkout("connection refused"));
        assert_eq!(error, SeedPersistenceError::connection("connection refused"));
    }

    #[rstest]
    fn unique_violation_names_the_constraint() {
        let error = map_diesel_error(database_error(
            DatabaseErrorKind::UniqueViolation,
            "duplicate key value violates unique constraint",
            Some("users_email_key"),
        ));
        assert_eq!(error, SeedPersistenceError::unique_violation("users_email_key"));
    }

    #[rstest]
    #[case(DatabaseErrorKind::ForeignKeyViolation)]
    #[case(DatabaseErrorKind::CheckViolation)]
    #[case(DatabaseErrorKind::NotNullViolation)]
    fn constraint_failures_map_to_validation(#[case] kind: DatabaseErrorKind) {
        let error = map_diesel_error(database_error(kind, "constraint failed", None));
        assert_eq!(error, SeedPersistenceError::validation("constraint failed"));
    }

    #[rstest]
    fn closed_connection_maps_to_connection_error() {
        let error = map_diesel_error(database_error(
            DatabaseErrorKind::ClosedConnection,
            "server closed the connection",
            None,
        ));
        assert_eq!(
            error,
            SeedPersistenceError::connection("server closed the connection")
        );
    }

    #[rstest]
    fn not_found_maps_to_query_error() {
        let error = map_diesel_error(DieselError::NotFound);
        assert_eq!(error, SeedPersistenceError::query("record not found"));
    }
}
