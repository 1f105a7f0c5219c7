//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::RunQueryDsl;
use tracing::{debug, warn};

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{EmailAddress, User, UserId};

use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the [`UserRepository`] port.
///
/// Email uniqueness is enforced by the `users_email_key` constraint, which
/// surfaces here as [`UserPersistenceError::DuplicateEmail`].
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    UserPersistenceError::connection(error.message())
}

fn map_diesel_error(error: DieselError) -> UserPersistenceError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::QueryBuilderError(_) => UserPersistenceError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserPersistenceError::connection("database connection error")
        }
        _ => UserPersistenceError::query("database error"),
    }
}

/// Map an insert failure, recognising the email unique constraint.
fn map_insert_error(error: DieselError, email: &str) -> UserPersistenceError {
    if let DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) = &error {
        if info.constraint_name() == Some("users_email_key") {
            return UserPersistenceError::duplicate_email(email);
        }
    }
    map_diesel_error(error)
}

/// Convert a row into a domain user.
///
/// Rows are validated on the way out so a hand-edited table cannot leak a
/// blank name through the API.
fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    let UserRow { id, name, email, .. } = row;
    User::try_from_strings(id.to_string(), name, email).map_err(|err| {
        warn!(user_id = %id, error = %err, "stored user row failed validation");
        UserPersistenceError::query(format!("stored user {id} is invalid: {err}"))
    })
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<UserRow> = users::table
            .select(UserRow::as_select())
            .order(users::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(row_to_user).collect()
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<UserRow> = users::table
            .filter(users::id.eq(id.as_uuid()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_user).transpose()
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<UserRow> = users::table
            .filter(users::email.eq(email.as_ref()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_user).transpose()
    }

    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewUserRow {
            id: *user.id().as_uuid(),
            name: user.name().as_ref(),
            email: user.email().as_ref(),
        };
        diesel::insert_into(users::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(|err| map_insert_error(err, row.email))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Unit coverage for error mapping; database behaviour is exercised by
    //! `tests/diesel_user_repository.rs`.
    use super::*;
    use rstest::rstest;

    #[derive(Debug)]
    struct ConstraintInfo(Option<&'static str>);

    impl diesel::result::DatabaseErrorInformation for ConstraintInfo {
        fn message(&self) -> &str {
            "duplicate key value violates unique constraint"
        }
        fn details(&self) -> Option<&str> {
            None
        }
        fn hint(&self) -> Option<&str> {
            None
        }
        fn table_name(&self) -> Option<&str> {
            Some("users")
        }
        fn column_name(&self) -> Option<&str> {
            None
        }
        fn constraint_name(&self) -> Option<&str> {
            self.0
        }
        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn database_error(kind: DatabaseErrorKind, constraint: Option<&'static str>) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(ConstraintInfo(constraint)))
    }

    #[rstest]
    fn email_unique_violation_maps_to_duplicate_email() {
        let err = map_insert_error(
            database_error(DatabaseErrorKind::UniqueViolation, Some("users_email_key")),
            "ann@example.com",
        );
        assert_eq!(err, UserPersistenceError::duplicate_email("ann@example.com"));
    }

    #[rstest]
    fn other_unique_violation_maps_to_query_error() {
        let err = map_insert_error(
            database_error(DatabaseErrorKind::UniqueViolation, Some("users_pkey")),
            "ann@example.com",
        );
        assert!(matches!(err, UserPersistenceError::Query { .. }));
    }

    #[rstest]
    fn closed_connection_maps_to_connection_error() {
        let err = map_diesel_error(database_error(DatabaseErrorKind::ClosedConnection, None));
        assert!(matches!(err, UserPersistenceError::Connection { .. }));
    }

    #[rstest]
    fn pool_errors_map_to_connection_error() {
        let err = map_pool_error(PoolError::Checkout {
            message: "timed out".to_owned(),
        });
        assert_eq!(err, UserPersistenceError::connection("timed out"));
    }
}
