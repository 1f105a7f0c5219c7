//! Driven port for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{EmailAddress, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// Storage refused the write because the email is already stored.
        DuplicateEmail { email: String } => "email already stored: {email}",
    }
}

/// Storage for [`User`] records.
///
/// Adapters must enforce email uniqueness on [`UserRepository::insert`] even
/// though callers validate beforehand; concurrent writers can race between
/// the check and the insert.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return every stored user.
    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch a user by exact, case-sensitive email.
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Persist a new user.
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError>;
}
