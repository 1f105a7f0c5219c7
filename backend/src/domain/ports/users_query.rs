//! Driving port for user read use-cases.
//!
//! HTTP handlers call this port rather than a repository so they stay free of
//! persistence error handling. The production implementation is
//! [`crate::domain::UsersQueryService`].

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Message returned when a lookup by identifier matches nothing.
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

/// Domain use-case port for reading users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return every stored user.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// Return the user with `id`.
    ///
    /// # Errors
    /// Returns an [`crate::domain::ErrorCode::NotFound`] error carrying
    /// [`USER_NOT_FOUND_MESSAGE`] when no user matches.
    async fn find_user(&self, id: &UserId) -> Result<User, Error>;
}
