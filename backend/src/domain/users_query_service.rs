//! Repository-backed implementation of the [`UsersQuery`] port.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{
    USER_NOT_FOUND_MESSAGE, UserPersistenceError, UserRepository, UsersQuery,
};
use crate::domain::{Error, User, UserId};

/// Reads users straight from a [`UserRepository`].
#[derive(Clone)]
pub struct UsersQueryService {
    repository: Arc<dyn UserRepository>,
}

impl UsersQueryService {
    /// Create a query service over `repository`.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

/// Map persistence failures onto generic internal errors.
///
/// Only not-found is modelled for reads; every storage failure is a server
/// error, and the detail stays in the logs.
pub(crate) fn map_persistence_error(error: UserPersistenceError) -> Error {
    error!(%error, "user repository operation failed");
    Error::internal(error.to_string())
}

#[async_trait]
impl UsersQuery for UsersQueryService {
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.repository.list_all().await.map_err(map_persistence_error)
    }

    async fn find_user(&self, id: &UserId) -> Result<User, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND_MESSAGE))
    }
}
