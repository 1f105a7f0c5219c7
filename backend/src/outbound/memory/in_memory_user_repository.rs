//! `UserRepository` backed by a vector in process memory.
//!
//! Records keep insertion order. The lock is never held across an await.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{EmailAddress, User, UserId};

/// In-memory user store enforcing email uniqueness on insert.
///
/// # Examples
/// ```
/// use user_directory::domain::User;
/// use user_directory::domain::ports::UserRepository;
/// use user_directory::outbound::memory::InMemoryUserRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let ann = User::try_from_strings(
///     "3fa85f64-5717-4562-b3fc-2c963f66afa6",
///     "Ann",
///     "ann@example.com",
/// )
/// .expect("valid user");
/// let repository = InMemoryUserRepository::with_users([ann.clone()]);
/// assert_eq!(repository.list_all().await.expect("list"), vec![ann]);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Create a repository pre-populated with `users`.
    ///
    /// The caller is trusted; duplicates are not filtered.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: RwLock::new(users.into_iter().collect()),
        }
    }
}

fn poisoned<T>(_: PoisonError<T>) -> UserPersistenceError {
    UserPersistenceError::connection("in-memory user store lock poisoned")
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.users.read().map_err(poisoned)?.clone())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.iter().find(|user| user.id() == id).cloned())
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<User>, UserPersistenceError> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.iter().find(|user| user.email() == email).cloned())
    }

    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut users = self.users.write().map_err(poisoned)?;
        if users.iter().any(|existing| existing.email() == user.email()) {
            return Err(UserPersistenceError::duplicate_email(user.email().as_ref()));
        }
        if users.iter().any(|existing| existing.id() == user.id()) {
            return Err(UserPersistenceError::query(format!(
                "user {} already exists",
                user.id()
            )));
        }
        users.push(user.clone());
        Ok(())
    }
}
