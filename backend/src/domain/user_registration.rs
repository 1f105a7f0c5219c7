//! Validated write path for users.
//!
//! HTTP exposes no write endpoint; the only caller today is startup seeding.
//! Every insert goes through [`validate_new_user`] first.

use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::users_query_service::map_persistence_error;
use crate::domain::{EmailAddress, Error, NewUser, User, UserId, UserViolation};

/// Check every write-time constraint for `draft`.
///
/// Returns the broken constraints in declaration order (name, then email
/// presence, then email uniqueness). Uniqueness is only checked when the email
/// is present. An empty list means the draft may be inserted.
///
/// # Errors
/// Fails only when the uniqueness lookup itself fails.
pub async fn validate_new_user(
    draft: &NewUser,
    repository: &dyn UserRepository,
) -> Result<Vec<UserViolation>, UserPersistenceError> {
    let mut violations = draft.presence_violations();
    if let Ok(email) = EmailAddress::new(draft.email.as_str()) {
        if repository.find_by_email(&email).await?.is_some() {
            violations.push(UserViolation::EmailTaken);
        }
    }
    Ok(violations)
}

fn rejection(violations: &[UserViolation]) -> Error {
    let summary = violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let details = json!({ "violations": violations });
    let error = if violations == [UserViolation::EmailTaken] {
        Error::conflict(summary)
    } else {
        Error::invalid_request(summary)
    };
    error.with_details(details)
}

/// Creates users after validating them.
#[derive(Clone)]
pub struct UserRegistrationService {
    repository: Arc<dyn UserRepository>,
}

impl UserRegistrationService {
    /// Create a registration service writing to `repository`.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Validate `draft`, assign an identifier and persist it.
    ///
    /// # Errors
    /// - [`crate::domain::ErrorCode::InvalidRequest`] when a presence check
    ///   fails; `details.violations` lists every broken constraint.
    /// - [`crate::domain::ErrorCode::Conflict`] when the email is the only
    ///   problem, including when storage reports the clash itself.
    /// - [`crate::domain::ErrorCode::InternalError`] for storage failures.
    pub async fn register(&self, draft: NewUser) -> Result<User, Error> {
        let violations = validate_new_user(&draft, self.repository.as_ref())
            .await
            .map_err(map_persistence_error)?;
        if !violations.is_empty() {
            debug!(?violations, "user registration rejected");
            return Err(rejection(&violations));
        }

        let user = draft
            .into_user(UserId::random())
            .map_err(|err| Error::internal(format!("validated draft failed to convert: {err}")))?;
        match self.repository.insert(&user).await {
            Ok(()) => Ok(user),
            Err(UserPersistenceError::DuplicateEmail { .. }) => {
                Err(rejection(&[UserViolation::EmailTaken]))
            }
            Err(other) => Err(map_persistence_error(other)),
        }
    }
}
