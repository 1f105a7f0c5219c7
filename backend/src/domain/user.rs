//! User data model and write-time validation rules.
//!
//! A stored [`User`] always carries a non-blank name and a non-blank email.
//! Email uniqueness spans the whole store, so it cannot be checked by the type
//! alone; see [`crate::domain::validate_new_user`].

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Validation errors returned when building user value types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The identifier string was empty.
    #[error("user id must not be empty")]
    EmptyId,
    /// The identifier string was not a lower-case hyphenated UUID.
    #[error("user id must be a canonical UUID")]
    InvalidId,
    /// The name was empty or whitespace.
    #[error("name must not be blank")]
    BlankName,
    /// The email was empty or whitespace.
    #[error("email must not be blank")]
    BlankEmail,
}

/// Stable user identifier assigned by the storage layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid);

impl UserId {
    /// Parse an identifier from its string form.
    ///
    /// # Examples
    /// ```
    /// use user_directory::domain::{UserId, UserValidationError};
    ///
    /// assert!(UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").is_ok());
    /// assert_eq!(UserId::new("999"), Err(UserValidationError::InvalidId));
    /// assert_eq!(
    ///     UserId::new("3FA85F64-5717-4562-B3FC-2C963F66AFA6"),
    ///     Err(UserValidationError::InvalidId),
    /// );
    /// ```
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let raw = id.as_ref();
        if raw.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        let uuid = Uuid::parse_str(raw).map_err(|_| UserValidationError::InvalidId)?;
        // Only the form `Display` produces names a stored user.
        if uuid.hyphenated().to_string() != raw {
            return Err(UserValidationError::InvalidId);
        }
        Ok(Self(uuid))
    }

    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.hyphenated().fmt(f)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

macro_rules! non_blank_text {
    ($(#[$meta:meta])* $name:ident, $blank:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Validate and wrap the value, rejecting blank input.
            pub fn new(value: impl Into<String>) -> Result<Self, UserValidationError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(UserValidationError::$blank);
                }
                Ok(Self(value))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = UserValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

non_blank_text!(
    /// A user's name. Never blank.
    UserName,
    BlankName
);

non_blank_text!(
    /// A user's email address, stored exactly as given.
    ///
    /// Equality is case-sensitive, which is also the uniqueness policy.
    EmailAddress,
    BlankEmail
);

/// Application user.
///
/// ## Invariants
/// - `name` and `email` are non-blank.
/// - `email` is unique across all stored users (enforced at write time).
///
/// Serialises as `{"id": "...", "name": "...", "email": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    id: UserId,
    name: UserName,
    email: EmailAddress,
}

impl User {
    /// Build a user from validated components.
    pub fn new(id: UserId, name: UserName, email: EmailAddress) -> Self {
        Self { id, name, email }
    }

    /// Fallible constructor from raw strings.
    ///
    /// # Examples
    /// ```
    /// use user_directory::domain::User;
    ///
    /// let user = User::try_from_strings(
    ///     "3fa85f64-5717-4562-b3fc-2c963f66afa6",
    ///     "Ann",
    ///     "ann@example.com",
    /// )
    /// .expect("valid user");
    /// assert_eq!(user.name().as_ref(), "Ann");
    /// ```
    pub fn try_from_strings(
        id: impl AsRef<str>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        Ok(Self::new(
            UserId::new(id)?,
            UserName::new(name)?,
            EmailAddress::new(email)?,
        ))
    }

    /// Stable identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Name.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Email address.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct UserDto {
    id: String,
    name: String,
    email: String,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User { id, name, email } = value;
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        Self::try_from_strings(value.id, value.name, value.email)
    }
}

/// A constraint broken by a proposed write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserViolation {
    /// `name` is missing or blank.
    NameBlank,
    /// `email` is missing or blank.
    EmailBlank,
    /// Another stored user already has this email.
    EmailTaken,
}

impl fmt::Display for UserViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NameBlank => "name can't be blank",
            Self::EmailBlank => "email can't be blank",
            Self::EmailTaken => "email has already been taken",
        };
        f.write_str(text)
    }
}

/// Unvalidated input for creating a user.
///
/// The storage layer assigns the identifier, so the draft carries only the
/// writable fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewUser {
    /// Proposed name.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// Proposed email.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
}

/// Treat an explicit `null` like a missing field so presence checks see it.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl NewUser {
    /// Create a draft from raw field values.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Presence checks that need no access to storage.
    ///
    /// # Examples
    /// ```
    /// use user_directory::domain::{NewUser, UserViolation};
    ///
    /// let draft = NewUser::new(" ", "");
    /// assert_eq!(
    ///     draft.presence_violations(),
    ///     vec![UserViolation::NameBlank, UserViolation::EmailBlank],
    /// );
    /// ```
    pub fn presence_violations(&self) -> Vec<UserViolation> {
        let mut violations = Vec::new();
        if self.name.trim().is_empty() {
            violations.push(UserViolation::NameBlank);
        }
        if self.email.trim().is_empty() {
            violations.push(UserViolation::EmailBlank);
        }
        violations
    }

    /// Convert into a [`User`] with the given identifier.
    ///
    /// Fails when a presence constraint is broken; uniqueness is not checked.
    pub fn into_user(self, id: UserId) -> Result<User, UserValidationError> {
        Ok(User::new(id, UserName::new(self.name)?, EmailAddress::new(self.email)?))
    }
}
