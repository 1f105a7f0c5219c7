//! Domain primitives, ports and services.
//!
//! Purpose: define the strongly typed user entity, its validation rules and
//! the use-cases the inbound adapters call. Nothing here depends on actix-web
//! or Diesel.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - User and its value types, plus [`NewUser`] drafts and [`UserViolation`].
//! - [`UsersQueryService`] for reads and [`UserRegistrationService`] for
//!   validated writes.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
mod user_registration;
mod users_query_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::TraceId;
pub use self::user::{
    EmailAddress, NewUser, User, UserId, UserName, UserValidationError, UserViolation,
};
pub use self::user_registration::{UserRegistrationService, validate_new_user};
pub use self::users_query_service::UsersQueryService;

/// HTTP header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
