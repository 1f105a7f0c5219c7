//! HTTP adapter mapping for domain errors.
//!
//! Every failure is rendered as `{"error": "<message>"}`, with `details` added
//! when the domain attached any. Internal errors are redacted. The trace
//! identifier travels in the `trace-id` header, never in the body.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message substituted for every internal error.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// JSON body written for failed requests.
///
/// # Examples
/// ```
/// use user_directory::inbound::http::error::ErrorBody;
///
/// let body = ErrorBody::new("User not found");
/// assert_eq!(
///     serde_json::to_string(&body).expect("serialise"),
///     r#"{"error":"User not found"}"#,
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(as = Error)]
pub struct ErrorBody {
    /// Human-readable failure message.
    #[schema(example = "User not found")]
    pub error: String,
    /// Structured context, omitted when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<Value>,
}

impl ErrorBody {
    /// Body carrying only a message.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }
}

impl From<&Error> for ErrorBody {
    fn from(err: &Error) -> Self {
        if matches!(err.code(), ErrorCode::InternalError) {
            return Self::new(INTERNAL_ERROR_MESSAGE);
        }
        Self {
            error: err.message().to_owned(),
            details: err.details().cloned(),
        }
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(ErrorBody::from(self))
    }
}

#[cfg(test)]
mod tests;
