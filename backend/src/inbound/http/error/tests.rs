//! Tests for mapping domain errors onto HTTP responses.

use super::*;
use crate::domain::TraceId;
use actix_web::body::to_bytes;
use rstest::rstest;
use serde_json::json;

async fn body_of(error: &Error) -> Value {
    let bytes = to_bytes(error.error_response().into_body())
        .await
        .expect("response body to bytes");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("User not found"), StatusCode::NOT_FOUND)]
#[case(Error::conflict("email has already been taken"), StatusCode::CONFLICT)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_follows_error_code(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(error.status_code(), expected);
}

#[rstest]
#[actix_web::test]
async fn not_found_body_is_exactly_the_error_message() {
    let body = body_of(&Error::not_found("User not found")).await;
    assert_eq!(body, json!({ "error": "User not found" }));
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted() {
    let error = Error::internal("connection refused on 10.0.0.3")
        .with_details(json!({ "secret": "x" }));

    let body = body_of(&error).await;
    assert_eq!(body, json!({ "error": INTERNAL_ERROR_MESSAGE }));
}

#[rstest]
#[actix_web::test]
async fn details_are_kept_for_client_errors() {
    let error = Error::invalid_request("name can't be blank")
        .with_details(json!({ "violations": ["name_blank"] }));

    let body = body_of(&error).await;
    assert_eq!(
        body,
        json!({ "error": "name can't be blank", "details": { "violations": ["name_blank"] } })
    );
}

#[rstest]
#[actix_web::test]
async fn trace_id_is_sent_as_header_only() {
    let trace_id: TraceId = "00000000-0000-0000-0000-000000000000"
        .parse()
        .expect("valid UUID literal");
    let error = TraceId::scope(trace_id, async { Error::not_found("User not found") }).await;

    let response = error.error_response();
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    assert_eq!(header, Some(trace_id.to_string()));

    let body = body_of(&error).await;
    assert!(body.get("traceId").is_none());
}
