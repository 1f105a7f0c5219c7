//! Tests for users API handlers.

use super::*;
use crate::domain::ports::{MockUsersQuery, UsersQuery};
use crate::domain::{TRACE_ID_HEADER, UsersQueryService};
use crate::middleware::Trace;
use crate::outbound::memory::InMemoryUserRepository;
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::sync::Arc;

const ANN_ID: &str = "11111111-1111-1111-1111-111111111111";
const BOB_ID: &str = "22222222-2222-2222-2222-222222222222";

#[fixture]
fn users() -> Vec<User> {
    vec![
        User::try_from_strings(ANN_ID, "Ann", "ann@example.com").expect("valid user"),
        User::try_from_strings(BOB_ID, "Bob", "bob@example.com").expect("valid user"),
    ]
}

fn in_memory(users: Vec<User>) -> Arc<dyn UsersQuery> {
    Arc::new(UsersQueryService::new(Arc::new(
        InMemoryUserRepository::with_users(users),
    )))
}

async fn fetch(query: Arc<dyn UsersQuery>, uri: &str) -> (StatusCode, Option<String>, Value) {
    let app = actix_test::init_service(
        App::new()
            .wrap(Trace)
            .app_data(web::Data::new(HttpState::new(query)))
            .service(list_users)
            .service(get_user),
    )
    .await;
    let response =
        actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await;
    let status = response.status();
    let trace_id = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body = actix_test::read_body(response).await;
    let value = serde_json::from_slice(&body).expect("JSON body");
    (status, trace_id, value)
}

#[rstest]
#[actix_web::test]
async fn list_is_empty_without_users() {
    let (status, _, body) = fetch(in_memory(Vec::new()), "/users").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[rstest]
#[actix_web::test]
async fn list_returns_every_user_with_exact_fields(users: Vec<User>) {
    let (status, _, body) = fetch(in_memory(users), "/users").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "id": ANN_ID, "name": "Ann", "email": "ann@example.com" },
            { "id": BOB_ID, "name": "Bob", "email": "bob@example.com" }
        ])
    );
}

#[rstest]
#[actix_web::test]
async fn get_returns_the_matching_user(users: Vec<User>) {
    let (status, _, body) = fetch(in_memory(users), &format!("/users/{BOB_ID}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": BOB_ID, "name": "Bob", "email": "bob@example.com" })
    );
}

#[rstest]
#[case("33333333-3333-3333-3333-333333333333")]
#[case("999")]
#[case("not-a-uuid")]
#[case("11111111111111111111111111111111")]
#[actix_web::test]
async fn unknown_or_malformed_ids_are_not_found(users: Vec<User>, #[case] id: &str) {
    let (status, trace_id, body) = fetch(in_memory(users), &format!("/users/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "User not found" }));
    assert!(trace_id.is_some());
}

#[rstest]
#[actix_web::test]
async fn storage_failures_are_redacted() {
    let mut query = MockUsersQuery::new();
    query
        .expect_list_users()
        .times(1)
        .return_once(|| Err(Error::internal("connection refused on db:5432")));

    let (status, trace_id, body) = fetch(Arc::new(query), "/users").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal server error" }));
    assert!(trace_id.is_some());
}

#[rstest]
#[actix_web::test]
async fn find_is_called_with_the_parsed_id() {
    let expected = UserId::new(ANN_ID).expect("valid id");
    let mut query = MockUsersQuery::new();
    query
        .expect_find_user()
        .withf(move |id| *id == expected)
        .times(1)
        .return_once(|_| Err(Error::not_found(USER_NOT_FOUND_MESSAGE)));

    let (status, _, _) = fetch(Arc::new(query), &format!("/users/{ANN_ID}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn malformed_ids_never_reach_the_query_port() {
    let mut query = MockUsersQuery::new();
    query.expect_find_user().never();

    let (status, _, body) = fetch(Arc::new(query), "/users/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "User not found" }));
}
