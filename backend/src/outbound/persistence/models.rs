//! Internal Diesel row structs.
//!
//! These never leave the persistence layer; repositories convert them to
//! domain types.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::users;

/// Row read from `users`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[expect(dead_code, reason = "audit column selected for completeness")]
    pub created_at: DateTime<Utc>,
    #[expect(dead_code, reason = "audit column selected for completeness")]
    pub updated_at: DateTime<Utc>,
}

/// Insertable row for `users`; timestamps use column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub email: &'a str,
}
