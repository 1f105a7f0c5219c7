//! Users API handlers.
//!
//! ```text
//! GET /users
//! GET /users/{id}
//! ```

use actix_web::{get, web};
use tracing::debug;

use crate::domain::ports::USER_NOT_FOUND_MESSAGE;
use crate::domain::{Error, User, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::schemas::UserSchema;
use crate::inbound::http::state::HttpState;

/// List every stored user.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_directory::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = [UserSchema]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users))
}

/// Fetch a single user by identifier.
///
/// Identifiers that are not UUIDs cannot match a stored user, so they
/// answer with the same 404 as an unknown UUID.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "The user", body = UserSchema),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let raw = path.into_inner();
    let id = UserId::new(&raw).map_err(|err| {
        debug!(id = %raw, error = %err, "rejecting malformed user id");
        Error::not_found(USER_NOT_FOUND_MESSAGE)
    })?;
    let user = state.users.find_user(&id).await?;
    Ok(web::Json(user))
}

#[cfg(test)]
mod tests;
