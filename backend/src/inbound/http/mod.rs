//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod users;

pub use error::ApiResult;

/// Register the user routes.
///
/// Health probes are registered separately because they need
/// [`health::HealthState`] rather than [`state::HttpState`].
pub fn configure_users(cfg: &mut web::ServiceConfig) {
    cfg.service(users::list_users).service(users::get_user);
}
