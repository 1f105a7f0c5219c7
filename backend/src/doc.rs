//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the user endpoints, the health probes and the schema
//! wrappers from [`crate::inbound::http::schemas`]. The document backs
//! Swagger UI in debug builds and the `openapi-dump` binary.

use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::schemas::UserSchema;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User directory API",
        description = "Read-only access to stored users, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserSchema, ErrorBody)),
    tags(
        (name = "users", description = "Operations related to users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
