//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their JSON shape for documentation only.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Stable user identifier.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    /// Non-blank display name.
    #[schema(example = "Ada Lovelace")]
    name: String,
    /// Unique, non-blank email address.
    #[schema(example = "ada@example.com")]
    email: String,
}
