//! Read-only user directory service.
//!
//! The domain owns the user model and its ports. Inbound adapters expose them
//! over HTTP; outbound adapters store users in PostgreSQL or in memory.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod seeding;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
