//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
mod metrics;
mod shutdown;
mod state_builders;

pub use config::ServerConfig;
pub use shutdown::{drain_on, shutdown_signal};
pub use state_builders::{build_http_state, build_user_repository, seed_if_configured};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use user_directory::Trace;
#[cfg(debug_assertions)]
use user_directory::doc::ApiDoc;
use user_directory::inbound::http::configure_users;
use user_directory::inbound::http::health::{HealthState, live, ready};
use user_directory::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure_users)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server.
///
/// Readiness flips once the listener is bound. Signal handling is left to
/// [`drain_on`] so liveness can fail before the drain starts.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket or registering
/// metrics fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let ServerConfig { bind_addr } = config;

    #[cfg(feature = "metrics")]
    let prometheus = metrics::build_metrics()?;

    let server = HttpServer::new(move || {
        let app = build_app(server_health_state.clone(), http_state.clone());

        #[cfg(feature = "metrics")]
        let app = app.wrap(prometheus.clone());

        app
    })
    .disable_signals()
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
