//! Backend entry-point: loads settings, prepares storage and serves the API.

mod server;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{
    ServerConfig, build_http_state, build_user_repository, create_server, drain_on,
    seed_if_configured, shutdown_signal,
};
use user_directory::inbound::http::health::HealthState;
use user_directory::settings::ServerSettings;

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load configuration: {err}"))?;
    let bind_addr = settings.bind_addr()?;

    let repository = build_user_repository(&settings).await?;
    seed_if_configured(&settings, repository.clone()).await?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(
        health_state.clone(),
        build_http_state(repository),
        ServerConfig::new(bind_addr),
    )
    .wrap_err_with(|| format!("failed to start server on {bind_addr}"))?;

    drain_on(shutdown_signal(), server.handle(), health_state);

    info!(%bind_addr, "user directory listening");
    server.await?;
    Ok(())
}
