//! Builders selecting the user storage adapter from settings.

use std::sync::Arc;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr};
use tracing::{info, warn};

use user_directory::domain::ports::UserRepository;
use user_directory::domain::{UserRegistrationService, UsersQueryService};
use user_directory::inbound::http::state::HttpState;
use user_directory::outbound::memory::InMemoryUserRepository;
use user_directory::outbound::persistence::{
    DbPool, DieselUserRepository, PoolConfig, run_migrations,
};
use user_directory::seeding::seed_users_from_file;
use user_directory::settings::ServerSettings;

/// Build the repository: PostgreSQL when a database URL is configured,
/// otherwise an empty in-memory store.
///
/// # Errors
/// Fails when migrations cannot be applied or the pool cannot be built.
pub async fn build_user_repository(settings: &ServerSettings) -> Result<Arc<dyn UserRepository>> {
    match settings.database_url() {
        Some(url) => {
            run_migrations(url)
                .await
                .wrap_err("failed to apply database migrations")?;
            let pool = DbPool::new(PoolConfig::new(url).with_max_size(settings.pool_max_size()))
                .await
                .wrap_err("failed to build database pool")?;
            Ok(Arc::new(DieselUserRepository::new(pool)))
        }
        None => {
            warn!("no database URL configured; users are kept in memory");
            Ok(Arc::new(InMemoryUserRepository::default()))
        }
    }
}

/// Register users from the configured seed file, if any.
///
/// # Errors
/// Fails when the seed file cannot be read or parsed.
pub async fn seed_if_configured(
    settings: &ServerSettings,
    repository: Arc<dyn UserRepository>,
) -> Result<()> {
    let Some(path) = settings.seed_path() else {
        return Ok(());
    };
    let service = UserRegistrationService::new(repository);
    let report = seed_users_from_file(path, &service)
        .await
        .wrap_err("failed to seed users")?;
    info!(
        registered = report.registered,
        rejected = report.rejected,
        path = %path.display(),
        "user seeding finished"
    );
    Ok(())
}

/// Wrap the repository in the query service consumed by HTTP handlers.
pub fn build_http_state(repository: Arc<dyn UserRepository>) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(Arc::new(UsersQueryService::new(repository))))
}
