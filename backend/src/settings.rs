//! Server configuration loaded via OrthoConfig.
//!
//! Values layer CLI flags over `USERS_*` environment variables over an
//! optional configuration file. Every field is optional; the accessors
//! supply the defaults.

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::DEFAULT_MAX_SIZE;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Errors raised while resolving the listen address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid listen host {host:?}: {message}")]
    InvalidHost { host: String, message: String },
}

/// Runtime settings for the users server.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERS")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// PostgreSQL URL. Without one the server keeps users in memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
    /// JSON file of `{"name", "email"}` entries registered at startup.
    pub seed_path: Option<PathBuf>,
}

impl ServerSettings {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref().filter(|url| !url.trim().is_empty())
    }

    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_MAX_SIZE)
    }

    pub fn seed_path(&self) -> Option<&Path> {
        self.seed_path.as_deref()
    }

    /// Resolve the socket address to listen on.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidHost`] when `host` is not an IP
    /// address.
    ///
    /// # Examples
    /// ```
    /// use user_directory::settings::ServerSettings;
    ///
    /// let settings = ServerSettings {
    ///     host: Some("127.0.0.1".into()),
    ///     port: Some(3000),
    ///     ..ServerSettings::default()
    /// };
    /// assert_eq!(
    ///     settings.bind_addr().expect("valid address").to_string(),
    ///     "127.0.0.1:3000"
    /// );
    /// ```
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host();
        let ip: IpAddr = host.parse().map_err(|err: std::net::AddrParseError| {
            SettingsError::InvalidHost {
                host: host.to_owned(),
                message: err.to_string(),
            }
        })?;
        Ok(SocketAddr::new(ip, self.port()))
    }
}
