//! Async connection pool for Diesel PostgreSQL connections.
//!
//! Wraps `diesel-async`'s bb8 integration so repositories check out
//! connections without blocking the runtime. Checkout honours the configured
//! timeout, and failures surface as [`PoolError`].

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};

/// Default ceiling on open connections.
pub const DEFAULT_MAX_SIZE: u32 = 10;
/// Default number of idle connections kept warm.
pub const DEFAULT_MIN_IDLE: u32 = 2;
/// Default checkout timeout.
pub const DEFAULT_CONNECTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors raised while building the pool or checking out connections.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// No connection became available.
    #[error("failed to get connection from pool: {message}")]
    Checkout { message: String },

    /// The pool could not be constructed.
    #[error("failed to build connection pool: {message}")]
    Build { message: String },
}

impl PoolError {
    /// The message carried by either variant.
    pub fn message(&self) -> &str {
        match self {
            Self::Checkout { message } | Self::Build { message } => message,
        }
    }
}

/// Connection pool settings.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use user_directory::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("postgres://localhost/users")
///     .with_max_size(4)
///     .with_connection_timeout(Duration::from_secs(5));
/// assert_eq!(config.max_size(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    min_idle: Option<u32>,
    connection_timeout: Duration,
}

impl PoolConfig {
    /// Settings for `database_url` with the crate defaults.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: DEFAULT_MAX_SIZE,
            min_idle: Some(DEFAULT_MIN_IDLE),
            connection_timeout: DEFAULT_CONNECTION_TIMEOUT,
        }
    }

    /// Set the maximum number of connections.
    ///
    /// `min_idle` is clamped so it never exceeds the new maximum.
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self.min_idle = self.min_idle.map(|idle| idle.min(max_size));
        self
    }

    /// Set the number of idle connections to maintain.
    pub fn with_min_idle(mut self, min_idle: Option<u32>) -> Self {
        self.min_idle = min_idle;
        self
    }

    /// Set the checkout timeout.
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Database URL.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Maximum number of connections.
    pub fn max_size(&self) -> u32 {
        self.max_size
    }

    /// Idle connections kept warm.
    pub fn min_idle(&self) -> Option<u32> {
        self.min_idle
    }

    /// Checkout timeout.
    pub fn connection_timeout(&self) -> Duration {
        self.connection_timeout
    }
}

/// Shared pool of `AsyncPgConnection`s.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncPgConnection>,
}

impl DbPool {
    /// Build a pool from `config`.
    ///
    /// # Errors
    /// Returns [`PoolError::Build`] when the pool cannot be constructed.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(config.database_url());
        let inner = Pool::builder()
            .max_size(config.max_size)
            .min_idle(config.min_idle)
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .await
            .map_err(|err| PoolError::Build {
                message: err.to_string(),
            })?;
        Ok(Self { inner })
    }

    /// Check out a connection.
    ///
    /// # Errors
    /// Returns [`PoolError::Checkout`] when none is available in time.
    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.inner.get().await.map_err(|err| PoolError::Checkout {
            message: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_apply() {
        let config = PoolConfig::new("postgres://localhost/users");
        assert_eq!(config.database_url(), "postgres://localhost/users");
        assert_eq!(config.max_size(), DEFAULT_MAX_SIZE);
        assert_eq!(config.min_idle(), Some(DEFAULT_MIN_IDLE));
        assert_eq!(config.connection_timeout(), DEFAULT_CONNECTION_TIMEOUT);
    }

    #[rstest]
    #[case(1, Some(1))]
    #[case(20, Some(DEFAULT_MIN_IDLE))]
    fn shrinking_max_size_clamps_min_idle(#[case] max_size: u32, #[case] expected: Option<u32>) {
        let config = PoolConfig::new("postgres://localhost/users").with_max_size(max_size);
        assert_eq!(config.min_idle(), expected);
    }

    #[rstest]
    fn error_message_is_exposed() {
        let err = PoolError::Checkout {
            message: "timed out".to_owned(),
        };
        assert_eq!(err.message(), "timed out");
        assert!(err.to_string().contains("timed out"));
    }
}
