//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Async pooling**: connections come from a bb8 pool through
//!   `diesel-async`.
//! - **Typed errors**: every Diesel or pool failure becomes a
//!   [`crate::domain::ports::UserPersistenceError`].
//!
//! # Example
//!
//! ```ignore
//! use user_directory::outbound::persistence::{
//!     DbPool, DieselUserRepository, PoolConfig, run_migrations,
//! };
//!
//! run_migrations("postgres://localhost/users").await?;
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/users")).await?;
//! let repo = DieselUserRepository::new(pool);
//! ```

mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DEFAULT_MAX_SIZE, DbPool, PoolConfig, PoolError};
