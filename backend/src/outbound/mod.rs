//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: PostgreSQL repositories using Diesel
//! - **memory**: in-process repositories for development and tests
//!
//! Adapters translate between domain types and storage representations and
//! contain no business rules.

pub mod memory;
pub mod persistence;
