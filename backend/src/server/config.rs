//! HTTP server configuration object.

use std::net::SocketAddr;

/// Settings consumed by [`super::create_server`].
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self { bind_addr }
    }
}
