//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` and depend only on
//! domain ports, so they stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::UsersQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersQuery>,
}

impl HttpState {
    /// Construct state from the user query port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use user_directory::domain::UsersQueryService;
    /// use user_directory::inbound::http::state::HttpState;
    /// use user_directory::outbound::memory::InMemoryUserRepository;
    ///
    /// let repository = Arc::new(InMemoryUserRepository::default());
    /// let state = HttpState::new(Arc::new(UsersQueryService::new(repository)));
    /// # let _ = state;
    /// ```
    pub fn new(users: Arc<dyn UsersQuery>) -> Self {
        Self { users }
    }
}
