use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only after startup.
    pub catalog: Arc<Catalog>,
    /// Pluggable session backend. Default: InMemorySessionStore.
    pub sessions: Arc<dyn SessionStore>,
}
