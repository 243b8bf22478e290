use std::sync::Arc;

use sv_domain::config::Config;
use sv_sessions::{SessionSigner, SessionStore};

/// Shared application state passed to all API handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Server-side session mapping (session ID → stored value).
    pub sessions: Arc<SessionStore>,
    /// Mints/verifies the signed cookie tokens (secret resolved at startup).
    pub signer: Arc<SessionSigner>,
}
