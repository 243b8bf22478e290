//! Startup wiring: signing-secret resolution and shared state construction.

use std::sync::Arc;

use sv_domain::config::Config;
use sv_sessions::{SessionSigner, SessionStore};

use crate::state::AppState;

/// Resolve the session signing secret from the environment variable named
/// by `config.session.secret_env` (read **once at startup**).
///
/// When the env var is unset or empty, a random per-process secret is
/// minted and a warning is logged: every outstanding cookie becomes
/// invalid on restart, which is acceptable for local development only.
pub fn resolve_signing_secret(config: &Config) -> Vec<u8> {
    match std::env::var(&config.session.secret_env) {
        Ok(secret) if !secret.is_empty() => {
            tracing::info!(
                env = %config.session.secret_env,
                "session signing secret loaded from environment"
            );
            secret.into_bytes()
        }
        _ => {
            tracing::warn!(
                env = %config.session.secret_env,
                "signing secret env var not set — using a random per-process \
                 secret; session cookies will not survive a restart"
            );
            // 256 bits of randomness from two UUIDv4s.
            format!(
                "{}{}",
                uuid::Uuid::new_v4().simple(),
                uuid::Uuid::new_v4().simple()
            )
            .into_bytes()
        }
    }
}

/// Build the shared [`AppState`] for the server.
pub fn build_app_state(config: Arc<Config>) -> AppState {
    let secret = resolve_signing_secret(&config);

    AppState {
        config,
        sessions: Arc::new(SessionStore::new()),
        signer: Arc::new(SessionSigner::new(secret)),
    }
}
