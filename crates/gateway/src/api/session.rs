//! Session identity extractor.
//!
//! Reads the session cookie from the request, verifies its signature, and
//! yields the session ID. A missing, malformed, or tampered cookie is never
//! an error: the extractor mints a fresh identity instead. It also carries
//! the `Set-Cookie` value that re-issues the identity, so writing handlers
//! can slide the cookie's Max-Age on every response. The extractor itself
//! never touches the session store — each handler performs exactly one
//! store call.

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{header, HeaderMap};
use std::convert::Infallible;

use sv_domain::config::SessionConfig;

use crate::state::AppState;

/// The caller's session identity, resolved from the cookie (or minted).
pub struct SessionHandle {
    pub session_id: String,
    /// `Set-Cookie` value re-issuing this identity with a fresh Max-Age.
    set_cookie: String,
}

impl SessionHandle {
    /// The `Set-Cookie` header value for responses that persist session
    /// state. Signing is deterministic, so for a request that carried a
    /// valid cookie this is the same token it arrived with.
    pub fn into_set_cookie(self) -> String {
        self.set_cookie
    }
}

#[async_trait]
impl FromRequestParts<AppState> for SessionHandle {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session_cfg = &state.config.session;

        let verified = cookie_value(&parts.headers, &session_cfg.cookie_name)
            .and_then(|token| state.signer.verify(token));

        match verified {
            Some(session_id) => {
                let token = state.signer.token_for(&session_id);
                Ok(Self {
                    set_cookie: cookie_header(session_cfg, &token),
                    session_id,
                })
            }
            None => {
                let minted = state.signer.mint();
                tracing::debug!(
                    session_id = %minted.session_id,
                    "no valid session cookie, minted fresh session"
                );
                Ok(Self {
                    session_id: minted.session_id,
                    set_cookie: cookie_header(session_cfg, &minted.token),
                })
            }
        }
    }
}

/// Render the full `Set-Cookie` value for a session token.
fn cookie_header(cfg: &SessionConfig, token: &str) -> String {
    format!(
        "{}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        cfg.cookie_name, cfg.cookie_max_age_secs,
    )
}

/// Pull the named cookie's value out of the `Cookie` header.
fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';').map(str::trim).find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then_some(value)
    })
}
