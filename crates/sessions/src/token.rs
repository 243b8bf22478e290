//! Signed session tokens.
//!
//! A token is `<session-id>.<signature>` where the session ID is a UUIDv4
//! and the signature is the hex HMAC-SHA256 of the ID bytes under the
//! server's signing secret. The token is opaque to the client; anything
//! that fails verification is treated as "no session" so a tampered or
//! garbage cookie silently falls back to a fresh session.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// A freshly minted session identity: the store key plus the cookie value
/// that carries it back to the client.
#[derive(Debug, Clone)]
pub struct MintedSession {
    pub session_id: String,
    pub token: String,
}

/// Mints and verifies signed session tokens.
pub struct SessionSigner {
    secret: Vec<u8>,
}

impl SessionSigner {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Mint a new session identity with a random ID.
    pub fn mint(&self) -> MintedSession {
        let session_id = Uuid::new_v4().to_string();
        let token = self.token_for(&session_id);
        MintedSession { session_id, token }
    }

    /// The signed cookie token for an existing session ID. Signing is
    /// deterministic, so re-issuing a cookie yields the same token.
    pub fn token_for(&self, session_id: &str) -> String {
        format!("{session_id}.{}", self.sign(session_id))
    }

    /// Verify a token and return the session ID it carries.
    ///
    /// Returns `None` for malformed tokens and bad signatures alike; the
    /// caller cannot distinguish the two, and does not need to.
    pub fn verify(&self, token: &str) -> Option<String> {
        let (session_id, sig_hex) = token.split_once('.')?;
        if session_id.is_empty() {
            return None;
        }

        let expected = self.sign(session_id);

        // Constant-time comparison to prevent timing attacks.
        if expected.as_bytes().ct_eq(sig_hex.as_bytes()).unwrap_u8() != 1 {
            return None;
        }

        Some(session_id.to_owned())
    }

    fn sign(&self, session_id: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC accepts any key length");
        mac.update(session_id.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}
