//! Session management for SessionVault.
//!
//! Two pieces: the [`SessionSigner`], which mints and verifies the signed
//! cookie tokens that identify a client, and the [`SessionStore`], the
//! server-side mapping from session ID to the stored value. Handlers talk
//! to the store; the signer lives at the HTTP boundary.

pub mod store;
pub mod token;

pub use store::{SessionEntry, SessionStore};
pub use token::{MintedSession, SessionSigner};
