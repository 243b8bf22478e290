//! Server-side session store.
//!
//! Maps session IDs (carried by the signed cookie token) to their stored
//! value. Deliberately a typed single-value record rather than an open
//! string-to-string mapping: the service stores exactly one value per
//! session, so the type enforces it.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

/// A single session tracked by the server.
#[derive(Debug, Clone)]
pub struct SessionEntry {
    pub session_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// The stored value. `None` means the session never stored one.
    pub value: Option<String>,
}

/// In-memory session store. Contents live for the process lifetime; the
/// cookie token is the only thing that survives a restart, and it will
/// resolve to an absent entry afterwards.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, SessionEntry>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the session's value, creating the entry if this is the
    /// session's first write. Last write wins.
    pub fn set_value(&self, session_id: &str, value: String) {
        let now = Utc::now();
        let mut sessions = self.sessions.write();
        match sessions.get_mut(session_id) {
            Some(entry) => {
                entry.value = Some(value);
                entry.updated_at = now;
            }
            None => {
                sessions.insert(
                    session_id.to_owned(),
                    SessionEntry {
                        session_id: session_id.to_owned(),
                        created_at: now,
                        updated_at: now,
                        value: Some(value),
                    },
                );
            }
        }
        tracing::debug!(session_id, "session value stored");
    }

    /// The session's stored value, or `None` when nothing was ever stored
    /// (unknown session IDs included).
    pub fn value(&self, session_id: &str) -> Option<String> {
        self.get(session_id).and_then(|entry| entry.value)
    }

    /// Look up a session entry by ID.
    pub fn get(&self, session_id: &str) -> Option<SessionEntry> {
        self.sessions.read().get(session_id).cloned()
    }

    /// Number of sessions currently tracked.
    pub fn session_count(&self) -> usize {
        self.sessions.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_session_has_no_value() {
        let store = SessionStore::new();
        assert_eq!(store.value("nope"), None);
        assert!(store.get("nope").is_none());
    }

    #[test]
    fn first_write_creates_the_entry() {
        let store = SessionStore::new();
        store.set_value("s1", "hello".into());
        assert_eq!(store.value("s1"), Some("hello".into()));
        assert_eq!(store.session_count(), 1);
    }

    #[test]
    fn overwrite_is_last_write_wins() {
        let store = SessionStore::new();
        store.set_value("s1", "v1".into());
        store.set_value("s1", "v2".into());
        assert_eq!(store.value("s1"), Some("v2".into()));
        assert_eq!(store.session_count(), 1);
    }

    #[test]
    fn repeated_writes_of_same_value_keep_one_entry() {
        let store = SessionStore::new();
        store.set_value("s1", "v".into());
        store.set_value("s1", "v".into());
        assert_eq!(store.value("s1"), Some("v".into()));
        assert_eq!(store.session_count(), 1);
    }

    #[test]
    fn sessions_are_isolated() {
        let store = SessionStore::new();
        store.set_value("alice", "a".into());
        store.set_value("bob", "b".into());
        assert_eq!(store.value("alice"), Some("a".into()));
        assert_eq!(store.value("bob"), Some("b".into()));
    }

    #[test]
    fn overwrite_touches_updated_at_but_not_created_at() {
        let store = SessionStore::new();
        store.set_value("s1", "v1".into());
        let before = store.get("s1").unwrap();
        store.set_value("s1", "v2".into());
        let after = store.get("s1").unwrap();
        assert_eq!(before.created_at, after.created_at);
        assert!(after.updated_at >= before.updated_at);
    }
}
