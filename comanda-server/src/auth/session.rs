//! Session store
//!
//! Opaque `sess-<uuid>` tokens mapped to [`AuthSession`] state in a
//! concurrent map. Expired sessions are purged lazily on lookup. Sessions
//! live for the process lifetime only - a restart logs everyone out, which
//! matches the platform's volatile storage model.

use dashmap::DashMap;
use shared::auth::AuthSession;
use shared::util::{now, prefixed_id};

/// Outcome of a session lookup
#[derive(Debug, Clone)]
pub enum SessionLookup {
    Valid(AuthSession),
    Expired,
    Missing,
}

pub struct SessionStore {
    sessions: DashMap<String, AuthSession>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Store a session and return its opaque token
    pub fn insert(&self, session: AuthSession) -> String {
        let token = prefixed_id("sess");
        self.sessions.insert(token.clone(), session);
        token
    }

    /// Look up a token, purging it when expired
    pub fn lookup(&self, token: &str) -> SessionLookup {
        let expired = match self.sessions.get(token) {
            Some(entry) if !entry.value().is_expired(now()) => {
                return SessionLookup::Valid(entry.value().clone());
            }
            Some(_) => true,
            None => false,
        };
        if expired {
            self.sessions.remove(token);
            SessionLookup::Expired
        } else {
            SessionLookup::Missing
        }
    }

    /// Invalidate a token (logout); unknown tokens are ignored
    pub fn remove(&self, token: &str) {
        self.sessions.remove(token);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use shared::auth::UserRole;

    fn session(ttl_minutes: i64) -> AuthSession {
        let created_at = now();
        AuthSession {
            user_id: "user-1".into(),
            email: "m@x.com".into(),
            name: "Test".into(),
            role: UserRole::Manager,
            organization_id: Some("bella-vista".into()),
            created_at,
            expires_at: created_at + Duration::minutes(ttl_minutes),
        }
    }

    #[test]
    fn test_insert_and_lookup() {
        let store = SessionStore::new();
        let token = store.insert(session(60));
        assert!(token.starts_with("sess-"));
        assert!(matches!(store.lookup(&token), SessionLookup::Valid(_)));
    }

    #[test]
    fn test_missing_token() {
        let store = SessionStore::new();
        assert!(matches!(store.lookup("sess-ghost"), SessionLookup::Missing));
    }

    #[test]
    fn test_expired_purged() {
        let store = SessionStore::new();
        let token = store.insert(session(-1));
        assert!(matches!(store.lookup(&token), SessionLookup::Expired));
        // Purged on first lookup; afterwards it reads as missing
        assert!(matches!(store.lookup(&token), SessionLookup::Missing));
    }

    #[test]
    fn test_remove() {
        let store = SessionStore::new();
        let token = store.insert(session(60));
        store.remove(&token);
        assert!(matches!(store.lookup(&token), SessionLookup::Missing));
    }
}
