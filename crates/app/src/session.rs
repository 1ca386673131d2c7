//! Process-wide admin session store.
//!
//! One clearly owned store holds the current [`AdminSession`]; every
//! consumer reads it synchronously and reactive consumers subscribe for
//! change notification. The durable copy of the token is a derived,
//! secondary copy kept in sync by the store - written on set, deleted on
//! clear - and is never the source of truth after initial load.

use thiserror::Error;
use tokio::sync::watch;

use emporium_core::AdminSession;

/// Errors from the durable token storage.
#[derive(Debug, Error)]
pub enum TokenStoreError {
    /// Reading or writing the backing storage failed.
    #[error("token storage error: {0}")]
    Io(#[from] std::io::Error),
}

/// Durable storage seam for the admin token.
///
/// A single key holding the token string; absence means logged out. The
/// session store is the only component that writes through this trait.
pub trait TokenStore: Send + Sync {
    /// Read the persisted token, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn load(&self) -> Result<Option<String>, TokenStoreError>;

    /// Persist the token, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn save(&self, token: &str) -> Result<(), TokenStoreError>;

    /// Remove the persisted token.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn clear(&self) -> Result<(), TokenStoreError>;
}

/// In-memory [`TokenStore`] for tests and embedded use.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: std::sync::Mutex<Option<String>>,
}

impl MemoryTokenStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a token.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self {
            token: std::sync::Mutex::new(Some(token.to_owned())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, TokenStoreError> {
        Ok(self.token.lock().map_or(None, |guard| guard.clone()))
    }

    fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        if let Ok(mut guard) = self.token.lock() {
            *guard = Some(token.to_owned());
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        if let Ok(mut guard) = self.token.lock() {
            *guard = None;
        }
        Ok(())
    }
}

/// Holds the current administrator session for the whole process.
///
/// Built on a watch channel: reads are lock-free clones, and any number of
/// subscribers observe changes. All mutation goes through [`set_admin`] and
/// [`logout`], which also keep the durable token copy in sync.
///
/// [`set_admin`]: SessionStore::set_admin
/// [`logout`]: SessionStore::logout
#[derive(Debug)]
pub struct SessionStore {
    tx: watch::Sender<Option<AdminSession>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Create an empty (logged out) store.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    /// The current session, if an admin is logged in.
    #[must_use]
    pub fn current(&self) -> Option<AdminSession> {
        self.tx.borrow().clone()
    }

    /// Subscribe for session change notifications.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<AdminSession>> {
        self.tx.subscribe()
    }

    /// Install `session` as the current admin and persist its token.
    ///
    /// No validation of the token's correctness happens here; that is the
    /// auth guard's job.
    ///
    /// # Errors
    ///
    /// Returns an error if the durable token copy cannot be written. The
    /// in-memory session is not changed in that case.
    pub fn set_admin(
        &self,
        session: AdminSession,
        tokens: &dyn TokenStore,
    ) -> Result<(), TokenStoreError> {
        tokens.save(&session.token)?;
        self.tx.send_replace(Some(session));
        Ok(())
    }

    /// Clear the current session and remove the durable token.
    ///
    /// # Errors
    ///
    /// Returns an error if the durable token cannot be removed. The
    /// in-memory session is still cleared.
    pub fn logout(&self, tokens: &dyn TokenStore) -> Result<(), TokenStoreError> {
        let result = tokens.clear();
        self.tx.send_replace(None);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(token: &str) -> AdminSession {
        AdminSession {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            token: token.into(),
        }
    }

    #[test]
    fn test_set_admin_persists_token() {
        let store = SessionStore::new();
        let tokens = MemoryTokenStore::new();

        store
            .set_admin(session("tok-1"), &tokens)
            .expect("set_admin");

        assert_eq!(store.current().map(|s| s.token), Some("tok-1".into()));
        assert_eq!(tokens.load().expect("load"), Some("tok-1".into()));
    }

    #[test]
    fn test_logout_clears_session_and_durable_token() {
        let store = SessionStore::new();
        let tokens = MemoryTokenStore::with_token("tok-1");

        store
            .set_admin(session("tok-1"), &tokens)
            .expect("set_admin");
        store.logout(&tokens).expect("logout");

        assert!(store.current().is_none());
        assert_eq!(tokens.load().expect("load"), None);
    }

    #[tokio::test]
    async fn test_subscribers_observe_changes() {
        let store = SessionStore::new();
        let tokens = MemoryTokenStore::new();
        let mut rx = store.subscribe();

        store
            .set_admin(session("tok-2"), &tokens)
            .expect("set_admin");

        rx.changed().await.expect("change notification");
        assert_eq!(
            rx.borrow().as_ref().map(|s| s.token.clone()),
            Some("tok-2".into())
        );
    }
}
