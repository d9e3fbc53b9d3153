//! Explicit session context.
//!
//! The login token and current user travel in a [`SessionStore`] handed to
//! the client and the app, never in ambient global storage. A cleared store
//! is simply "not logged in".

use std::sync::{Arc, PoisonError, RwLock};

use backline_core::UserSummary;

/// Session data: the bearer token and the logged-in user.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserSummary>,
}

/// Shared handle to the session.
///
/// Cheaply cloneable; the client reads the token from here on every request
/// and the auth service writes the login result into it.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Session>>,
}

impl SessionStore {
    /// Create an empty (logged-out) session store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current bearer token, if logged in.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .token
            .clone()
    }

    /// The logged-in user, if any.
    #[must_use]
    pub fn user(&self) -> Option<UserSummary> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .user
            .clone()
    }

    /// Whether a token is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Store a successful login.
    pub fn store_login(&self, token: String, user: UserSummary) {
        let mut session = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        session.token = Some(token);
        session.user = Some(user);
    }

    /// Clear the session (logout).
    pub fn clear(&self) {
        let mut session = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *session = Session::default();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use backline_core::{Email, Role, UserId};

    fn user() -> UserSummary {
        UserSummary {
            id: UserId::new(1),
            email: Email::parse("admin@backline.pe").unwrap(),
            name: "Admin".into(),
            role: Role::Admin,
        }
    }

    #[test]
    fn test_login_roundtrip() {
        let store = SessionStore::new();
        assert!(!store.is_authenticated());

        store.store_login("token-123".into(), user());
        assert!(store.is_authenticated());
        assert_eq!(store.token().unwrap(), "token-123");
        assert_eq!(store.user().unwrap().name, "Admin");

        store.clear();
        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let store = SessionStore::new();
        let other = store.clone();
        store.store_login("token".into(), user());
        assert!(other.is_authenticated());
    }
}
