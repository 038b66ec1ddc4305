//! Session store.
//!
//! Holds at most one logged-in identity. Login is a comparison against the
//! single configured demo credential; there are no tokens and no expiry.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use stock_alchemist_core::Identity;

use crate::config::AuthConfig;
use crate::models::AuthState;

/// Login failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Username/password pair does not match the accepted credential.
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Current session, shared by every view.
///
/// Cloning is cheap and every clone observes the same session. State changes
/// are published to subscribers.
#[derive(Clone)]
pub struct SessionStore {
    auth: Arc<AuthConfig>,
    state: Arc<watch::Sender<AuthState>>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Create an anonymous session that accepts the given credential.
    #[must_use]
    pub fn new(auth: AuthConfig) -> Self {
        let (state, _) = watch::channel(AuthState::default());
        Self {
            auth: Arc::new(auth),
            state: Arc::new(state),
        }
    }

    /// Attempt to log in.
    ///
    /// On success the configured identity is installed and any previous
    /// error is cleared. On failure the error message is recorded and the
    /// current identity is left as it was.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] if the pair does not match.
    pub fn login(&self, username: &str, password: &str) -> Result<Identity, AuthError> {
        if !self.auth.accepts(username, password) {
            let err = AuthError::InvalidCredentials;
            warn!(username, "Login rejected");
            self.state.send_modify(|state| state.error = Some(err.to_string()));
            return Err(err);
        }

        let identity = self.auth.identity();
        info!(user_id = %identity.id, role = %identity.role, "Login succeeded");
        self.state.send_replace(AuthState {
            identity: Some(identity.clone()),
            error: None,
        });
        Ok(identity)
    }

    /// Clear the identity and any error. Calling it again is a no-op and
    /// does not notify subscribers.
    pub fn logout(&self) {
        let changed = self.state.send_if_modified(|state| {
            if *state == AuthState::default() {
                return false;
            }
            *state = AuthState::default();
            true
        });
        if changed {
            info!("Logged out");
        } else {
            debug!("Logout on anonymous session ignored");
        }
    }

    /// The logged-in identity, if any.
    #[must_use]
    pub fn current_identity(&self) -> Option<Identity> {
        self.state.borrow().identity.clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    /// Message from the last failed login, if not yet cleared.
    #[must_use]
    pub fn last_error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    /// Copy of the full session state.
    #[must_use]
    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Receive a notification every time the session state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }
}
