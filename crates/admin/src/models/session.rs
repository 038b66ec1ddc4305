//! Session-related types for dashboard authentication.

use serde::Serialize;

use stock_alchemist_core::Identity;

/// Published state of the session store.
///
/// Two states only: anonymous (`identity` is `None`) and authenticated.
/// `error` holds the message from the last failed login and is cleared by
/// the next successful login or by logout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub identity: Option<Identity>,
    pub error: Option<String>,
}

impl AuthState {
    /// Derived flag: an identity is installed.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}
