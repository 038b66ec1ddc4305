//! Authentication gate for dashboard views.
//!
//! Every view and mutation on [`AppState`](crate::state::AppState) takes a
//! [`RequireAuth`], and the only way to get one is from a session that holds
//! an identity. The "not logged in" branch therefore lives here instead of in
//! each view.

use thiserror::Error;

use stock_alchemist_core::Identity;

use crate::services::SessionStore;

/// Proof that a logged-in identity was present when the gate was passed.
///
/// # Example
///
/// ```rust,ignore
/// let auth = RequireAuth::from_session(state.session())?;
/// let home = state.home(&auth);
/// ```
#[derive(Debug, Clone)]
pub struct RequireAuth(pub Identity);

/// Returned when a view is requested without a logged-in identity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthRejection {
    /// No identity; the caller should show the login prompt.
    #[error("login required")]
    Unauthenticated,
}

impl RequireAuth {
    /// Pass the gate with the session's current identity.
    ///
    /// # Errors
    ///
    /// Returns [`AuthRejection::Unauthenticated`] if nobody is logged in.
    pub fn from_session(session: &SessionStore) -> Result<Self, AuthRejection> {
        session
            .current_identity()
            .map(Self)
            .ok_or(AuthRejection::Unauthenticated)
    }

    #[must_use]
    pub const fn identity(&self) -> &Identity {
        &self.0
    }
}
