//! The logged-in account.

use serde::{Deserialize, Serialize};

use super::{Email, Role, UserId};

/// Identity installed by a successful login.
///
/// At most one identity is live at a time; it is created at login and
/// dropped at logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: UserId,
    pub username: String,
    pub role: Role,
    pub email: Email,
}

impl Identity {
    /// Whether this identity has full dashboard access.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Single uppercase letter used for the account avatar.
    #[must_use]
    pub fn initial(&self) -> Option<char> {
        self.username.chars().next().map(|c| c.to_ascii_uppercase())
    }
}
