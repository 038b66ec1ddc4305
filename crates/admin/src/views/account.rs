//! Account page for the logged-in identity.

use serde::Serialize;

use stock_alchemist_core::{Identity, Role, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    pub id: UserId,
    pub username: String,
    pub email: String,
    /// Part of the email after the `@`, shown as the organization.
    pub email_domain: String,
    pub role: Role,
    pub initial: Option<char>,
    pub is_admin: bool,
}

impl From<&Identity> for AccountView {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id.clone(),
            username: identity.username.clone(),
            email: identity.email.to_string(),
            email_domain: identity.email.domain().to_owned(),
            role: identity.role,
            initial: identity.initial(),
            is_admin: identity.is_admin(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use stock_alchemist_core::Email;

    use super::*;

    #[test]
    fn test_account_view() {
        let identity = Identity {
            id: UserId::new("7"),
            username: "mika".to_string(),
            role: Role::Influencer,
            email: Email::parse("mika@example.com").unwrap(),
        };

        let view = AccountView::from(&identity);

        assert_eq!(view.email, "mika@example.com");
        assert_eq!(view.email_domain, "example.com");
        assert_eq!(view.initial, Some('M'));
        assert!(!view.is_admin);
    }
}
