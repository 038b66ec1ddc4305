//! Unified error handling for admin.

use thiserror::Error;

use crate::config::ConfigError;
use crate::middleware::auth::AuthRejection;
use crate::seed::SeedError;
use crate::services::session::AuthError;

/// Application-level error type for the dashboard.
///
/// Every variant is local and recoverable: the caller can retry the action
/// that produced it.
#[derive(Debug, Error)]
pub enum AppError {
    /// Login attempt with the wrong credentials.
    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthError),

    /// A view or mutation was attempted without a logged-in identity.
    #[error("Unauthorized: {0}")]
    Unauthorized(#[from] AuthRejection),

    /// Update targeted a product or order id that is not in the store.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Seed catalog could not be loaded.
    #[error("Seed error: {0}")]
    Seed(#[from] SeedError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl AppError {
    /// Message suitable for showing to the person at the dashboard.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Auth(e) => e.to_string(),
            Self::Unauthorized(_) => "Please log in to continue".to_string(),
            Self::NotFound(what) => format!("{what} no longer exists"),
            Self::Seed(_) | Self::Config(_) => "The dashboard could not start".to_string(),
        }
    }
}
