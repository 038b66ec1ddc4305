//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; defaults reproduce the demo setup.
//!
//! - `SA_DEMO_USERNAME` - Accepted login username (default: user)
//! - `SA_DEMO_PASSWORD` - Accepted login password (default: pass)
//! - `SA_DEMO_EMAIL` - Email of the identity installed at login (default: user@example.com)
//! - `SA_RANKING_LIMIT` - Products shown in the revenue ranking (default: 5)
//! - `SA_RECENT_ORDERS` - Orders shown on the home view (default: 5)
//! - `SA_WHOLESALE_DISCOUNT` - Fraction taken off list price for wholesale buyers,
//!   between 0 and 1 (default: 0.30)

use std::str::FromStr;

use rust_decimal::Decimal;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use stock_alchemist_core::{Email, Identity, Role, UserId};

const DEFAULT_USERNAME: &str = "user";
const DEFAULT_PASSWORD: &str = "pass";
const DEFAULT_EMAIL: &str = "user@example.com";
const DEFAULT_IDENTITY_ID: &str = "1";
const DEFAULT_RANKING_LIMIT: usize = 5;
const DEFAULT_RECENT_ORDERS: usize = 5;
/// 30% off list price.
const DEFAULT_WHOLESALE_DISCOUNT: Decimal = Decimal::from_parts(30, 0, 0, false, 2);

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Admin application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Demo login configuration
    pub auth: AuthConfig,
    /// Number of products in the revenue ranking
    pub ranking_limit: usize,
    /// Number of orders on the home view
    pub recent_orders_limit: usize,
    /// Fraction taken off list price in the wholesale catalog
    pub wholesale_discount: Decimal,
}

/// The single accepted credential and the identity it unlocks.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct AuthConfig {
    pub username: String,
    pub password: SecretString,
    pub email: Email,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("email", &self.email)
            .finish()
    }
}

impl AuthConfig {
    /// Whether the pair equals the accepted credential.
    #[must_use]
    pub fn accepts(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password.expose_secret()
    }

    /// Identity installed by a successful login.
    #[must_use]
    pub fn identity(&self) -> Identity {
        Identity {
            id: UserId::new(DEFAULT_IDENTITY_ID),
            username: self.username.clone(),
            role: Role::Admin,
            email: self.email.clone(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            password: SecretString::from(DEFAULT_PASSWORD),
            email: default_email(),
        }
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            auth: AuthConfig::default(),
            ranking_limit: DEFAULT_RANKING_LIMIT,
            recent_orders_limit: DEFAULT_RECENT_ORDERS,
            wholesale_discount: DEFAULT_WHOLESALE_DISCOUNT,
        }
    }
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let username = lookup("SA_DEMO_USERNAME").unwrap_or_else(|| DEFAULT_USERNAME.to_string());
        let password = SecretString::from(
            lookup("SA_DEMO_PASSWORD").unwrap_or_else(|| DEFAULT_PASSWORD.to_string()),
        );
        let email = match lookup("SA_DEMO_EMAIL") {
            Some(raw) => Email::parse(&raw).map_err(|e| invalid("SA_DEMO_EMAIL", &e))?,
            None => default_email(),
        };

        let ranking_limit = parse_or("SA_RANKING_LIMIT", &lookup, DEFAULT_RANKING_LIMIT)?;
        let recent_orders_limit = parse_or("SA_RECENT_ORDERS", &lookup, DEFAULT_RECENT_ORDERS)?;
        let wholesale_discount =
            parse_or("SA_WHOLESALE_DISCOUNT", &lookup, DEFAULT_WHOLESALE_DISCOUNT)?;
        if wholesale_discount < Decimal::ZERO || wholesale_discount > Decimal::ONE {
            return Err(ConfigError::InvalidEnvVar(
                "SA_WHOLESALE_DISCOUNT".to_string(),
                format!("{wholesale_discount} is outside 0..=1"),
            ));
        }

        Ok(Self {
            auth: AuthConfig {
                username,
                password,
                email,
            },
            ranking_limit,
            recent_orders_limit,
            wholesale_discount,
        })
    }

    /// Multiplier applied to list prices in the wholesale catalog.
    #[must_use]
    pub fn wholesale_multiplier(&self) -> Decimal {
        Decimal::ONE - self.wholesale_discount
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn default_email() -> Email {
    Email::from_static(DEFAULT_EMAIL)
}

fn parse_or<T, F>(key: &str, lookup: &F, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(key).map_or(Ok(default), |raw| {
        raw.trim().parse::<T>().map_err(|e| invalid(key, &e))
    })
}

fn invalid(key: &str, err: &impl std::fmt::Display) -> ConfigError {
    ConfigError::InvalidEnvVar(key.to_string(), err.to_string())
}
