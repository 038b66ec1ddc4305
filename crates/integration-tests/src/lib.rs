//! Integration tests for Stock Alchemist.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p stock-alchemist-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `dashboard_flow` - Login, every view, mutations, logout
//! - `store_consistency` - Snapshots and change notification under concurrent use
//! - `seed_files` - The checked-in seed catalog and the seed error paths

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use stock_alchemist_admin::middleware::RequireAuth;
use stock_alchemist_admin::models::Catalog;
use stock_alchemist_admin::seed::demo_catalog;
use stock_alchemist_admin::{AdminConfig, AppState};

/// A dashboard with the demo catalog and a logged-in session.
pub struct TestContext {
    pub state: AppState,
    pub auth: RequireAuth,
}

impl TestContext {
    /// Log in to a fresh dashboard holding the demo catalog.
    ///
    /// # Panics
    ///
    /// Panics if the default demo credential is rejected.
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(demo_catalog())
    }

    /// Log in to a fresh dashboard holding `catalog`.
    ///
    /// # Panics
    ///
    /// Panics if the default demo credential is rejected.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn with_catalog(catalog: Catalog) -> Self {
        let state = AppState::new(AdminConfig::default(), catalog);
        state
            .login("user", "pass")
            .expect("default demo credential is accepted");
        let auth = state.require_auth().expect("session holds an identity");
        Self { state, auth }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Path of a file under the workspace `seeds/` directory.
#[must_use]
pub fn seed_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../seeds")
        .join(name)
}
