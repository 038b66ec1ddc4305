//! Stock Alchemist Admin library.
//!
//! Everything behind the dashboard that is not presentation:
//!
//! - [`services::session`] - who is logged in
//! - [`services::catalog`] - products and orders, the single source of truth
//! - [`views`] - pure derivations each dashboard page renders
//! - [`middleware::auth`] - the one capability gate every view goes through
//! - [`state`] - the explicit application object that owns both stores
//!
//! All data lives in memory and resets when the process exits.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod seed;
pub mod services;
pub mod simulated;
pub mod state;
pub mod views;

pub use config::AdminConfig;
pub use error::AppError;
pub use state::AppState;
