//! Cross-cutting checks applied in front of every view.
//!
//! - `auth` - Login gate shared by all dashboard views and mutations

pub mod auth;

pub use auth::{AuthRejection, RequireAuth};
