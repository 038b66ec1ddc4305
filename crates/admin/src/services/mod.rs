//! Stateful services for admin.
//!
//! # Services
//!
//! - `session` - Demo-credential login and the current identity
//! - `catalog` - Products and orders with snapshot reads and change notification

pub mod catalog;
pub mod session;

pub use catalog::CatalogStore;
pub use session::{AuthError, SessionStore};
