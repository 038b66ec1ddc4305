//! Domain models for admin.

pub mod catalog;
pub mod session;

pub use catalog::{Catalog, CatalogSnapshot, UNKNOWN_PRODUCT};
pub use session::AuthState;
