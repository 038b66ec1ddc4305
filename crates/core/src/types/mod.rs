//! Core types for Stock Alchemist.
//!
//! This module provides type-safe wrappers for common domain concepts and the
//! three entities held by the dashboard: identities, products, and orders.

pub mod email;
pub mod id;
pub mod identity;
pub mod money;
pub mod order;
pub mod product;
pub mod status;

pub use email::{Email, EmailError};
pub use id::*;
pub use identity::Identity;
pub use money::{Money, MoneyError};
pub use order::{LineItem, Order};
pub use product::Product;
pub use status::*;
