//! Stock Alchemist Core - Shared domain types.
//!
//! This crate provides the entities every other Stock Alchemist component
//! works with:
//! - `admin` - Session store, catalog & order store, and dashboard views
//! - `cli` - Command-line access to the dashboard views
//!
//! # Architecture
//!
//! The core crate contains only types and their invariants - no I/O, no
//! shared state, no logging. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, money, emails, statuses, and the catalog entities

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
