//! Order Desk Core - Shared domain types.
//!
//! This crate provides the types used across all Order Desk components:
//! - `admin` - Filtering, aggregation and customer lookups over order snapshots
//! - `cli` - Command-line driver for browsing a generated snapshot
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no randomness,
//! no clocks. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Regions, currencies, prices, statuses, IDs, customers, orders
//!   and date ranges

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
