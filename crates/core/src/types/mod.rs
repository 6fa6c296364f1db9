//! Core types for Order Desk.
//!
//! This module provides type-safe wrappers for the dashboard's domain concepts.

pub mod customer;
pub mod date_range;
pub mod id;
pub mod order;
pub mod price;
pub mod region;
pub mod status;

pub use customer::Customer;
pub use date_range::{DateRange, DateRangeError};
pub use id::*;
pub use order::Order;
pub use price::{Currency, Price};
pub use region::Region;
pub use status::OrderStatus;

/// Error returned when a string does not name a known enum variant.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {kind}: {value}")]
pub struct ParseEnumError {
    /// What was being parsed (e.g. "region").
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}
