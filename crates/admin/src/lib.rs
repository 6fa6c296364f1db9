//! Order Desk Admin library.
//!
//! Everything the dashboard computes lives here as plain functions over an
//! in-memory [`data::Snapshot`]:
//!
//! - [`services::customer_index`] - customer and per-customer order lookups
//! - [`services::order_filter`] - region/status/search/date-range filtering
//! - [`services::dashboard_stats`] - totals and regional breakdowns
//! - [`services::session`] - the user's filter selections, with debounced search
//!
//! Nothing here blocks, spawns or performs I/O beyond reading configuration
//! from the environment. Callers decide when to recompute.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod data;
pub mod error;
pub mod services;
pub mod state;
