//! Subcommand implementations.
//!
//! Each command writes its result to the given writer so it can be
//! exercised without a terminal.

pub mod customer;
pub mod orders;
pub mod stats;
