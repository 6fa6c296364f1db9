//! Unified error handling for the dashboard.

use thiserror::Error;

use orderdesk_core::{DateRangeError, ParseEnumError};

use crate::config::ConfigError;

/// Application-level error type for the dashboard.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A date range was rejected; the previously applied range stays active.
    #[error("Invalid date range: {0}")]
    InvalidDateRange(#[from] DateRangeError),

    /// A region or status filter value was not recognised.
    #[error("Invalid filter: {0}")]
    InvalidFilter(#[from] ParseEnumError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Message suitable for showing next to the offending input.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidDateRange(e) => e.to_string(),
            _ => self.to_string(),
        }
    }
}
