//! Dashboard configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `ORDERDESK_CUSTOMERS_PER_REGION` - Generated customers per region (default: 30, max: 100000)
//! - `ORDERDESK_ORDERS_PER_REGION` - Generated orders per region (default: 50, max: 100000)
//! - `ORDERDESK_HISTORY_DAYS` - Orders are created within this many days before now (default: 90, range: 1-36500)
//! - `ORDERDESK_SEED` - Seed for the data generator; random when unset
//! - `ORDERDESK_SEARCH_DEBOUNCE_MS` - Quiet period before a typed search is applied (default: 300)

use std::time::Duration;

use thiserror::Error;

const DEFAULT_CUSTOMERS_PER_REGION: usize = 30;
const DEFAULT_ORDERS_PER_REGION: usize = 50;
const DEFAULT_HISTORY_DAYS: u32 = 90;
const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

/// Upper bound for generated customers and orders per region.
pub const MAX_PER_REGION: usize = 100_000;
/// Upper bound for the order creation window (about a century).
pub const MAX_HISTORY_DAYS: u32 = 36_500;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Dashboard configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Mock data generator settings
    pub generator: GeneratorConfig,
    /// How long search input must be quiet before it is applied
    pub search_debounce: Duration,
}

/// Settings for the synthetic snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Customers generated for each region
    pub customers_per_region: usize,
    /// Orders generated for each region that has customers
    pub orders_per_region: usize,
    /// Width of the order creation window, in days before now
    pub history_days: u32,
    /// Fixed RNG seed for reproducible snapshots
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            customers_per_region: DEFAULT_CUSTOMERS_PER_REGION,
            orders_per_region: DEFAULT_ORDERS_PER_REGION,
            history_days: DEFAULT_HISTORY_DAYS,
            seed: None,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            search_debounce: Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] if a variable is set but cannot
    /// be parsed or is out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`DashboardConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let customers_per_region = ensure_within(
            "ORDERDESK_CUSTOMERS_PER_REGION",
            parse_or_default(
                &lookup,
                "ORDERDESK_CUSTOMERS_PER_REGION",
                DEFAULT_CUSTOMERS_PER_REGION,
            )?,
            0,
            MAX_PER_REGION,
        )?;
        let orders_per_region = ensure_within(
            "ORDERDESK_ORDERS_PER_REGION",
            parse_or_default(
                &lookup,
                "ORDERDESK_ORDERS_PER_REGION",
                DEFAULT_ORDERS_PER_REGION,
            )?,
            0,
            MAX_PER_REGION,
        )?;
        let history_days = ensure_within(
            "ORDERDESK_HISTORY_DAYS",
            parse_or_default(&lookup, "ORDERDESK_HISTORY_DAYS", DEFAULT_HISTORY_DAYS)?,
            1,
            MAX_HISTORY_DAYS,
        )?;
        let seed = parse_optional(&lookup, "ORDERDESK_SEED")?;
        let debounce_ms = parse_or_default(
            &lookup,
            "ORDERDESK_SEARCH_DEBOUNCE_MS",
            DEFAULT_SEARCH_DEBOUNCE_MS,
        )?;

        Ok(Self {
            generator: GeneratorConfig {
                customers_per_region,
                orders_per_region,
                history_days,
                seed,
            },
            search_debounce: Duration::from_millis(debounce_ms),
        })
    }

    /// Override the generator seed (e.g. from a command-line flag).
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.generator.seed = seed;
        }
        self
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn parse_optional<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
        })
        .transpose()
}

fn parse_or_default<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    Ok(parse_optional(lookup, key)?.unwrap_or(default))
}

fn ensure_within<T>(key: &str, value: T, min: T, max: T) -> Result<T, ConfigError>
where
    T: PartialOrd + std::fmt::Display,
{
    if value < min || value > max {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("must be between {min} and {max}, got {value}"),
        ));
    }
    Ok(value)
}
