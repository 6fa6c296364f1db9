//! Synthetic data for the dashboard.
//!
//! The generator stands in for a real backend: it produces a [`Snapshot`] of
//! customers and orders that the rest of the crate treats as immutable.
//! Nothing downstream depends on how the data was produced, only on its shape.

mod customers;
mod orders;

pub use customers::generate_customers;
pub use orders::{PRODUCT_CATALOGUE, generate_orders};

use chrono::{DateTime, Utc};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Serialize;
use tracing::instrument;

use orderdesk_core::{Customer, Order};

use crate::config::GeneratorConfig;

/// Immutable customers and orders for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub customers: Vec<Customer>,
    pub orders: Vec<Order>,
}

impl Snapshot {
    /// Wrap existing collections.
    #[must_use]
    pub const fn new(customers: Vec<Customer>, orders: Vec<Order>) -> Self {
        Self { customers, orders }
    }

    /// Generate a snapshot using the configured seed, or OS entropy when no
    /// seed is set.
    #[must_use]
    pub fn from_config(config: &GeneratorConfig, now: DateTime<Utc>) -> Self {
        let mut rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self::generate(config, &mut rng, now)
    }

    /// Generate a snapshot from the given RNG.
    #[instrument(skip_all, fields(
        customers_per_region = config.customers_per_region,
        orders_per_region = config.orders_per_region,
    ))]
    pub fn generate<R: Rng + ?Sized>(
        config: &GeneratorConfig,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Self {
        let customers = generate_customers(rng, config.customers_per_region);
        let orders = generate_orders(
            rng,
            &customers,
            config.orders_per_region,
            now,
            config.history_days,
        );

        tracing::info!(
            customers = customers.len(),
            orders = orders.len(),
            "Generated snapshot"
        );

        Self { customers, orders }
    }
}
