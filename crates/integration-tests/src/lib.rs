//! Integration tests for Order Desk.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p orderdesk-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `dashboard_pipeline` - generator, filter engine and aggregator together
//! - `customer_lookup` - customer index and detail view over generated data
//!
//! Every test runs against a seeded snapshot, so results are reproducible.

use chrono::{DateTime, Utc};
use rand::{SeedableRng, rngs::StdRng};

use orderdesk_admin::{
    config::{DashboardConfig, GeneratorConfig},
    data::Snapshot,
    state::AppState,
};

/// Fixed "now" for generated snapshots.
#[must_use]
pub fn reference_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-02-15T08:00:00Z")
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_default()
}

/// Shared fixture: a seeded snapshot plus the state wrapping it.
pub struct TestContext {
    pub state: AppState,
}

impl TestContext {
    /// Snapshot with the default generator sizes.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_sizes(seed, 30, 50)
    }

    /// Snapshot with custom sizes, covering the 90 days before
    /// [`reference_now`].
    #[must_use]
    pub fn with_sizes(seed: u64, customers_per_region: usize, orders_per_region: usize) -> Self {
        let generator = GeneratorConfig {
            customers_per_region,
            orders_per_region,
            history_days: 90,
            seed: Some(seed),
        };
        let mut rng = StdRng::seed_from_u64(seed);
        let snapshot = Snapshot::generate(&generator, &mut rng, reference_now());
        let config = DashboardConfig {
            generator,
            ..Default::default()
        };

        Self {
            state: AppState::with_snapshot(config, snapshot),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        self.state.snapshot()
    }
}
