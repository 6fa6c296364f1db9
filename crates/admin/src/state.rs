//! Application state shared by every dashboard view.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use orderdesk_core::CustomerId;

use crate::{
    config::DashboardConfig,
    data::Snapshot,
    error::AppError,
    services::{CustomerIndex, CustomerSummary, DashboardSession, DashboardStats},
};

/// Configuration plus the immutable snapshot it produced.
///
/// Cheap to clone; clones share the snapshot.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
struct AppStateInner {
    config: DashboardConfig,
    snapshot: Snapshot,
}

impl AppState {
    /// Generate a snapshot from `config` as of `now`.
    #[must_use]
    pub fn new(config: DashboardConfig, now: DateTime<Utc>) -> Self {
        let snapshot = Snapshot::from_config(&config.generator, now);
        Self::with_snapshot(config, snapshot)
    }

    /// Use an existing snapshot.
    #[must_use]
    pub fn with_snapshot(config: DashboardConfig, snapshot: Snapshot) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, snapshot }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        &self.inner.snapshot
    }

    /// Index over the snapshot. Build once per view and reuse it.
    #[must_use]
    pub fn customer_index(&self) -> CustomerIndex<'_> {
        let snapshot = self.snapshot();
        CustomerIndex::build(&snapshot.customers, &snapshot.orders)
    }

    /// Dashboard figures over every order, regardless of filters.
    #[must_use]
    pub fn stats(&self) -> DashboardStats {
        DashboardStats::from_orders(&self.snapshot().orders)
    }

    /// A fresh session using the configured search debounce.
    #[must_use]
    pub fn session(&self) -> DashboardSession {
        DashboardSession::new(self.config().search_debounce)
    }

    /// Customer detail view.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no customer has this ID.
    pub fn customer_summary(&self, id: &CustomerId) -> Result<CustomerSummary<'_>, AppError> {
        self.customer_index()
            .summary(id)
            .ok_or_else(|| AppError::NotFound(format!("customer {id}")))
    }
}
