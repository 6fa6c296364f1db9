//! Per-user dashboard session: the active filters plus a debounced search box.
//!
//! Time is supplied by the caller. `queue_search` records what the user typed
//! and `poll` applies it once the input has been quiet for the configured
//! period, so the filter engine is not rerun on every keystroke.
//!
//! `queue_search`/`poll` are for interactive front ends that feed keystrokes
//! and poll on each tick of their event loop. One-shot callers such as
//! `od-cli orders` apply the term directly with `set_search`.

use std::time::{Duration, Instant};

use chrono::NaiveDate;

use orderdesk_core::{DateRange, Order};

use super::{CustomerIndex, DashboardStats, FilterState, RegionFilter, StatusFilter, filter_orders};
use crate::data::Snapshot;
use crate::error::AppError;

/// Default quiet period before a typed search is applied.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingSearch {
    term: String,
    deadline: Instant,
}

/// Filter selections for one dashboard view.
#[derive(Debug, Clone)]
pub struct DashboardSession {
    filters: FilterState,
    search_debounce: Duration,
    pending_search: Option<PendingSearch>,
}

impl Default for DashboardSession {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEBOUNCE)
    }
}

impl DashboardSession {
    #[must_use]
    pub fn new(search_debounce: Duration) -> Self {
        Self {
            filters: FilterState::default(),
            search_debounce,
            pending_search: None,
        }
    }

    /// The filters currently applied.
    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    #[must_use]
    pub const fn search_debounce(&self) -> Duration {
        self.search_debounce
    }

    pub fn set_region(&mut self, region: impl Into<RegionFilter>) {
        self.filters.region = region.into();
    }

    pub fn set_status(&mut self, status: impl Into<StatusFilter>) {
        self.filters.status = status.into();
    }

    /// Apply a search term immediately, dropping any queued term.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.pending_search = None;
        self.filters.search = term.into();
    }

    pub fn clear_search(&mut self) {
        self.set_search(String::new());
    }

    /// Validate and apply a date range.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidDateRange`] when `start` is after `end`.
    /// The previously applied range is left in place.
    pub fn set_date_range(
        &mut self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<(), AppError> {
        match DateRange::new(start, end) {
            Ok(range) => {
                self.filters.date_range = range;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(
                    start = ?start,
                    end = ?end,
                    error = %e,
                    "Rejected date range; keeping previous range"
                );
                Err(e.into())
            }
        }
    }

    pub fn clear_date_range(&mut self) {
        self.filters.date_range = DateRange::unbounded();
    }

    /// Drop every selection and any queued search.
    pub fn reset(&mut self) {
        self.filters = FilterState::default();
        self.pending_search = None;
    }

    /// Record a search term typed at `now`. Replaces any earlier queued term
    /// and restarts the quiet period.
    pub fn queue_search(&mut self, term: impl Into<String>, now: Instant) {
        let deadline = now.checked_add(self.search_debounce).unwrap_or(now);
        self.pending_search = Some(PendingSearch {
            term: term.into(),
            deadline,
        });
    }

    /// The queued, not yet applied search term.
    #[must_use]
    pub fn pending_search(&self) -> Option<&str> {
        self.pending_search.as_ref().map(|p| p.term.as_str())
    }

    /// Apply the queued search if its quiet period has elapsed by `now`.
    ///
    /// Returns `true` when the applied filters changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let due = self
            .pending_search
            .as_ref()
            .is_some_and(|pending| now >= pending.deadline);
        if !due {
            return false;
        }

        let Some(pending) = self.pending_search.take() else {
            return false;
        };
        if pending.term == self.filters.search {
            return false;
        }

        tracing::debug!(search = %pending.term, "Applying debounced search");
        self.filters.search = pending.term;
        true
    }

    /// Orders in `snapshot` matching the applied filters, names resolved via
    /// `index`.
    #[must_use]
    pub fn filtered<'a>(&self, snapshot: &'a Snapshot, index: &CustomerIndex<'_>) -> Vec<&'a Order> {
        filter_orders(&snapshot.orders, &self.filters, |id| index.customer_name(id))
    }

    /// Dashboard figures for an already filtered order list.
    #[must_use]
    pub fn stats(&self, orders: &[&Order]) -> DashboardStats {
        DashboardStats::aggregate(orders.iter().copied())
    }
}
